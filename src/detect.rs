use crate::config::DetectionConfig;
use crate::script::{Script, ScriptInfo, SCRIPT_COUNT};

#[cfg(feature = "serialization")]
use serde::Serialize;

const TRADITIONAL_CHINESE: &str = "繁體國說時個們來對會學華龍鳳張劉陳楊趙黃吳孫鄭謝韓馮蕭鄧許呂羅馬偉紅軍強雲靜麗蘭東長";

/// Bucket a single character by Unicode block. Returns `None` for
/// characters outside every block we know about.
pub(crate) fn classify(c: char) -> Option<Script> {
    let script = match c as u32 {
        0x41..=0x5A | 0x61..=0x7A => Script::Latin,
        0x00C0..=0x024F | 0x1E00..=0x1EFF => latin_variant(c),
        0x0400..=0x052F | 0x2DE0..=0x2DFF => Script::Cyrillic,
        0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF => Script::Arabic,
        0x0E00..=0x0E7F => Script::Thai,
        0x3040..=0x30FF => Script::Japanese,
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0x20000..=0x2A6DF => Script::Chinese,
        0xAC00..=0xD7AF | 0x1100..=0x11FF | 0x3130..=0x318F => Script::Korean,
        _ => return None,
    };
    Some(script)
}

#[inline]
fn latin_variant(c: char) -> Script {
    if is_vietnamese_letter(c) {
        Script::Vietnamese
    } else if is_german_letter(c) {
        Script::German
    } else {
        Script::Latin
    }
}

/// Letters that only Vietnamese uses among Latin orthographies.
#[inline]
pub(crate) fn is_vietnamese_letter(c: char) -> bool {
    matches!(c, 'ă' | 'Ă' | 'đ' | 'Đ' | 'ư' | 'Ư' | 'ơ' | 'Ơ') || ('\u{1EA0}'..='\u{1EF9}').contains(&c)
}

#[inline]
fn is_german_letter(c: char) -> bool {
    matches!(c, 'ä' | 'Ä' | 'ö' | 'Ö' | 'ü' | 'Ü' | 'ß')
}

#[inline]
fn is_kana(c: char) -> bool {
    ('\u{3040}'..='\u{30FF}').contains(&c)
}

#[inline]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Identify the dominant script of `text`.
///
/// Never fails and never allocates; text with no letters is
/// `{unknown, 0}`.
///
/// # Examples
///
/// ```
/// use namecast::{detect_script, Script};
///
/// let info = detect_script("Привет");
/// assert_eq!(Script::Cyrillic, info.script);
/// assert_eq!(0.95, info.confidence);
///
/// assert_eq!(Script::Unknown, detect_script("").script);
/// ```
pub fn detect_script(text: &str) -> ScriptInfo {
    detect_script_with(text, &DetectionConfig::default())
}

pub fn detect_script_with(text: &str, config: &DetectionConfig) -> ScriptInfo {
    let mut counts = [0usize; SCRIPT_COUNT];
    let mut total = 0;
    let mut has_kana = false;
    let mut first_vietnamese: Option<char> = None;
    let mut distinct_vietnamese = 0;

    for c in text.chars().filter(|c| c.is_alphabetic()) {
        total += 1;
        let script = classify(c).unwrap_or(Script::Unknown);
        counts[script.index()] += 1;

        if script == Script::Japanese && is_kana(c) {
            has_kana = true;
        } else if script == Script::Vietnamese {
            let folded = fold(c);
            match first_vietnamese {
                None => {
                    first_vietnamese = Some(folded);
                    distinct_vietnamese = 1;
                }
                Some(first) if first != folded => distinct_vietnamese = 2,
                Some(_) => {}
            }
        }
    }

    if total == 0 {
        return ScriptInfo::UNKNOWN;
    }

    let latin_family = counts[Script::Latin.index()]
        + counts[Script::Vietnamese.index()]
        + counts[Script::German.index()];

    // Latin-alphabet language variants outrank plain Latin, and claim the
    // whole Latin-family letter count
    let mut buckets = counts;
    buckets[Script::Latin.index()] = 0;
    buckets[Script::Vietnamese.index()] = 0;
    buckets[Script::German.index()] = 0;
    let latin_label = if distinct_vietnamese >= config.vietnamese_min_marks {
        Script::Vietnamese
    } else if counts[Script::German.index()] > 0 {
        Script::German
    } else {
        Script::Latin
    };
    buckets[latin_label.index()] = latin_family;

    // Ideographs in text that also has kana are Japanese kanji
    if has_kana {
        buckets[Script::Japanese.index()] += buckets[Script::Chinese.index()];
        buckets[Script::Chinese.index()] = 0;
    }

    let mut winner = Script::Unknown;
    let mut max = 0;
    for script in Script::ALL.iter() {
        let count = buckets[script.index()];
        if count > max {
            max = count;
            winner = *script;
        }
    }

    let ratio = max as f64 / total as f64;
    let confidence = if ratio > config.dominant_ratio {
        config.dominant_confidence
    } else if ratio > config.strong_ratio {
        config.strong_confidence
    } else if ratio > config.moderate_ratio {
        config.moderate_confidence
    } else if latin_family > 0 {
        config.latin_confidence
    } else {
        ratio
    };

    ScriptInfo {
        script: winner,
        confidence,
    }
}

/// A coarse guess at the language behind a piece of text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct LanguageHint {
    pub language: &'static str,
    pub confidence: f64,
    pub indicators: Vec<&'static str>,
}

impl LanguageHint {
    fn new(language: &'static str, confidence: f64, indicator: &'static str) -> LanguageHint {
        LanguageHint {
            language,
            confidence,
            indicators: vec![indicator],
        }
    }

    fn unknown() -> LanguageHint {
        LanguageHint {
            language: "unknown",
            confidence: 0.1,
            indicators: Vec::new(),
        }
    }
}

pub(crate) fn vietnamese_marker_count(text: &str) -> usize {
    let diacritics = text
        .chars()
        .filter(|c| is_vietnamese_letter(*c) || matches!(fold(*c), 'â' | 'ê' | 'ô'))
        .count();
    let words = text
        .split_whitespace()
        .filter(|w| {
            let w = w.to_lowercase();
            w == "thị" || w == "văn"
        })
        .count();
    diacritics + words
}

/// Refine a script detection into a language guess, using letters that
/// only a single language uses.
pub fn detect_language(text: &str, info: &ScriptInfo) -> LanguageHint {
    match info.script {
        Script::Vietnamese => {
            LanguageHint::new("vi", 0.85, "vietnamese_diacritics")
        }
        Script::German => LanguageHint::new("de", 0.80, "german_umlauts"),
        Script::Latin | Script::Indonesian => {
            if vietnamese_marker_count(text) >= 2 {
                LanguageHint::new("vi", 0.85, "vietnamese_diacritics")
            } else if text
                .chars()
                .any(|c| matches!(c, 'ñ' | 'Ñ' | 'á' | 'é' | 'í' | 'ó' | 'ú' | '¿' | '¡'))
            {
                LanguageHint::new("es", 0.75, "spanish_characters")
            } else {
                LanguageHint::unknown()
            }
        }
        Script::Chinese => {
            if text.chars().any(|c| TRADITIONAL_CHINESE.contains(c)) {
                LanguageHint::new("zh-TW", 0.80, "traditional_characters")
            } else {
                LanguageHint::new("zh-CN", 0.75, "simplified_characters")
            }
        }
        Script::Japanese => LanguageHint::new("ja", 0.90, "kana"),
        Script::Korean => LanguageHint::new("ko", 0.90, "hangul"),
        Script::Cyrillic => {
            if text
                .chars()
                .any(|c| matches!(fold(c), 'ы' | 'э' | 'ъ' | 'ё'))
            {
                LanguageHint::new("ru", 0.80, "russian_letters")
            } else {
                LanguageHint::new("ru", 0.60, "cyrillic_script")
            }
        }
        Script::Arabic => LanguageHint::new("ar", 0.75, "arabic_script"),
        Script::Greek => LanguageHint::new("el", 0.90, "greek_script"),
        Script::Hebrew => LanguageHint::new("he", 0.85, "hebrew_script"),
        Script::Thai => LanguageHint::new("th", 0.85, "thai_script"),
        Script::Unknown => LanguageHint::unknown(),
    }
}
