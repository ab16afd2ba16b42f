use crate::config::TransliterationConfig;
use crate::decomposition::strip_marks;
use crate::detect::classify;
use crate::error::{Error, Result};
use crate::hangul;
use crate::script::{Script, Target};
use crate::tables::{ARABIC, CYRILLIC, GREEK, HANZI, HEBREW, KANA, LATIN, PUNCTUATION, THAI};
use compact_str::CompactString;
use smallvec::SmallVec;
use std::collections::HashMap;

#[cfg(feature = "serialization")]
use serde::Serialize;

/// An external source of per-character transliterations, consulted before
/// the built-in tables.
///
/// Returning `None` is a normal miss. Implementations must be safe to
/// share between threads; any timeout or caching is their own business.
pub trait Dictionary: Send + Sync {
    fn lookup(&self, c: char, source: Script, target: Target, locale: Option<&str>)
        -> Option<String>;
}

impl<F> Dictionary for F
where
    F: Fn(char, Script, Target, Option<&str>) -> Option<String> + Send + Sync,
{
    fn lookup(
        &self,
        c: char,
        source: Script,
        target: Target,
        locale: Option<&str>,
    ) -> Option<String> {
        self(c, source, target, locale)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    target: Option<Target>,
    locale: Option<CompactString>,
    output: String,
}

/// An in-memory `Dictionary`. Entries for the caller's exact locale win
/// over entries without a locale.
///
/// # Examples
///
/// ```
/// use namecast::{Dictionary, MapDictionary, Script, Target};
///
/// let mut dictionary = MapDictionary::new();
/// dictionary.insert('ё', "e");
/// dictionary.insert_for('ё', None, Some("uk"), "io");
///
/// assert_eq!(Some("e".to_string()), dictionary.lookup('ё', Script::Cyrillic, Target::Ascii, None));
/// assert_eq!(Some("io".to_string()), dictionary.lookup('ё', Script::Cyrillic, Target::Ascii, Some("uk")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapDictionary {
    entries: HashMap<char, SmallVec<[Entry; 1]>>,
}

impl MapDictionary {
    pub fn new() -> MapDictionary {
        MapDictionary::default()
    }

    /// Map `c` to `output` for every target and locale.
    pub fn insert<S: Into<String>>(&mut self, c: char, output: S) -> &mut MapDictionary {
        self.insert_for(c, None, None, output)
    }

    /// Map `c` to `output`, restricted to a target and/or locale.
    pub fn insert_for<S: Into<String>>(
        &mut self,
        c: char,
        target: Option<Target>,
        locale: Option<&str>,
        output: S,
    ) -> &mut MapDictionary {
        self.entries.entry(c).or_default().push(Entry {
            target,
            locale: locale.map(CompactString::new),
            output: output.into(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(|e| e.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Dictionary for MapDictionary {
    fn lookup(&self, c: char, _: Script, target: Target, locale: Option<&str>) -> Option<String> {
        let candidates = self.entries.get(&c)?;
        let applicable = || {
            candidates
                .iter()
                .filter(move |e| e.target.map_or(true, |t| t == target))
        };

        let localized = locale.and_then(|locale| {
            applicable().find(|e| {
                e.locale
                    .as_ref()
                    .map_or(false, |l| l.eq_ignore_ascii_case(locale))
            })
        });

        localized
            .or_else(|| applicable().find(|e| e.locale.is_none()))
            .map(|e| e.output.clone())
    }
}

/// Output of a transliteration, with the mean confidence of the rules
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct TransliterationResult {
    pub output: String,
    pub confidence: f64,
    pub notes: Vec<String>,
}

/// The rules tried for each character, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Dictionary,
    Builtin,
    Decomposition,
    Fallback,
}

impl Tier {
    pub fn weight(self, config: &TransliterationConfig) -> f64 {
        match self {
            Tier::Dictionary => config.dictionary_weight,
            Tier::Builtin => config.builtin_weight,
            Tier::Decomposition => config.decomposition_weight,
            Tier::Fallback => config.fallback_weight,
        }
    }
}

struct Context<'a> {
    dictionary: Option<&'a dyn Dictionary>,
    source: Script,
    target: Target,
    locale: Option<&'a str>,
    prev: Option<char>,
}

type Rule = fn(char, &Context) -> Option<CompactString>;

const RULES: [(Tier, Rule); 3] = [
    (Tier::Dictionary, from_dictionary),
    (Tier::Builtin, from_tables),
    (Tier::Decomposition, from_decomposition),
];

fn from_dictionary(c: char, ctx: &Context) -> Option<CompactString> {
    let output = ctx
        .dictionary?
        .lookup(c, ctx.source, ctx.target, ctx.locale)?;
    if ctx.target == Target::Ascii && !output.is_ascii() {
        log::warn!(
            "Ignoring non-ASCII dictionary entry {:?} for {:?} with ascii target",
            output,
            c
        );
        return None;
    }
    Some(CompactString::from(output))
}

fn from_tables(c: char, ctx: &Context) -> Option<CompactString> {
    if c.is_ascii() {
        let mut s = CompactString::default();
        s.push(c);
        return Some(s);
    }
    builtin(c, ctx.source, ctx.prev)
}

fn builtin(c: char, source: Script, prev: Option<char>) -> Option<CompactString> {
    let table = match classify(c)? {
        Script::Latin | Script::Vietnamese | Script::German => &LATIN,
        Script::Cyrillic => &CYRILLIC,
        Script::Greek => &GREEK,
        Script::Arabic => &ARABIC,
        Script::Hebrew => &HEBREW,
        Script::Thai => &THAI,
        Script::Chinese if source != Script::Japanese => &HANZI,
        Script::Japanese => return kana(c),
        Script::Korean => {
            let word_start = !prev.map_or(false, hangul::is_syllable);
            return hangul::romanize(c, word_start);
        }
        _ => return None,
    };
    table.get(&c).map(|s| CompactString::new(s))
}

fn kana(c: char) -> Option<CompactString> {
    // Katakana sits exactly 0x60 above the corresponding hiragana
    let hiragana = match c {
        '\u{30A1}'..='\u{30F6}' => char::from_u32(c as u32 - 0x60)?,
        _ => c,
    };
    KANA.get(&hiragana).map(|s| CompactString::new(s))
}

fn from_decomposition(c: char, ctx: &Context) -> Option<CompactString> {
    strip_marks(c, |base| {
        if base.is_ascii() {
            let mut s = CompactString::default();
            s.push(base);
            Some(s)
        } else {
            builtin(base, ctx.source, ctx.prev)
        }
    })
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(c as u32,
            0x00A1..=0x00BF
            | 0x2000..=0x206F
            | 0x3000..=0x303F
            | 0xFF01..=0xFF0F
            | 0xFF1A..=0xFF20
            | 0xFF3B..=0xFF40
            | 0xFF5B..=0xFF65
            | 0x060C | 0x061B | 0x061F | 0x066A..=0x066D
            | 0x05BE | 0x05C0 | 0x05C3 | 0x05F3 | 0x05F4
            | 0x0E4F | 0x0E5A | 0x0E5B)
}

fn fallback(c: char) -> CompactString {
    if c.is_alphabetic() {
        CompactString::new("?")
    } else if c.is_numeric() {
        CompactString::new("0")
    } else if c.is_whitespace() {
        CompactString::new(" ")
    } else if is_punctuation(c) {
        let approximation = PUNCTUATION.get(&c).copied().or_else(|| {
            deunicode::deunicode_char(c).filter(|s| !s.is_empty() && s.is_ascii())
        });
        CompactString::new(approximation.unwrap_or("."))
    } else {
        // Combining marks, symbols and control characters carry nothing
        // worth keeping
        CompactString::default()
    }
}

// Ideographic and Hangul syllables are each their own word once romanized
fn is_syllabic(c: char, source: Script) -> bool {
    hangul::is_syllable(c)
        || (source != Script::Japanese && classify(c) == Some(Script::Chinese))
}

/// Maps text one character at a time through the rule chain: dictionary,
/// built-in tables, decomposition, and finally a lossy fallback.
pub struct Transliterator<'a> {
    config: &'a TransliterationConfig,
    dictionary: Option<&'a dyn Dictionary>,
}

impl<'a> Transliterator<'a> {
    pub fn new(config: &'a TransliterationConfig) -> Transliterator<'a> {
        Transliterator {
            config,
            dictionary: None,
        }
    }

    pub fn with_dictionary(mut self, dictionary: &'a dyn Dictionary) -> Transliterator<'a> {
        self.dictionary = Some(dictionary);
        self
    }

    /// Map every character, never failing. Empty input maps to empty
    /// output with full confidence.
    pub fn map_text(
        &self,
        text: &str,
        source: Script,
        target: Target,
        locale: Option<&str>,
    ) -> TransliterationResult {
        let mut ctx = Context {
            dictionary: self.dictionary,
            source,
            target,
            locale,
            prev: None,
        };
        let mut output = String::with_capacity(text.len());
        let mut notes: Vec<String> = Vec::new();
        let mut total_weight = 0.0;
        let mut count = 0usize;

        for c in text.chars() {
            if let Some(prev) = ctx.prev {
                if is_syllabic(prev, source)
                    && is_syllabic(c, source)
                    && !output.ends_with(' ')
                {
                    output.push(' ');
                }
            }

            let (tier, mapped) = RULES
                .iter()
                .find_map(|(tier, rule)| rule(c, &ctx).map(|m| (*tier, m)))
                .unwrap_or_else(|| (Tier::Fallback, fallback(c)));

            if tier == Tier::Fallback && c.is_alphabetic() {
                log::trace!("No mapping for {:?} (U+{:04X})", c, c as u32);
                let note = format!(
                    "Unknown character approximated: '{}' (U+{:04X})",
                    c, c as u32
                );
                if !notes.contains(&note) {
                    notes.push(note);
                }
            }

            output.push_str(&mapped);
            total_weight += tier.weight(self.config);
            count += 1;
            ctx.prev = Some(c);
        }

        let confidence = if count == 0 {
            1.0
        } else {
            total_weight / count as f64
        };
        log::debug!(
            "Transliterated {} characters from {} to {} with confidence {:.2}",
            count,
            source,
            target,
            confidence
        );

        TransliterationResult {
            output,
            confidence,
            notes,
        }
    }

    /// Like `map_text`, but an empty output is `EmptyResult`, and an
    /// ASCII target is checked to hold only ASCII.
    ///
    /// # Examples
    ///
    /// ```
    /// use namecast::{Config, Script, Target, Transliterator};
    ///
    /// let config = Config::default();
    /// let transliterator = Transliterator::new(&config.transliteration);
    /// let result = transliterator
    ///     .transliterate("Привет", Script::Cyrillic, Target::Latin, None)
    ///     .unwrap();
    /// assert_eq!("Privet", result.output);
    /// assert!(result.confidence > 0.5);
    /// ```
    pub fn transliterate(
        &self,
        text: &str,
        source: Script,
        target: Target,
        locale: Option<&str>,
    ) -> Result<TransliterationResult> {
        let result = self.map_text(text, source, target, locale);
        if result.output.is_empty() {
            return Err(Error::EmptyResult);
        }
        if target == Target::Ascii && !result.output.is_ascii() {
            return Err(Error::InvalidEncoding(target));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TransliterationConfig {
        TransliterationConfig::default()
    }

    fn ascii(text: &str, source: Script) -> String {
        let config = config();
        Transliterator::new(&config)
            .map_text(text, source, Target::Ascii, None)
            .output
    }

    #[test]
    fn cyrillic() {
        let config = config();
        let result = Transliterator::new(&config).map_text(
            "Привет",
            Script::Cyrillic,
            Target::Latin,
            None,
        );
        assert_eq!("Privet", result.output);
        assert!((result.confidence - 0.85).abs() < 1e-9);
        assert!(result.notes.is_empty());

        assert_eq!("Shchukin", ascii("Щукин", Script::Cyrillic));
        assert_eq!("Yuliya", ascii("Юлия", Script::Cyrillic));
        assert_eq!("Mikhail", ascii("Михаил", Script::Cyrillic));
    }

    #[test]
    fn latin_diacritics() {
        assert_eq!("Jurgen Gross", ascii("Jürgen Groß", Script::German));
        assert_eq!("Nguyen Van Minh", ascii("Nguyễn Văn Minh", Script::Vietnamese));
        assert_eq!("Dang", ascii("Đặng", Script::Vietnamese));
        assert_eq!("Lukasz Sorensen", ascii("Łukasz Sørensen", Script::Latin));
        assert_eq!("Jose Nunez", ascii("José Núñez", Script::Latin));
    }

    #[test]
    fn decomposition_weight() {
        let config = config();
        let result =
            Transliterator::new(&config).map_text("é", Script::Latin, Target::Ascii, None);
        assert_eq!("e", result.output);
        assert_eq!(0.3, result.confidence);
    }

    #[test]
    fn greek_through_decomposition() {
        assert_eq!("Alexandros", ascii("Αλέξανδρος", Script::Greek));
    }

    #[test]
    fn chinese_syllables_are_spaced() {
        assert_eq!("Li Xiao Long", ascii("李小龍", Script::Chinese));
        assert_eq!("Wang Fang", ascii("王芳", Script::Chinese));
        assert_eq!("Li Ming", ascii("李 明", Script::Chinese));
    }

    #[test]
    fn korean() {
        assert_eq!("Kim Min Jun", ascii("김민준", Script::Korean));
        assert_eq!("Park Ji Hun", ascii("박지훈", Script::Korean));
    }

    #[test]
    fn kana() {
        assert_eq!("sakura", ascii("さくら", Script::Japanese));
        assert_eq!("sakura", ascii("サクラ", Script::Japanese));
        assert_eq!("yoshiko", ascii("よしこ", Script::Japanese));
    }

    #[test]
    fn kanji_without_reading() {
        let config = config();
        let result = Transliterator::new(&config).map_text(
            "田中 さくら",
            Script::Japanese,
            Target::Ascii,
            None,
        );
        assert_eq!("?? sakura", result.output);
        assert_eq!(2, result.notes.len());
        assert!(result.notes[0].starts_with("Unknown character approximated"));
    }

    #[test]
    fn arabic_and_hebrew() {
        assert_eq!("mhmd", ascii("محمد", Script::Arabic));
        assert_eq!("dvd", ascii("דוד", Script::Hebrew));
    }

    #[test]
    fn fallback() {
        assert_eq!("?", ascii("अ", Script::Unknown));
        assert_eq!("0", ascii("५", Script::Unknown));
        assert_eq!("\"Li\"", ascii("«Li»", Script::Latin));
        assert_eq!("a-b", ascii("a\u{2014}b", Script::Latin));
        assert_eq!("ab", ascii("a\u{263A}b", Script::Latin));
        assert_eq!("a b", ascii("a\u{3000}b", Script::Latin));
    }

    #[test]
    fn ascii_is_a_fixed_point() {
        for text in &["John Smith", "O'Brien-Jones, Jr.", "x", "  1 2 3  "] {
            assert_eq!(*text, ascii(text, Script::Latin));
        }
    }

    #[test]
    fn ascii_target_stays_ascii() {
        for text in &[
            "Ǆemal Þórsson",
            "Ñandú ©",
            "李小龍 김민준 ラーメン",
            "Ἀριστοτέλης",
            "ﬁne ½",
        ] {
            let output = ascii(text, Script::Latin);
            assert!(output.is_ascii(), "[{}] got non-ASCII {}", text, output);
        }
    }

    #[test]
    fn dictionary_first() {
        let config = config();
        let mut dictionary = MapDictionary::new();
        dictionary.insert('ü', "ue");
        let transliterator = Transliterator::new(&config).with_dictionary(&dictionary);
        let result = transliterator.map_text("Müller", Script::German, Target::Ascii, None);
        assert_eq!("Mueller", result.output);
        assert!(result.confidence > 0.85);
    }

    #[test]
    fn dictionary_locale_preference() {
        let mut dictionary = MapDictionary::new();
        dictionary.insert('х', "kh");
        dictionary.insert_for('х', None, Some("de"), "ch");
        dictionary.insert_for('х', Some(Target::Latin), Some("cs"), "ch");

        let lookup = |locale, target| dictionary.lookup('х', Script::Cyrillic, target, locale);
        assert_eq!(Some("kh".to_string()), lookup(None, Target::Ascii));
        assert_eq!(Some("ch".to_string()), lookup(Some("DE"), Target::Ascii));
        assert_eq!(Some("kh".to_string()), lookup(Some("cs"), Target::Ascii));
        assert_eq!(Some("ch".to_string()), lookup(Some("cs"), Target::Latin));
        assert_eq!(None, dictionary.lookup('ж', Script::Cyrillic, Target::Ascii, None));
        assert_eq!(3, dictionary.len());
    }

    #[test]
    fn non_ascii_dictionary_answer_ignored_for_ascii() {
        let config = config();
        let dictionary =
            |c: char, _: Script, _: Target, _: Option<&str>| -> Option<String> {
                if c == 'ж' {
                    Some("ž".to_string())
                } else {
                    None
                }
            };
        let transliterator = Transliterator::new(&config).with_dictionary(&dictionary);
        assert_eq!(
            "zh",
            transliterator
                .map_text("ж", Script::Cyrillic, Target::Ascii, None)
                .output
        );
        assert_eq!(
            "ž",
            transliterator
                .map_text("ж", Script::Cyrillic, Target::Latin, None)
                .output
        );
    }

    #[test]
    fn empty() {
        let config = config();
        let transliterator = Transliterator::new(&config);
        let result = transliterator.map_text("", Script::Unknown, Target::Ascii, None);
        assert_eq!("", result.output);
        assert_eq!(1.0, result.confidence);
        assert_eq!(
            Err(Error::EmptyResult),
            transliterator.transliterate("", Script::Unknown, Target::Ascii, None)
        );
        assert_eq!(
            Err(Error::EmptyResult),
            transliterator.transliterate("ъ", Script::Cyrillic, Target::Ascii, None)
        );
    }
}
