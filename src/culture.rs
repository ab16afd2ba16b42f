use crate::detect::vietnamese_marker_count;
use crate::script::Script;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::Serialize;

/// Naming tradition that decides how a name is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Culture {
    Western,
    Vietnamese,
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Indonesian,
    Malaysian,
    Indian,
    Thai,
}

impl Culture {
    pub fn as_str(self) -> &'static str {
        match self {
            Culture::Western => "western",
            Culture::Vietnamese => "vietnamese",
            Culture::Chinese => "chinese",
            Culture::Japanese => "japanese",
            Culture::Korean => "korean",
            Culture::Arabic => "arabic",
            Culture::Indonesian => "indonesian",
            Culture::Malaysian => "malaysian",
            Culture::Indian => "indian",
            Culture::Thai => "thai",
        }
    }

    /// Interpret a locale hint, which may be a culture name (`arabic`) or a
    /// BCP 47-style language tag (`zh-TW`, `ms_MY`).
    pub fn from_locale(locale: &str) -> Option<Culture> {
        let locale = locale.trim();
        if locale.is_empty() {
            return None;
        }
        if let Ok(culture) = locale.parse() {
            return Some(culture);
        }

        let language = locale
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or(locale)
            .to_ascii_lowercase();
        let culture = match language.as_str() {
            "vi" => Culture::Vietnamese,
            "zh" => Culture::Chinese,
            "ja" => Culture::Japanese,
            "ko" => Culture::Korean,
            "ar" | "fa" | "ur" => Culture::Arabic,
            "id" => Culture::Indonesian,
            "ms" => Culture::Malaysian,
            "hi" | "bn" | "ta" | "te" | "mr" | "gu" | "kn" | "ml" | "pa" => Culture::Indian,
            "th" => Culture::Thai,
            _ => Culture::Western,
        };
        Some(culture)
    }

    fn from_script(script: Script) -> Option<Culture> {
        let culture = match script {
            Script::Vietnamese => Culture::Vietnamese,
            Script::Chinese => Culture::Chinese,
            Script::Japanese => Culture::Japanese,
            Script::Korean => Culture::Korean,
            Script::Arabic => Culture::Arabic,
            Script::Thai => Culture::Thai,
            Script::Indonesian => Culture::Indonesian,
            Script::Cyrillic | Script::Greek | Script::Hebrew | Script::German => {
                Culture::Western
            }
            Script::Latin | Script::Unknown => return None,
        };
        Some(culture)
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Culture {
    type Err = ();

    fn from_str(s: &str) -> Result<Culture, ()> {
        [
            Culture::Western,
            Culture::Vietnamese,
            Culture::Chinese,
            Culture::Japanese,
            Culture::Korean,
            Culture::Arabic,
            Culture::Indonesian,
            Culture::Malaysian,
            Culture::Indian,
            Culture::Thai,
        ]
        .iter()
        .copied()
        .find(|c| s.eq_ignore_ascii_case(c.as_str()))
        .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "kebab-case"))]
pub enum NameOrder {
    FamilyFirst,
    GivenFirst,
}

/// Fixed facts about a naming tradition, derived once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CulturalContext {
    pub culture: Culture,
    pub name_order: NameOrder,
    pub has_gender_markers: bool,
    pub has_patronymics: bool,
    pub particle_prefix: bool,
}

impl CulturalContext {
    pub fn new(culture: Culture) -> CulturalContext {
        let family_first = matches!(
            culture,
            Culture::Vietnamese | Culture::Chinese | Culture::Japanese | Culture::Korean
        );
        CulturalContext {
            culture,
            name_order: if family_first {
                NameOrder::FamilyFirst
            } else {
                NameOrder::GivenFirst
            },
            has_gender_markers: matches!(
                culture,
                Culture::Vietnamese | Culture::Arabic | Culture::Indonesian | Culture::Malaysian
            ),
            has_patronymics: matches!(
                culture,
                Culture::Arabic | Culture::Indonesian | Culture::Malaysian
            ),
            particle_prefix: matches!(
                culture,
                Culture::Western | Culture::Indian | Culture::Thai
            ),
        }
    }

    /// Pick the naming tradition for a name: an explicit locale wins, then
    /// the script, then a diacritic heuristic over the original text.
    pub fn resolve(original: &str, locale: Option<&str>, script: Script) -> CulturalContext {
        let culture = locale
            .and_then(Culture::from_locale)
            .or_else(|| Culture::from_script(script))
            .unwrap_or_else(|| {
                if vietnamese_marker_count(original) >= 2 {
                    Culture::Vietnamese
                } else {
                    Culture::Western
                }
            });
        log::debug!("Resolved culture {} for script {}", culture, script);
        CulturalContext::new(culture)
    }
}
