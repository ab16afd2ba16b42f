use crate::config::GenderConfig;
use crate::culture::{CulturalContext, Culture, NameOrder};
use crate::particle::{is_particle, malay_marker, patronymic_marker, strip_honorifics};
use crate::segment::{trim_word, Segments};
use crate::suffix::canonical_suffix;
use crate::title::{canonical_title, title_gender};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serialization")]
use serde::Serialize;

static NAME_FRAGMENTS: phf::Map<&'static str, (&'static [&'static str], &'static [&'static str])> =
    include!(concat!(env!("OUT_DIR"), "/name_fragments.rs"));

static JAPANESE_MALE_ENDINGS: &[&str] =
    include!(concat!(env!("OUT_DIR"), "/japanese_male_endings.rs"));
static JAPANESE_FEMALE_ENDINGS: &[&str] =
    include!(concat!(env!("OUT_DIR"), "/japanese_female_endings.rs"));
static MALE_TERMINAL_PATTERNS: &[&str] =
    include!(concat!(env!("OUT_DIR"), "/male_terminal_patterns.rs"));
static FEMALE_TERMINAL_PATTERNS: &[&str] =
    include!(concat!(env!("OUT_DIR"), "/female_terminal_patterns.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub enum Gender {
    #[cfg_attr(feature = "serialization", serde(rename = "M"))]
    Male,
    #[cfg_attr(feature = "serialization", serde(rename = "F"))]
    Female,
    #[cfg_attr(feature = "serialization", serde(rename = "X"))]
    Unknown,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
            Gender::Unknown => "X",
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "non-binary or unspecified",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an inference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "snake_case"))]
pub enum Source {
    /// A structural part of the name: a title, a Vietnamese middle name,
    /// or a patronymic marker.
    CulturalMarker,
    /// A list of common given names or name endings.
    Statistical,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct GenderInference {
    pub value: Gender,
    pub confidence: f64,
    pub source: Source,
    pub reason: String,
}

impl GenderInference {
    fn new(value: Gender, confidence: f64, source: Source, reason: String) -> GenderInference {
        GenderInference {
            value,
            confidence,
            source,
            reason,
        }
    }
}

/// The words of a name, lowercased, with titles noted separately.
struct Words<'a> {
    context: &'a CulturalContext,
    titles: SmallVec<[&'static str; 2]>,
    names: SmallVec<[String; 6]>,
    originals: SmallVec<[String; 6]>,
}

impl<'a> Words<'a> {
    fn new(original: &str, transliterated: &str, context: &'a CulturalContext) -> Words<'a> {
        let text = if context.culture == Culture::Japanese {
            strip_honorifics(transliterated)
        } else {
            Cow::Borrowed(transliterated)
        };

        let mut titles = SmallVec::new();
        let mut names: SmallVec<[String; 6]> = SmallVec::new();
        for word in Segments::from_text(&text) {
            match canonical_title(word) {
                Some(title) => titles.push(title),
                None => names.push(trim_word(word).to_lowercase()),
            }
        }
        while names.len() > 1 && names.last().map_or(false, |w| canonical_suffix(w).is_some()) {
            names.pop();
        }

        let originals = Segments::from_text(original)
            .map(|word| trim_word(word).to_lowercase())
            .collect();

        Words {
            context,
            titles,
            names,
            originals,
        }
    }

    /// The patronymic marker recognized for this culture, if `word` is one.
    fn marker(&self, word: &str) -> Option<Gender> {
        match self.context.culture {
            Culture::Indonesian | Culture::Malaysian => malay_marker(word),
            _ => patronymic_marker(word),
        }
    }

    /// Words that can hold a given name. The family name is excluded, and
    /// in patronymic cultures so is everything from the marker on.
    fn given_names(&self) -> &[String] {
        let names = &self.names[..];
        if self.context.has_patronymics {
            if let Some(i) = names.iter().position(|w| self.marker(w).is_some()) {
                return &names[..i];
            }
        }
        if names.len() < 2 {
            return names;
        }
        match self.context.name_order {
            NameOrder::FamilyFirst => &names[1..],
            NameOrder::GivenFirst => {
                let mut end = names.len() - 1;
                if self.context.particle_prefix {
                    while end > 1 && is_particle(&names[end - 1]) {
                        end -= 1;
                    }
                }
                &names[..end]
            }
        }
    }
}

type Rule = fn(&Words, &GenderConfig) -> Option<GenderInference>;

const RULES: [Rule; 3] = [cultural_markers, name_fragments, terminal_patterns];

/// Best-effort gender inference for a name, trying structural markers,
/// then common given names, then generic name endings.
///
/// # Examples
///
/// ```
/// use namecast::{infer_gender, CulturalContext, Culture, Gender, GenderSource};
///
/// let context = CulturalContext::new(Culture::Indonesian);
/// let inference = infer_gender("Ahmad bin Abdullah", "Ahmad bin Abdullah", &context);
/// assert_eq!(Gender::Male, inference.value);
/// assert_eq!(GenderSource::CulturalMarker, inference.source);
/// ```
pub fn infer_gender(original: &str, transliterated: &str, context: &CulturalContext) -> GenderInference {
    infer_gender_with(original, transliterated, context, &GenderConfig::default())
}

pub fn infer_gender_with(
    original: &str,
    transliterated: &str,
    context: &CulturalContext,
    config: &GenderConfig,
) -> GenderInference {
    let words = Words::new(original, transliterated, context);
    let mut inference = RULES
        .iter()
        .find_map(|rule| rule(&words, config))
        .unwrap_or_else(|| {
            GenderInference::new(
                Gender::Unknown,
                config.unknown,
                Source::Unknown,
                "No gender indicators found".to_string(),
            )
        });
    inference.confidence = inference.confidence.max(config.unknown).min(config.ceiling);
    log::debug!(
        "Inferred gender {} ({:.2}): {}",
        inference.value,
        inference.confidence,
        inference.reason
    );
    inference
}

fn cultural_markers(words: &Words, config: &GenderConfig) -> Option<GenderInference> {
    for title in &words.titles {
        if let Some(gender) = title_gender(title) {
            return Some(GenderInference::new(
                gender,
                config.title,
                Source::CulturalMarker,
                format!("Title '{}' indicates {}", title, gender.describe()),
            ));
        }
    }

    match words.context.culture {
        Culture::Vietnamese => vietnamese_marker(&words.names, config)
            .or_else(|| vietnamese_marker(&words.originals, config)),
        Culture::Arabic => patronymic(words, config.arabic_marker),
        Culture::Indonesian | Culture::Malaysian => patronymic(words, config.malay_marker),
        _ => None,
    }
}

fn vietnamese_marker(names: &[String], config: &GenderConfig) -> Option<GenderInference> {
    if names.len() < 3 {
        return None;
    }
    names[1..names.len() - 1].iter().find_map(|word| {
        let gender = match word.as_str() {
            "van" | "văn" => Gender::Male,
            "thi" | "thị" => Gender::Female,
            _ => return None,
        };
        Some(GenderInference::new(
            gender,
            config.vietnamese_marker,
            Source::CulturalMarker,
            format!(
                "Vietnamese middle name '{}' indicates {}",
                word,
                gender.describe()
            ),
        ))
    })
}

fn patronymic(words: &Words, confidence: f64) -> Option<GenderInference> {
    words
        .names
        .iter()
        .chain(words.originals.iter())
        .find_map(|word| {
            words.marker(word).map(|gender| {
                GenderInference::new(
                    gender,
                    confidence,
                    Source::CulturalMarker,
                    format!("Patronymic marker '{}' indicates {}", word, gender.describe()),
                )
            })
        })
}

fn fragment_list(culture: Culture, config: &GenderConfig) -> Option<(&'static str, f64)> {
    let list = match culture {
        Culture::Vietnamese => ("vietnamese", config.vietnamese_fragment),
        Culture::Arabic => ("arabic", config.arabic_fragment),
        Culture::Indonesian | Culture::Malaysian => ("indonesian", config.indonesian_fragment),
        Culture::Chinese => ("chinese", config.chinese_fragment),
        Culture::Indian => ("indian", config.indian_fragment),
        Culture::Western => ("western", config.western_fragment),
        Culture::Japanese | Culture::Korean | Culture::Thai => return None,
    };
    Some(list)
}

fn name_fragments(words: &Words, config: &GenderConfig) -> Option<GenderInference> {
    let given = words.given_names();
    let culture = words.context.culture;

    if culture == Culture::Japanese {
        return japanese_endings(given, config);
    }

    let (key, confidence) = fragment_list(culture, config)?;
    let (male, female) = NAME_FRAGMENTS.get(key)?;

    let matches = |exact: bool| {
        given.iter().find_map(|word| {
            let hit = |fragment: &&str| {
                if exact {
                    word == fragment
                } else {
                    word.contains(*fragment)
                }
            };
            if let Some(fragment) = male.iter().copied().find(hit) {
                Some((Gender::Male, fragment))
            } else {
                female
                    .iter()
                    .copied()
                    .find(hit)
                    .map(|fragment| (Gender::Female, fragment))
            }
        })
    };

    let (gender, fragment) = matches(true).or_else(|| matches(false))?;
    Some(GenderInference::new(
        gender,
        confidence,
        Source::Statistical,
        format!(
            "Given name matches common {} {} name '{}'",
            culture,
            gender.describe(),
            fragment
        ),
    ))
}

fn japanese_endings(given: &[String], config: &GenderConfig) -> Option<GenderInference> {
    let word = given.first()?;
    let (gender, ending, confidence) = if let Some(ending) =
        JAPANESE_FEMALE_ENDINGS.iter().find(|e| word.ends_with(*e))
    {
        (Gender::Female, ending, config.japanese_female_ending)
    } else {
        let ending = JAPANESE_MALE_ENDINGS.iter().find(|e| word.ends_with(*e))?;
        (Gender::Male, ending, config.japanese_male_ending)
    };
    Some(GenderInference::new(
        gender,
        confidence,
        Source::Statistical,
        format!(
            "Japanese given name ending '-{}' is typically {}",
            ending,
            gender.describe()
        ),
    ))
}

fn terminal_patterns(words: &Words, config: &GenderConfig) -> Option<GenderInference> {
    if !matches!(
        words.context.culture,
        Culture::Western | Culture::Indian | Culture::Thai
    ) {
        return None;
    }

    let word = words.given_names().first()?;
    if word.chars().count() <= 2 {
        return None;
    }

    let (gender, ending, confidence) = if let Some(ending) =
        FEMALE_TERMINAL_PATTERNS.iter().find(|e| word.ends_with(*e))
    {
        (Gender::Female, ending, config.female_terminal)
    } else {
        let ending = MALE_TERMINAL_PATTERNS.iter().find(|e| word.ends_with(*e))?;
        (Gender::Male, ending, config.male_terminal)
    };
    Some(GenderInference::new(
        gender,
        confidence,
        Source::Statistical,
        format!(
            "Given name ending '-{}' is typically {}",
            ending,
            gender.describe()
        ),
    ))
}
