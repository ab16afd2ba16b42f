//! Script detection, transliteration and culture-aware parsing of
//! personal names.
//!
//! A name written in any script is mapped to Latin or ASCII, split into
//! family, given and middle names following the conventions of its
//! culture, and given a best-effort gender inference and an overall
//! confidence score.
//!
//! # Examples
//!
//! ```
//! use namecast::{process, Gender, Target};
//!
//! let conversion = process("Doctor Nguyễn Văn Minh", None, Target::Ascii, Some("vi")).unwrap();
//! assert_eq!("Doctor Nguyen Van Minh", conversion.transliteration.output);
//! assert_eq!("NGUYEN", conversion.name.family);
//! assert_eq!("Minh", conversion.name.first);
//! assert_eq!(vec!["Van"], conversion.name.middle);
//! assert_eq!(vec!["DR"], conversion.name.titles);
//! assert_eq!(Gender::Male, conversion.gender.value);
//! ```

mod case;
mod config;
mod culture;
mod decomposition;
mod detect;
mod error;
mod gender;
mod hangul;
mod parse;
mod particle;
mod score;
mod script;
mod segment;
mod suffix;
mod tables;
mod title;
mod transliterate;

#[cfg(feature = "serialization")]
mod serialization;

#[cfg(feature = "ffi")]
pub mod external;

pub use crate::config::{
    Config, DetectionConfig, GenderConfig, ScoringConfig, TransliterationConfig,
};
pub use crate::culture::{CulturalContext, Culture, NameOrder};
pub use crate::detect::{detect_language, detect_script, detect_script_with, LanguageHint};
pub use crate::error::{Error, Result};
pub use crate::gender::{infer_gender, infer_gender_with, Gender, GenderInference, Source as GenderSource};
pub use crate::parse::{parse_name, NameStructure};
pub use crate::score::{score, score_with, Compatibility};
pub use crate::script::{Script, ScriptInfo, Target};
pub use crate::transliterate::{
    Dictionary, MapDictionary, Tier, TransliterationResult, Transliterator,
};

use std::fmt;

#[cfg(feature = "serialization")]
use serde::Serialize;

/// Everything known about one name after conversion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct Conversion {
    /// The script the text was treated as. A caller-supplied script is
    /// reported with full confidence.
    pub script: ScriptInfo,
    pub language: LanguageHint,
    pub culture: Culture,
    pub transliteration: TransliterationResult,
    pub name: NameStructure,
    pub gender: GenderInference,
    /// Overall confidence in the conversion.
    pub confidence: f64,
}

/// A configured conversion pipeline, optionally backed by a
/// transliteration dictionary.
///
/// Converters hold no per-request state and can be shared between
/// threads.
pub struct Converter {
    config: Config,
    dictionary: Option<Box<dyn Dictionary>>,
}

impl Default for Converter {
    fn default() -> Converter {
        Converter::with_config(Config::default())
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Converter")
            .field("config", &self.config)
            .field("dictionary", &self.dictionary.is_some())
            .finish()
    }
}

impl Converter {
    pub fn new() -> Converter {
        Converter::default()
    }

    pub fn with_config(config: Config) -> Converter {
        Converter {
            config,
            dictionary: None,
        }
    }

    /// Consult `dictionary` before the built-in transliteration tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use namecast::{Converter, MapDictionary, Target};
    ///
    /// let mut dictionary = MapDictionary::new();
    /// dictionary.insert('ü', "ue");
    /// let converter = Converter::new().with_dictionary(dictionary);
    ///
    /// let conversion = converter.process("Thomas Müller", None, Target::Ascii, None).unwrap();
    /// assert_eq!("MUELLER", conversion.name.family);
    /// ```
    pub fn with_dictionary<D: Dictionary + 'static>(mut self, dictionary: D) -> Converter {
        self.dictionary = Some(Box::new(dictionary));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn detect_script(&self, text: &str) -> ScriptInfo {
        detect_script_with(text, &self.config.detection)
    }

    fn transliterator(&self) -> Transliterator {
        let transliterator = Transliterator::new(&self.config.transliteration);
        match self.dictionary {
            Some(ref dictionary) => transliterator.with_dictionary(&**dictionary),
            None => transliterator,
        }
    }

    pub fn transliterate(
        &self,
        text: &str,
        source: Script,
        target: Target,
        locale: Option<&str>,
    ) -> Result<TransliterationResult> {
        self.transliterator()
            .transliterate(text, source, target, locale)
    }

    /// Run the whole pipeline over one name.
    ///
    /// `source_hint` overrides script detection. `locale` may be a language
    /// tag (`zh-TW`) or a culture name (`indonesian`), and overrides the
    /// culture implied by the script.
    ///
    /// Fails with `InvalidInput` for empty or whitespace-only text, and
    /// `EmptyResult` if nothing survives transliteration.
    pub fn process(
        &self,
        text: &str,
        source_hint: Option<Script>,
        target: Target,
        locale: Option<&str>,
    ) -> Result<Conversion> {
        if text.trim().is_empty() {
            return Err(Error::InvalidInput);
        }

        let detected = self.detect_script(text);
        let script = match source_hint {
            Some(script) => ScriptInfo {
                script,
                confidence: 1.0,
            },
            None => detected,
        };
        log::debug!(
            "Processing as {} (detected {} at {:.2})",
            script.script,
            detected.script,
            detected.confidence
        );

        let transliteration = self.transliterate(text, script.script, target, locale)?;
        let output = transliteration.output.as_str();

        let context = CulturalContext::resolve(text, locale, script.script);
        let name = parse_name(text, output, &context);
        let gender = infer_gender_with(text, output, &context, &self.config.gender);
        let confidence = score_with(text, output, script.script, target, &self.config.scoring);

        Ok(Conversion {
            script,
            language: detect_language(text, &detected),
            culture: context.culture,
            transliteration,
            name,
            gender,
            confidence,
        })
    }
}

/// Run the whole pipeline with the default configuration and no
/// dictionary. See [`Converter::process`].
///
/// # Examples
///
/// ```
/// use namecast::{process, Error, Script, Target};
///
/// let conversion = process("李小龍", None, Target::Ascii, Some("zh")).unwrap();
/// assert_eq!(Script::Chinese, conversion.script.script);
/// assert_eq!("LI", conversion.name.family);
/// assert_eq!("Long", conversion.name.first);
///
/// assert_eq!(Err(Error::InvalidInput), process("  ", None, Target::Ascii, None));
/// ```
pub fn process(
    text: &str,
    source_hint: Option<Script>,
    target: Target,
    locale: Option<&str>,
) -> Result<Conversion> {
    Converter::new().process(text, source_hint, target, locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_to_latin() {
        let conversion = process("Привет", Some(Script::Cyrillic), Target::Latin, None).unwrap();
        assert_eq!("Privet", conversion.transliteration.output);
        assert!(conversion.transliteration.confidence > 0.5);
        assert_eq!(1.0, conversion.script.confidence);
        assert_eq!("Privet", conversion.name.first);
    }

    #[test]
    fn chinese_name() {
        let conversion = process("李小龍", None, Target::Ascii, Some("zh")).unwrap();
        assert_eq!(Script::Chinese, conversion.script.script);
        assert_eq!(0.95, conversion.script.confidence);
        assert_eq!("Li Xiao Long", conversion.transliteration.output);
        assert_eq!("LI", conversion.name.family);
        assert_eq!("Long", conversion.name.first);
        assert_eq!(vec!["Xiao"], conversion.name.middle);
        assert_eq!(Gender::Unknown, conversion.gender.value);
        assert_eq!(GenderSource::Unknown, conversion.gender.source);
    }

    #[test]
    fn malay_patronymic() {
        let conversion =
            process("Ahmad bin Abdullah", None, Target::Ascii, Some("indonesian")).unwrap();
        assert_eq!(Culture::Indonesian, conversion.culture);
        assert_eq!("Ahmad", conversion.name.first);
        assert_eq!(vec!["bin", "Abdullah"], conversion.name.middle);
        assert_eq!("", conversion.name.family);
        assert_eq!(Gender::Male, conversion.gender.value);
        assert!(conversion.gender.confidence >= 0.75);
        assert_eq!(GenderSource::CulturalMarker, conversion.gender.source);
    }

    #[test]
    fn german_to_ascii() {
        let conversion = process("Jürgen Groß", None, Target::Ascii, None).unwrap();
        assert_eq!(Script::German, conversion.script.script);
        assert_eq!("Jurgen Gross", conversion.transliteration.output);
        assert!(!conversion.transliteration.output.contains('?'));
        assert_eq!("GROSS", conversion.name.family);
        assert_eq!("Jurgen", conversion.name.first);
    }

    #[test]
    fn invalid_input() {
        assert_eq!(Err(Error::InvalidInput), process("", None, Target::Ascii, None));
        assert_eq!(Err(Error::InvalidInput), process(" \t\n", None, Target::Latin, None));
        assert_eq!(
            Err(Error::EmptyResult),
            process("ъ", None, Target::Ascii, None)
        );
    }

    #[test]
    fn japanese_honorific() {
        let conversion = process("Tanaka-san Yoko", None, Target::Ascii, Some("ja")).unwrap();
        assert_eq!("TANAKA", conversion.name.family);
        assert_eq!("Yoko", conversion.name.first);
        assert_eq!(Gender::Female, conversion.gender.value);
    }

    #[test]
    fn custom_config() {
        let mut config = Config::default();
        config.transliteration.builtin_weight = 0.5;
        let converter = Converter::with_config(config);
        let conversion = converter
            .process("Иван", None, Target::Ascii, None)
            .unwrap();
        assert!((conversion.transliteration.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn shared_between_threads() {
        let converter = Converter::new().with_dictionary(MapDictionary::new());
        let names = ["Привет", "李小龍", "Jürgen Groß", "김민준", "محمد"];
        crossbeam_utils::thread::scope(|s| {
            for name in names.iter() {
                let converter = &converter;
                s.spawn(move |_| {
                    let conversion = converter.process(name, None, Target::Ascii, None).unwrap();
                    assert!(conversion.transliteration.output.is_ascii());
                });
            }
        })
        .unwrap();
    }
}
