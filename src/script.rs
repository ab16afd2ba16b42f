use crate::error::Error;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Writing system (or Latin-script language variant) of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Script {
    Latin,
    Cyrillic,
    Chinese,
    Japanese,
    Korean,
    Arabic,
    Greek,
    Hebrew,
    Thai,
    Vietnamese,
    German,
    Indonesian,
    Unknown,
}

pub(crate) const SCRIPT_COUNT: usize = 13;

impl Script {
    pub const ALL: [Script; SCRIPT_COUNT] = [
        Script::Latin,
        Script::Cyrillic,
        Script::Chinese,
        Script::Japanese,
        Script::Korean,
        Script::Arabic,
        Script::Greek,
        Script::Hebrew,
        Script::Thai,
        Script::Vietnamese,
        Script::German,
        Script::Indonesian,
        Script::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Cyrillic => "cyrillic",
            Script::Chinese => "chinese",
            Script::Japanese => "japanese",
            Script::Korean => "korean",
            Script::Arabic => "arabic",
            Script::Greek => "greek",
            Script::Hebrew => "hebrew",
            Script::Thai => "thai",
            Script::Vietnamese => "vietnamese",
            Script::German => "german",
            Script::Indonesian => "indonesian",
            Script::Unknown => "unknown",
        }
    }

    /// Scripts written with the Latin alphabet, including the language
    /// variants distinguished by their diacritics.
    pub fn is_latin_family(self) -> bool {
        matches!(
            self,
            Script::Latin | Script::Vietnamese | Script::German | Script::Indonesian
        )
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = Error;

    /// Parses a script label case-insensitively. `ascii` names the plain
    /// Latin alphabet when used as a source.
    fn from_str(s: &str) -> Result<Script, Error> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("ascii") {
            return Ok(Script::Latin);
        }
        Script::ALL
            .iter()
            .copied()
            .find(|script| trimmed.eq_ignore_ascii_case(script.as_str()))
            .ok_or_else(|| Error::UnsupportedScript(s.to_string()))
    }
}

/// Output alphabet of a transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Target {
    /// Latin letters; a dictionary may contribute accented forms.
    Latin,
    /// Strictly 7-bit ASCII.
    Ascii,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Latin => "latin",
            Target::Ascii => "ascii",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Target, Error> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("latin") {
            Ok(Target::Latin)
        } else if trimmed.eq_ignore_ascii_case("ascii") {
            Ok(Target::Ascii)
        } else {
            Err(Error::UnsupportedScript(s.to_string()))
        }
    }
}

/// A detected script and how sure the detector is about it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct ScriptInfo {
    pub script: Script,
    pub confidence: f64,
}

impl ScriptInfo {
    pub const UNKNOWN: ScriptInfo = ScriptInfo {
        script: Script::Unknown,
        confidence: 0.0,
    };
}
