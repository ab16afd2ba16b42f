use crate::script::Target;

/// Failures surfaced by the conversion pipeline.
///
/// Detection, parsing, gender inference and scoring never fail; only input
/// validation and transliteration do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("input text is empty")]
    InvalidInput,
    #[error("unsupported script: {0}")]
    UnsupportedScript(String),
    #[error("transliteration produced no output")]
    EmptyResult,
    #[error("transliteration produced characters outside the {0} target")]
    InvalidEncoding(Target),
}

impl Error {
    /// True when the caller supplied bad arguments, as opposed to the
    /// pipeline being unable to produce a result.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidInput | Error::UnsupportedScript(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors() {
        assert!(Error::InvalidInput.is_client_error());
        assert!(Error::UnsupportedScript("klingon".to_string()).is_client_error());
        assert!(!Error::EmptyResult.is_client_error());
        assert!(!Error::InvalidEncoding(Target::Ascii).is_client_error());
    }

    #[test]
    fn messages() {
        assert_eq!(
            "unsupported script: klingon",
            Error::UnsupportedScript("klingon".to_string()).to_string()
        );
        assert_eq!(
            "transliteration produced characters outside the ascii target",
            Error::InvalidEncoding(Target::Ascii).to_string()
        );
    }
}
