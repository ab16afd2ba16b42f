use crate::case::lowercase_key;
use crate::segment::trim_word;

static SUFFIXES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/suffixes.rs"));

/// Canonical form of a generational suffix: `Jr`, `Sr`, or a roman numeral
/// from `II` to `V`.
pub fn canonical_suffix(word: &str) -> Option<&'static str> {
    SUFFIXES.get(&*lowercase_key(trim_word(word))).copied()
}
