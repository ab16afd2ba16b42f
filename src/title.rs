use crate::case::lowercase_key;
use crate::gender::Gender;
use crate::segment::trim_word;

static TITLES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/titles.rs"));

static TITLE_GENDERS: phf::Map<&'static str, Gender> =
    include!(concat!(env!("OUT_DIR"), "/title_genders.rs"));

/// Canonical uppercase form of a title or honorific prefix, matched as a
/// whole word ignoring case and trailing periods.
pub fn canonical_title(word: &str) -> Option<&'static str> {
    let trimmed = trim_word(word);
    if trimmed.is_empty() {
        return None;
    }
    TITLES.get(&*lowercase_key(trimmed)).copied()
}

/// Gender implied by a canonical title, if any. `MX` is explicitly
/// non-binary; professional titles imply nothing.
pub fn title_gender(canonical: &str) -> Option<Gender> {
    TITLE_GENDERS.get(canonical).copied()
}
