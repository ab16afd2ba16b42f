use crate::case::lowercase_key;
use crate::gender::Gender;
use std::borrow::Cow;

static PARTICLES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/particles.rs"));

static PATRONYMIC_MARKERS: phf::Map<&'static str, Gender> =
    include!(concat!(env!("OUT_DIR"), "/patronymic_markers.rs"));

static MALAY_MARKERS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/malay_markers.rs"));

static JAPANESE_HONORIFICS: &[&str] = include!(concat!(env!("OUT_DIR"), "/japanese_honorifics.rs"));

/// Lowercase surname particles such as `van`, `de`, `al` or `bin`.
pub fn is_particle(word: &str) -> bool {
    PARTICLES.contains(&*lowercase_key(word))
}

/// The gender of the parent relation named by a patronymic marker:
/// `bin`/`ibn` (son of) or `bint`/`binti`/`binte` (daughter of).
pub fn patronymic_marker(word: &str) -> Option<Gender> {
    PATRONYMIC_MARKERS.get(&*lowercase_key(word)).copied()
}

pub fn is_patronymic_marker(word: &str) -> bool {
    patronymic_marker(word).is_some()
}

/// Like `patronymic_marker`, restricted to the Malay and Indonesian forms
/// `bin`, `binti` and `binte`.
pub fn malay_marker(word: &str) -> Option<Gender> {
    let key = lowercase_key(word);
    if MALAY_MARKERS.contains(&*key) {
        PATRONYMIC_MARKERS.get(&*key).copied()
    } else {
        None
    }
}

/// Remove Japanese honorific suffixes (`Tanaka-san`) from every word.
pub fn strip_honorifics(text: &str) -> Cow<'_, str> {
    let has_honorific = text.split_whitespace().any(|word| honorific_stem(word).is_some());
    if !has_honorific {
        return Cow::Borrowed(text);
    }

    let words: Vec<&str> = text
        .split_whitespace()
        .map(|word| honorific_stem(word).unwrap_or(word))
        .collect();
    Cow::Owned(words.join(" "))
}

fn honorific_stem(word: &str) -> Option<&str> {
    let (stem, suffix) = word.rsplit_once('-')?;
    if stem.is_empty() {
        return None;
    }
    let suffix = lowercase_key(suffix.trim_end_matches(|c| c == '.' || c == ','));
    if JAPANESE_HONORIFICS.contains(&&*suffix) {
        Some(stem)
    } else {
        None
    }
}
