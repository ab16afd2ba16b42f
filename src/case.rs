use crate::decomposition::is_combining;
use std::borrow::Cow;

#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn lowercase(c: char) -> CaseMapping {
        let [x, y] = unicode_case_mapping::to_lowercase(c);
        Self::from_u32s(x, y, 0)
    }

    #[inline]
    fn uppercase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_uppercase(c);
        Self::from_u32s(x, y, z)
    }

    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::from_u32s(x, y, z)
    }

    // Zero marks "no mapping" in unicode_case_mapping's output
    #[inline]
    fn from_u32s(x: u32, y: u32, z: u32) -> CaseMapping {
        match (char::from_u32(x), char::from_u32(y), char::from_u32(z)) {
            (Some(x), _, _) if x == '\0' => CaseMapping::Empty,
            (Some(x), Some(y), Some(z)) if y != '\0' && z != '\0' => CaseMapping::Triple(x, y, z),
            (Some(x), Some(y), _) if y != '\0' => CaseMapping::Double(x, y),
            (Some(x), _, _) => CaseMapping::Single(x),
            (None, _, _) => CaseMapping::Empty,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                *self = CaseMapping::Double(y, z);
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                *self = CaseMapping::Single(y);
                Some(x)
            }
            CaseMapping::Single(x) => {
                *self = CaseMapping::Empty;
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }
}

fn push_mapped(result: &mut String, mapped: CaseMapping, c: char) {
    if matches!(mapped, CaseMapping::Empty) {
        result.push(c);
    } else {
        result.extend(mapped);
    }
}

/// Uppercase every letter, as used for family names.
pub fn uppercase_word(word: &str) -> String {
    if word.is_ascii() {
        return word.to_ascii_uppercase();
    }

    let mut result = String::with_capacity(word.len());
    for c in word.chars() {
        push_mapped(&mut result, CaseMapping::uppercase(c), c);
    }
    result
}

/// Capitalize the first letter of each hyphen- or apostrophe-separated
/// part and lowercase the rest.
pub fn capitalize_word(word: &str) -> String {
    const NONASCII_HYPHENS: &str = "\u{2010}‑‒–—―−－﹘﹣";

    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic()) {
        let bytes = word.as_bytes();
        let mut result = String::with_capacity(word.len());
        result.push(bytes[0].to_ascii_uppercase() as char);
        result.extend(bytes[1..].iter().map(|c| c.to_ascii_lowercase() as char));
        return result;
    }

    let mut capitalize_next = true;
    let mut result = String::with_capacity(word.len());

    for c in word.chars() {
        let mapped = if capitalize_next {
            CaseMapping::titlecase(c)
        } else {
            CaseMapping::lowercase(c)
        };

        if !matches!(mapped, CaseMapping::Empty) {
            result.extend(mapped);
            capitalize_next = false;
        } else if c.is_alphanumeric() {
            // Uncased letters and digits still end the capitalized prefix
            result.push(c);
            capitalize_next = false;
        } else {
            capitalize_next = !is_combining(c);
            if capitalize_next && NONASCII_HYPHENS.contains(c) {
                result.push('-');
            } else {
                result.push(c);
            }
        }
    }

    result
}

/// Lowercase form of a word for vocabulary lookups, borrowing when the
/// word is already lowercase.
pub fn lowercase_key(word: &str) -> Cow<'_, str> {
    if word.chars().any(|c| c.is_uppercase()) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

/// True if the word's letters are all uppercase (vacuously true if it has
/// none).
pub fn is_uppercase_word(word: &str) -> bool {
    !word.chars().any(|c| c.is_lowercase())
}
