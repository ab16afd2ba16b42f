use unicode_segmentation::UnicodeSegmentation;

const MAX_LEN: usize = u8::MAX as usize;

// Characters that separate words in addition to whitespace
const SEPARATORS: &[char] = &[',', ';', ':', '(', ')', '[', ']', '{', '}', '/', '"', '|'];

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

#[inline]
fn is_wordlike(word: &str) -> bool {
    word.chars().any(|c| c.is_alphanumeric() || c == '?')
}

/// Splits a name into words. Hyphens, apostrophes and periods stay inside
/// words; words with no letters, digits or placeholders are skipped.
pub struct Segments<'a> {
    text: &'a str,
    current_word: &'a str,
}

impl<'a> Segments<'a> {
    pub fn from_text(text: &'a str) -> Segments<'a> {
        Segments {
            text,
            current_word: "",
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        // If we're in the middle of a word that needs sub-segmentation by
        // unicode rules, handle that
        if !self.current_word.is_empty() {
            if let Some((start, subword)) = self
                .current_word
                .split_word_bound_indices()
                .find(|(_, subword)| is_wordlike(subword))
            {
                self.current_word = &self.current_word[start + subword.len()..];
                return Some(subword);
            } else {
                self.current_word = "";
            }
        }

        self.text = self.text.trim_start_matches(is_separator);
        if self.text.is_empty() {
            return None;
        }

        let boundary = self.text.find(is_separator).unwrap_or(self.text.len());
        let word = &self.text[..boundary];
        self.text = &self.text[boundary..];

        if word.len() > MAX_LEN || !is_wordlike(word) {
            self.next()
        } else if !word.is_ascii() && !word.chars().any(|c| c.is_ascii_alphanumeric() || c == '?')
        {
            // Completely non-ASCII words, like unspaced Hangul or Arabic,
            // defer to the unicode_segmentation library
            self.current_word = word;
            self.next()
        } else {
            Some(word)
        }
    }
}

/// Strip the `.` and `,` that abbreviations and lists leave on a word.
#[inline]
pub fn trim_word(word: &str) -> &str {
    word.trim_matches(|c| c == '.' || c == ',')
}
