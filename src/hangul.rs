//! Revised Romanization of precomposed Hangul syllables.

use compact_str::CompactString;
use phf::phf_map;

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;

const INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t",
    "p", "h",
];

const MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo", "we",
    "wi", "yu", "eu", "ui", "i",
];

const FINALS: [&str; 28] = [
    "", "k", "k", "k", "n", "n", "n", "t", "l", "k", "m", "l", "l", "l", "p", "l", "m", "p", "p",
    "t", "t", "ng", "t", "t", "k", "t", "p", "t",
];

// Conventional spellings of common family names, which differ from
// their strict romanization
static FAMILY_NAMES: phf::Map<char, &'static str> = phf_map! {
    '김' => "Kim", '이' => "Lee", '박' => "Park", '최' => "Choi",
    '정' => "Jung", '강' => "Kang", '조' => "Cho", '윤' => "Yoon",
    '장' => "Jang", '임' => "Lim", '한' => "Han", '오' => "Oh",
    '서' => "Seo", '신' => "Shin", '권' => "Kwon", '황' => "Hwang",
    '안' => "Ahn", '송' => "Song", '류' => "Ryu", '홍' => "Hong",
};

#[inline]
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Romanize one precomposed syllable, capitalized. Syllables at the start
/// of a word use the conventional family-name spelling when there is one.
pub fn romanize(c: char, word_start: bool) -> Option<CompactString> {
    if !is_syllable(c) {
        return None;
    }

    if word_start {
        if let Some(name) = FAMILY_NAMES.get(&c) {
            return Some(CompactString::new(name));
        }
    }

    let index = c as u32 - SYLLABLE_BASE;
    let initial = (index / (MEDIAL_COUNT * FINAL_COUNT)) as usize;
    let medial = ((index % (MEDIAL_COUNT * FINAL_COUNT)) / FINAL_COUNT) as usize;
    let fin = (index % FINAL_COUNT) as usize;

    let mut result = CompactString::default();
    for part in [INITIALS[initial], MEDIALS[medial], FINALS[fin]] {
        for c in part.chars() {
            if result.is_empty() {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
        }
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rr(c: char, word_start: bool) -> String {
        romanize(c, word_start).map(|s| s.to_string()).unwrap_or_default()
    }

    #[test]
    fn algorithmic() {
        assert_eq!("Min", rr('민', false));
        assert_eq!("Jun", rr('준', false));
        assert_eq!("Ga", rr('가', false));
        assert_eq!("Hang", rr('항', false));
        assert_eq!("Eun", rr('은', false));
        assert_eq!("Seo", rr('서', false));
    }

    #[test]
    fn family_names_at_word_start() {
        assert_eq!("Kim", rr('김', true));
        assert_eq!("Gim", rr('김', false));
        assert_eq!("Lee", rr('이', true));
        assert_eq!("I", rr('이', false));
        assert_eq!("Park", rr('박', true));
        assert_eq!("Min", rr('민', true));
    }

    #[test]
    fn non_syllables() {
        assert_eq!(None, romanize('a', true));
        assert_eq!(None, romanize('ㄱ', true));
    }
}
