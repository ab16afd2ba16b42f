use crate::case::{capitalize_word, is_uppercase_word, uppercase_word};
use crate::culture::{CulturalContext, Culture, NameOrder};
use crate::particle::{is_particle, is_patronymic_marker, malay_marker, strip_honorifics};
use crate::segment::{trim_word, Segments};
use crate::suffix::canonical_suffix;
use crate::title::canonical_title;
use smallvec::SmallVec;
use std::borrow::Cow;

#[cfg(feature = "serialization")]
use serde::Serialize;

/// A name split into its structural parts.
///
/// `family` is uppercase. `first` and `middle` are title-cased, except
/// that in Arabic, Malay and Indonesian names patronymic markers like
/// `bin` are kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct NameStructure {
    pub family: String,
    pub first: String,
    pub middle: Vec<String>,
    pub titles: Vec<String>,
    pub suffixes: Vec<String>,
    pub particles: Vec<String>,
    pub full_ascii: String,
    pub order: NameOrder,
}

impl NameStructure {
    fn empty(order: NameOrder) -> NameStructure {
        NameStructure {
            family: String::new(),
            first: String::new(),
            middle: Vec::new(),
            titles: Vec::new(),
            suffixes: Vec::new(),
            particles: Vec::new(),
            full_ascii: String::new(),
            order,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.family.is_empty()
            && self.first.is_empty()
            && self.middle.is_empty()
            && self.titles.is_empty()
            && self.suffixes.is_empty()
    }

    /// Number of parts filled in, counting a multi-word family name once.
    pub fn part_count(&self) -> usize {
        usize::from(!self.family.is_empty())
            + usize::from(!self.first.is_empty())
            + self.middle.len()
            + self.titles.len()
            + self.suffixes.len()
            + self.particles.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    word: &'a str,
    marker: bool,
}

impl<'a> Token<'a> {
    fn trimmed(&self) -> &'a str {
        let trimmed = trim_word(self.word);
        if trimmed.is_empty() {
            self.word
        } else {
            trimmed
        }
    }
}

#[derive(Debug, Default)]
struct Split<'a> {
    family: SmallVec<[&'a str; 3]>,
    first: Option<Token<'a>>,
    middle: SmallVec<[Token<'a>; 4]>,
    particles: SmallVec<[&'a str; 2]>,
}

#[derive(Debug)]
struct ParseOp<'a> {
    tokens: SmallVec<[Token<'a>; 7]>,
    titles: Vec<String>,
    suffixes: Vec<String>,
}

/// Split a transliterated name into family, given and middle names,
/// titles, suffixes and particles, following the conventions of the
/// context's culture. Never fails; text with no words gives an empty
/// structure.
///
/// `original` is the text before transliteration. Patronymic markers
/// written in Arabic script are recognized through it when it lines up
/// word for word with `transliterated`.
///
/// # Examples
///
/// ```
/// use namecast::{parse_name, CulturalContext, Culture};
///
/// let context = CulturalContext::new(Culture::Vietnamese);
/// let name = parse_name("Nguyễn Văn Minh", "Nguyen Van Minh", &context);
/// assert_eq!("NGUYEN", name.family);
/// assert_eq!("Minh", name.first);
/// assert_eq!(vec!["Van"], name.middle);
/// ```
pub fn parse_name(original: &str, transliterated: &str, context: &CulturalContext) -> NameStructure {
    let text = if context.culture == Culture::Japanese {
        strip_honorifics(transliterated)
    } else {
        Cow::Borrowed(transliterated)
    };

    let mut op = ParseOp::new(original, &text, context.has_patronymics);
    op.extract_titles();
    op.extract_suffixes();

    let split = match context.culture {
        Culture::Western | Culture::Indian | Culture::Thai => {
            op.split_given_first(context.particle_prefix)
        }
        Culture::Arabic => op.split_given_first(false),
        Culture::Vietnamese | Culture::Chinese | Culture::Japanese | Culture::Korean => {
            op.split_family_first()
        }
        Culture::Indonesian | Culture::Malaysian => op.split_patronymic(),
    };
    log::debug!(
        "Parsed {} words as {} name ({} titles, {} suffixes)",
        op.tokens.len(),
        context.culture,
        op.titles.len(),
        op.suffixes.len()
    );

    op.finish(split, context.name_order)
}

impl<'a> ParseOp<'a> {
    fn new(original: &str, text: &'a str, patronymics: bool) -> ParseOp<'a> {
        let words: SmallVec<[&str; 7]> = Segments::from_text(text).collect();

        // Markers in the original script, when words correspond one to one
        let aligned: SmallVec<[bool; 7]> = if patronymics && original != text {
            let originals: SmallVec<[&str; 7]> = Segments::from_text(original).collect();
            if originals.len() == words.len() {
                originals
                    .iter()
                    .map(|w| is_patronymic_marker(trim_word(w)))
                    .collect()
            } else {
                SmallVec::new()
            }
        } else {
            SmallVec::new()
        };

        let tokens = words
            .into_iter()
            .enumerate()
            .map(|(i, word)| Token {
                word,
                marker: patronymics
                    && (is_patronymic_marker(trim_word(word))
                        || aligned.get(i).copied().unwrap_or(false)),
            })
            .collect();

        ParseOp {
            tokens,
            titles: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    fn extract_titles(&mut self) {
        let titles = &mut self.titles;
        self.tokens.retain(|token| match canonical_title(token.word) {
            Some(title) => {
                titles.push(title.to_string());
                false
            }
            None => true,
        });
    }

    fn extract_suffixes(&mut self) {
        while self.tokens.len() > 1 {
            let last = self.tokens[self.tokens.len() - 1];
            match canonical_suffix(last.word) {
                Some(suffix) => {
                    self.suffixes.insert(0, suffix.to_string());
                    self.tokens.pop();
                }
                None => break,
            }
        }
    }

    /// First word is the given name, last is the family name. With
    /// `particles`, lowercase particles directly before the family name
    /// are pulled out and joined onto it.
    fn split_given_first(&self, particles: bool) -> Split<'a> {
        let tokens = &self.tokens;
        let mut split = Split::default();
        match tokens.len() {
            0 => {}
            1 => split.first = Some(tokens[0]),
            n => {
                let last = n - 1;
                let mut family_start = last;
                if particles {
                    while family_start > 1 && is_particle(tokens[family_start - 1].trimmed()) {
                        family_start -= 1;
                    }
                }

                split.first = Some(tokens[0]);
                split.middle.extend(tokens[1..family_start].iter().copied());
                for token in &tokens[family_start..last] {
                    split.particles.push(token.trimmed());
                }
                split
                    .family
                    .extend(tokens[family_start..].iter().map(|t| t.trimmed()));
            }
        }
        split
    }

    /// First word is the family name, last is the given name, anything
    /// in between is a middle name.
    fn split_family_first(&self) -> Split<'a> {
        let tokens = &self.tokens;
        let mut split = Split::default();
        match tokens.len() {
            0 => {}
            1 => split.first = Some(tokens[0]),
            n => {
                split.family.push(tokens[0].trimmed());
                split.first = Some(tokens[n - 1]);
                split.middle.extend(tokens[1..n - 1].iter().copied());
            }
        }
        split
    }

    /// Malay and Indonesian names: a patronymic (`Ahmad bin Abdullah`) has
    /// no family name; everything after the given name is kept as middle.
    /// Only `bin`, `binti` and `binte` make a name patronymic.
    fn split_patronymic(&self) -> Split<'a> {
        let tokens = &self.tokens;
        let patronymic = tokens
            .iter()
            .skip(1)
            .any(|t| malay_marker(t.trimmed()).is_some());
        if !patronymic {
            return self.split_given_first(false);
        }

        let mut split = Split::default();
        split.first = Some(tokens[0]);
        split.middle.extend(tokens[1..].iter().copied());
        split
    }

    fn finish(self, split: Split<'a>, order: NameOrder) -> NameStructure {
        let mut name = NameStructure::empty(order);

        name.family = uppercase_word(&split.family.join(" "));
        debug_assert!(is_uppercase_word(&name.family));
        if let Some(first) = split.first {
            name.first = cased(first);
        }
        name.middle = split.middle.iter().map(|t| cased(*t)).collect();
        name.particles = split
            .particles
            .iter()
            .map(|p| p.to_lowercase())
            .collect();
        name.titles = self.titles;
        name.suffixes = self.suffixes;
        name.full_ascii = full_name(&name);
        name
    }
}

fn cased(token: Token) -> String {
    if token.marker {
        token.trimmed().to_string()
    } else {
        capitalize_word(token.trimmed())
    }
}

fn full_name(name: &NameStructure) -> String {
    let mut parts: Vec<&str> = name.titles.iter().map(|s| s.as_str()).collect();
    match name.order {
        NameOrder::FamilyFirst => {
            parts.push(&name.family);
            parts.extend(name.middle.iter().map(|s| s.as_str()));
            parts.push(&name.first);
        }
        NameOrder::GivenFirst => {
            parts.push(&name.first);
            parts.extend(name.middle.iter().map(|s| s.as_str()));
            parts.push(&name.family);
        }
    }
    parts.extend(name.suffixes.iter().map(|s| s.as_str()));
    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, culture: Culture) -> NameStructure {
        parse_name(text, text, &CulturalContext::new(culture))
    }

    #[test]
    fn western() {
        let name = parse("John Ronald Reuel Tolkien", Culture::Western);
        assert_eq!("TOLKIEN", name.family);
        assert_eq!("John", name.first);
        assert_eq!(vec!["Ronald", "Reuel"], name.middle);
        assert_eq!("John Ronald Reuel TOLKIEN", name.full_ascii);
    }

    #[test]
    fn western_particles() {
        let name = parse("Juan del Nunez", Culture::Western);
        assert_eq!("DEL NUNEZ", name.family);
        assert_eq!("Juan", name.first);
        assert!(name.middle.is_empty());
        assert_eq!(vec!["del"], name.particles);

        let name = parse("Ludwig Maria van der Berg", Culture::Western);
        assert_eq!("VAN DER BERG", name.family);
        assert_eq!(vec!["Maria"], name.middle);
        assert_eq!(vec!["van", "der"], name.particles);
    }

    #[test]
    fn particle_never_first() {
        let name = parse("De Niro", Culture::Western);
        assert_eq!("De", name.first);
        assert_eq!("NIRO", name.family);
        assert!(name.particles.is_empty());
    }

    #[test]
    fn titles_and_suffixes() {
        let name = parse("Dr. Martin Luther King Jr.", Culture::Western);
        assert_eq!(vec!["DR"], name.titles);
        assert_eq!(vec!["Jr"], name.suffixes);
        assert_eq!("Martin", name.first);
        assert_eq!(vec!["Luther"], name.middle);
        assert_eq!("KING", name.family);
        assert_eq!("DR Martin Luther KING Jr", name.full_ascii);

        let name = parse("Henry V", Culture::Western);
        assert_eq!(vec!["V"], name.suffixes);
        assert_eq!("Henry", name.first);
        assert_eq!("", name.family);
    }

    #[test]
    fn lone_suffix_is_a_name() {
        let name = parse("Junior", Culture::Western);
        assert_eq!("Junior", name.first);
        assert!(name.suffixes.is_empty());
    }

    #[test]
    fn vietnamese_keeps_markers_in_middle() {
        let name = parse("Doctor Nguyen Van Minh", Culture::Vietnamese);
        assert_eq!(vec!["DR"], name.titles);
        assert_eq!("NGUYEN", name.family);
        assert_eq!("Minh", name.first);
        assert_eq!(vec!["Van"], name.middle);
        assert_eq!("DR NGUYEN Van Minh", name.full_ascii);
        assert_eq!(NameOrder::FamilyFirst, name.order);
    }

    #[test]
    fn chinese() {
        let name = parse("Li Xiao Long", Culture::Chinese);
        assert_eq!("LI", name.family);
        assert_eq!("Long", name.first);
        assert_eq!(vec!["Xiao"], name.middle);

        let name = parse("Wang Fang", Culture::Chinese);
        assert_eq!("WANG", name.family);
        assert_eq!("Fang", name.first);
        assert!(name.middle.is_empty());
    }

    #[test]
    fn japanese_honorifics() {
        let name = parse("Tanaka-san Yoko", Culture::Japanese);
        assert_eq!("TANAKA", name.family);
        assert_eq!("Yoko", name.first);
        assert!(name.titles.is_empty());
    }

    #[test]
    fn arabic() {
        let name = parse("Muhammad bin Salman Al Saud", Culture::Arabic);
        assert_eq!("Muhammad", name.first);
        assert_eq!(vec!["bin", "Salman", "Al"], name.middle);
        assert_eq!("SAUD", name.family);
    }

    #[test]
    fn arabic_script_markers() {
        let context = CulturalContext::new(Culture::Arabic);
        let name = parse_name("محمد بن علي", "mhmd bn 'ly", &context);
        assert_eq!("Mhmd", name.first);
        assert_eq!(vec!["bn"], name.middle);
        assert_eq!("'LY", name.family);
    }

    #[test]
    fn malay_patronymic() {
        let name = parse("Ahmad bin Abdullah", Culture::Indonesian);
        assert_eq!("Ahmad", name.first);
        assert_eq!(vec!["bin", "Abdullah"], name.middle);
        assert_eq!("", name.family);

        let name = parse("Siti Aisyah binti Ismail", Culture::Malaysian);
        assert_eq!("Siti", name.first);
        assert_eq!(vec!["Aisyah", "binti", "Ismail"], name.middle);
        assert_eq!("", name.family);
    }

    #[test]
    fn indonesian_other_markers_are_not_patronymic() {
        let name = parse("Ahmad ibn Said", Culture::Indonesian);
        assert_eq!("Ahmad", name.first);
        assert_eq!(vec!["ibn"], name.middle);
        assert_eq!("SAID", name.family);
    }

    #[test]
    fn indian_and_thai_pull_particles() {
        let name = parse("Priya de Souza", Culture::Indian);
        assert_eq!("Priya", name.first);
        assert!(name.middle.is_empty());
        assert_eq!(vec!["de"], name.particles);
        assert_eq!("DE SOUZA", name.family);

        let name = parse("Anan van Berg", Culture::Thai);
        assert_eq!("Anan", name.first);
        assert!(name.middle.is_empty());
        assert_eq!(vec!["van"], name.particles);
        assert_eq!("VAN BERG", name.family);
    }

    #[test]
    fn marker_words_cased_as_names_elsewhere() {
        let name = parse("wang bin li", Culture::Chinese);
        assert_eq!("WANG", name.family);
        assert_eq!(vec!["Bin"], name.middle);
        assert_eq!("Li", name.first);
    }

    #[test]
    fn western_bin_is_a_particle() {
        let name = parse("Osama bin Laden", Culture::Western);
        assert_eq!("Osama", name.first);
        assert!(name.middle.is_empty());
        assert_eq!(vec!["bin"], name.particles);
        assert_eq!("BIN LADEN", name.family);
        assert_eq!("Osama BIN LADEN", name.full_ascii);
    }

    #[test]
    fn indonesian_mononym() {
        let name = parse("Sukarno", Culture::Indonesian);
        assert_eq!("Sukarno", name.first);
        assert_eq!("", name.family);
        assert_eq!("Sukarno", name.full_ascii);
    }

    #[test]
    fn single_token_is_first() {
        for culture in [Culture::Western, Culture::Chinese, Culture::Arabic, Culture::Korean] {
            let name = parse("Madonna", culture);
            assert_eq!("Madonna", name.first);
            assert_eq!("", name.family);
        }
    }

    #[test]
    fn empty() {
        for text in ["", "   ", " . - "] {
            let name = parse(text, Culture::Western);
            assert!(name.is_empty());
            assert_eq!("", name.full_ascii);
        }
    }

    #[test]
    fn never_invents_parts() {
        for (text, culture) in [
            ("Dr. Juan Carlos de la Vega III", Culture::Western),
            ("Prof Nguyen Thi Mai", Culture::Vietnamese),
            ("Ahmad bin Abdullah", Culture::Malaysian),
            ("Mr", Culture::Western),
            ("a b c d e f g h i j", Culture::Korean),
        ] {
            let words = Segments::from_text(text).count();
            let name = parse(text, culture);
            assert!(
                name.part_count() <= words,
                "[{}] {} parts from {} words",
                text,
                name.part_count(),
                words
            );
        }
    }

    #[test]
    fn casing_invariants() {
        let name = parse("mARIA de los ANGELES o'brien-smith", Culture::Western);
        assert_eq!(name.family, name.family.to_uppercase());
        assert_eq!("Maria", name.first);
        assert_eq!("O'BRIEN-SMITH", name.family);
    }
}
