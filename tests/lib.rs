use namecast::{
    detect_script, parse_name, process, Converter, CulturalContext, Culture, Error, Gender,
    Script, ScriptInfo, Target,
};
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;

fn fixture_lines(path: &str) -> Vec<String> {
    let f = File::open(path).ok().unwrap();
    let reader = BufReader::new(f);
    reader
        .lines()
        .map(|l| l.ok().unwrap())
        .filter(|l| !l.starts_with('#') && l.contains('|'))
        .collect()
}

fn none_if_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn list(s: &str) -> Vec<&str> {
    if s.is_empty() {
        Vec::new()
    } else {
        s.split(';').collect()
    }
}

#[test]
fn conversions() {
    for line in fixture_lines("tests/conversions.txt") {
        let parts: Vec<&str> = line.split('|').collect();
        let input = parts[0];
        let source = none_if_empty(parts[1]).map(|s| s.parse::<Script>().unwrap());
        let target = parts[2].parse::<Target>().unwrap();
        let locale = none_if_empty(parts[3]);
        let family = parts[4];
        let first = parts[5];
        let middle = list(parts[6]);
        let titles = list(parts[7]);
        let suffixes = list(parts[8]);
        let gender = none_if_empty(parts[9]);
        let particles = list(parts[10]);

        let conversion = process(input, source, target, locale);
        assert!(conversion.is_ok(), "[{}] Could not convert: {:?}", input, conversion);
        let conversion = conversion.unwrap();
        let name = &conversion.name;

        assert!(
            name.family == family,
            "[{}] Expected family {}, got {}",
            input,
            family,
            name.family
        );
        assert!(
            name.first == first,
            "[{}] Expected first {}, got {}",
            input,
            first,
            name.first
        );
        assert!(
            name.middle == middle,
            "[{}] Expected middle {:?}, got {:?}",
            input,
            middle,
            name.middle
        );
        assert!(
            name.titles == titles,
            "[{}] Expected titles {:?}, got {:?}",
            input,
            titles,
            name.titles
        );
        assert!(
            name.suffixes == suffixes,
            "[{}] Expected suffixes {:?}, got {:?}",
            input,
            suffixes,
            name.suffixes
        );
        assert!(
            name.particles == particles,
            "[{}] Expected particles {:?}, got {:?}",
            input,
            particles,
            name.particles
        );
        if let Some(gender) = gender {
            assert!(
                conversion.gender.value.as_str() == gender,
                "[{}] Expected gender {}, got {} ({})",
                input,
                gender,
                conversion.gender.value,
                conversion.gender.reason
            );
        }
    }
}

#[test]
fn transliterations() {
    let converter = Converter::new();
    for line in fixture_lines("tests/transliterations.txt") {
        let parts: Vec<&str> = line.split('|').collect();
        let input = parts[0];
        let source = match none_if_empty(parts[1]) {
            Some(s) => s.parse::<Script>().unwrap(),
            None => detect_script(input).script,
        };
        let target = parts[2].parse::<Target>().unwrap();
        let expected = parts[3];

        let result = converter.transliterate(input, source, target, None);
        assert!(result.is_ok(), "[{}] Could not transliterate: {:?}", input, result);
        let result = result.unwrap();
        assert!(
            result.output == expected,
            "[{}] Expected {}, got {}",
            input,
            expected,
            result.output
        );
        assert!(
            result.notes.is_empty(),
            "[{}] Unexpected notes {:?}",
            input,
            result.notes
        );
    }
}

#[test]
fn scripts() {
    for line in fixture_lines("tests/scripts.txt") {
        let parts: Vec<&str> = line.split('|').collect();
        let input = parts[0];
        let expected = parts[1].parse::<Script>().unwrap();

        let info = detect_script(input);
        assert!(
            info.script == expected,
            "[{}] Expected {}, got {}",
            input,
            expected,
            info.script
        );
        assert!(
            (0.0..=1.0).contains(&info.confidence),
            "[{}] Confidence {} out of range",
            input,
            info.confidence
        );
    }
}

#[test]
fn empty_input() {
    assert_eq!(ScriptInfo::UNKNOWN, detect_script(""));
    assert_eq!(
        Err(Error::EmptyResult),
        Converter::new().transliterate("", Script::Unknown, Target::Ascii, None)
    );
    let name = parse_name("", "", &CulturalContext::new(Culture::Western));
    assert!(name.is_empty());
    assert_eq!(Err(Error::InvalidInput), process("", None, Target::Ascii, None));
}

#[test]
fn ascii_names_are_unchanged() {
    for line in fixture_lines("tests/conversions.txt") {
        let input = line.split('|').next().unwrap();
        if !input.is_ascii() {
            continue;
        }
        let conversion = process(input, None, Target::Ascii, None).unwrap();
        assert!(
            conversion.transliteration.output == input,
            "[{}] ASCII input changed to {}",
            input,
            conversion.transliteration.output
        );
        assert_eq!(Script::Latin, conversion.script.script);
    }
}

#[test]
fn ascii_target_invariants() {
    for path in &["tests/conversions.txt", "tests/transliterations.txt"] {
        for line in fixture_lines(path) {
            let input = line.split('|').next().unwrap();
            let conversion = process(input, None, Target::Ascii, None).unwrap();

            assert!(
                conversion.transliteration.output.is_ascii(),
                "[{}] Non-ASCII output {}",
                input,
                conversion.transliteration.output
            );
            assert!(
                conversion.name.full_ascii.is_ascii(),
                "[{}] Non-ASCII full name {}",
                input,
                conversion.name.full_ascii
            );
            assert_eq!(
                conversion.name.family,
                conversion.name.family.to_uppercase(),
                "[{}] family name not uppercase",
                input
            );

            let gender = &conversion.gender;
            assert!(
                gender.confidence >= 0.1 && gender.confidence <= 0.95,
                "[{}] Gender confidence {} out of range",
                input,
                gender.confidence
            );
            assert!((0.1..=1.0).contains(&conversion.confidence));
            assert!((0.0..=1.0).contains(&conversion.transliteration.confidence));
            if gender.value == Gender::Unknown {
                assert_ne!(namecast::GenderSource::Statistical, gender.source, "[{}]", input);
            }
        }
    }
}

#[test]
fn concurrent_conversions() {
    let inputs: Vec<String> = fixture_lines("tests/conversions.txt")
        .iter()
        .map(|l| l.split('|').next().unwrap().to_string())
        .collect();
    let expected: Vec<_> = inputs
        .iter()
        .map(|input| process(input, None, Target::Ascii, None))
        .collect();

    let converter = Converter::new();
    crossbeam_utils::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|_| {
                for (input, expected) in inputs.iter().zip(expected.iter()) {
                    assert_eq!(
                        *expected,
                        converter.process(input, None, Target::Ascii, None),
                        "[{}] differs across threads",
                        input
                    );
                }
            });
        }
    })
    .unwrap();
}
