#![no_main]
use libfuzzer_sys::fuzz_target;
use namecast::{detect_script, process, Target};

fuzz_target!(|data: &str| {
    let info = detect_script(data);
    assert!((0.0..=1.0).contains(&info.confidence));

    if let Ok(conversion) = process(data, None, Target::Ascii, None) {
        assert!(conversion.transliteration.output.is_ascii());
    }
});
