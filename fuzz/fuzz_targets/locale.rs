#![no_main]
use libfuzzer_sys::fuzz_target;
use namecast::{process, Target};

fuzz_target!(|input: (&str, &str)| {
    let (name, locale) = input;
    let _ = process(name, None, Target::Latin, Some(locale));
});
