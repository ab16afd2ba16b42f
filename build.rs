use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct TitleData {
    titles: HashMap<String, String>,
    title_genders: HashMap<String, String>,
}

#[derive(Deserialize)]
struct SuffixData {
    suffixes: HashMap<String, String>,
}

#[derive(Deserialize)]
struct NameData {
    particles: Vec<String>,
    patronymic_markers: HashMap<String, String>,
    malay_markers: Vec<String>,
    japanese_honorifics: Vec<String>,
}

#[derive(Deserialize)]
struct GenderedList {
    male: Vec<String>,
    female: Vec<String>,
}

#[derive(Deserialize)]
struct GenderData {
    fragments: HashMap<String, GenderedList>,
    japanese_endings: GenderedList,
    terminal_patterns: GenderedList,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/title_data.json")?;
    let titles: TitleData = serde_json::from_str(&json)?;
    write_map(&output.join("titles.rs"), &titles.titles, |v| {
        format!("\"{}\"", v)
    })?;
    write_map(&output.join("title_genders.rs"), &titles.title_genders, |v| {
        gender_variant(v)
    })?;

    let json = read_file(&input, "build/suffix_data.json")?;
    let suffixes: SuffixData = serde_json::from_str(&json)?;
    write_map(&output.join("suffixes.rs"), &suffixes.suffixes, |v| {
        format!("\"{}\"", v)
    })?;

    let json = read_file(&input, "build/name_data.json")?;
    let names: NameData = serde_json::from_str(&json)?;
    write_set(&output.join("particles.rs"), &names.particles)?;
    write_map(
        &output.join("patronymic_markers.rs"),
        &names.patronymic_markers,
        |v| gender_variant(v),
    )?;
    write_set(&output.join("malay_markers.rs"), &names.malay_markers)?;
    write_slice(
        &output.join("japanese_honorifics.rs"),
        &names.japanese_honorifics,
    )?;

    let json = read_file(&input, "build/gender_data.json")?;
    let genders: GenderData = serde_json::from_str(&json)?;
    write_map(&output.join("name_fragments.rs"), &genders.fragments, |l| {
        format!(
            "(&[{}] as &[_], &[{}] as &[_])",
            quoted_comma_separated(&l.male),
            quoted_comma_separated(&l.female)
        )
    })?;
    write_slice(
        &output.join("japanese_male_endings.rs"),
        &genders.japanese_endings.male,
    )?;
    write_slice(
        &output.join("japanese_female_endings.rs"),
        &genders.japanese_endings.female,
    )?;
    write_slice(
        &output.join("male_terminal_patterns.rs"),
        &genders.terminal_patterns.male,
    )?;
    write_slice(
        &output.join("female_terminal_patterns.rs"),
        &genders.terminal_patterns.female,
    )?;

    Ok(())
}

fn gender_variant(code: &str) -> String {
    match code {
        "M" => "Gender::Male".to_string(),
        "F" => "Gender::Female".to_string(),
        _ => "Gender::Unknown".to_string(),
    }
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let entries = map
        .iter()
        .map(|(k, v)| (k.to_string(), transform(v)))
        .collect::<Vec<_>>();

    let mut builder = phf_codegen::Map::new();
    for (k, v) in &entries {
        builder.entry(k.as_str(), v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

// Order-sensitive lists stay as plain slices
fn write_slice(output: &Path, list: &[String]) -> Result<()> {
    fs::write(output, format!("&[{}]", quoted_comma_separated(list)))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}

fn quoted_comma_separated(vs: &[String]) -> String {
    vs.iter()
        .map(|v| format!("\"{}\"", v))
        .collect::<Vec<_>>()
        .join(", ")
}
