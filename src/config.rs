//! Tunable constants for every heuristic in the pipeline.
//!
//! `Config::default()` reproduces the stock behavior. With the
//! `serialization` feature a config can be loaded from JSON; omitted fields
//! keep their defaults.

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct Config {
    pub detection: DetectionConfig,
    pub transliteration: TransliterationConfig,
    pub scoring: ScoringConfig,
    pub gender: GenderConfig,
}

/// Ratio thresholds and the confidence each one earns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct DetectionConfig {
    pub dominant_ratio: f64,
    pub dominant_confidence: f64,
    pub strong_ratio: f64,
    pub strong_confidence: f64,
    pub moderate_ratio: f64,
    pub moderate_confidence: f64,
    /// Used when no threshold is met but Latin letters are present.
    pub latin_confidence: f64,
    /// Distinct Vietnamese-only letters needed to call text Vietnamese.
    pub vietnamese_min_marks: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        DetectionConfig {
            dominant_ratio: 0.8,
            dominant_confidence: 0.95,
            strong_ratio: 0.6,
            strong_confidence: 0.85,
            moderate_ratio: 0.4,
            moderate_confidence: 0.70,
            latin_confidence: 0.60,
            vietnamese_min_marks: 2,
        }
    }
}

/// Per-rune weight of each transliteration rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct TransliterationConfig {
    pub dictionary_weight: f64,
    pub builtin_weight: f64,
    pub decomposition_weight: f64,
    pub fallback_weight: f64,
}

impl Default for TransliterationConfig {
    fn default() -> Self {
        TransliterationConfig {
            dictionary_weight: 0.95,
            builtin_weight: 0.85,
            decomposition_weight: 0.3,
            fallback_weight: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct ScoringConfig {
    pub base: f64,
    pub high_compatibility: f64,
    pub medium_compatibility: f64,
    pub low_compatibility: f64,
    pub coverage_bonus: f64,
    pub empty_output_penalty: f64,
    pub coverage_range: (f64, f64),
    pub length_bonus: f64,
    pub length_range: (f64, f64),
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            base: 0.5,
            high_compatibility: 0.3,
            medium_compatibility: 0.2,
            low_compatibility: 0.1,
            coverage_bonus: 0.1,
            empty_output_penalty: 0.2,
            coverage_range: (0.5, 1.5),
            length_bonus: 0.1,
            length_range: (0.5, 2.0),
            floor: 0.1,
            ceiling: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct GenderConfig {
    pub title: f64,
    pub vietnamese_marker: f64,
    pub arabic_marker: f64,
    pub malay_marker: f64,
    pub vietnamese_fragment: f64,
    pub arabic_fragment: f64,
    pub indonesian_fragment: f64,
    pub chinese_fragment: f64,
    pub japanese_female_ending: f64,
    pub japanese_male_ending: f64,
    pub indian_fragment: f64,
    pub western_fragment: f64,
    pub female_terminal: f64,
    pub male_terminal: f64,
    pub unknown: f64,
    pub ceiling: f64,
}

impl Default for GenderConfig {
    fn default() -> Self {
        GenderConfig {
            title: 0.90,
            vietnamese_marker: 0.85,
            arabic_marker: 0.90,
            malay_marker: 0.88,
            vietnamese_fragment: 0.65,
            arabic_fragment: 0.75,
            indonesian_fragment: 0.70,
            chinese_fragment: 0.55,
            japanese_female_ending: 0.70,
            japanese_male_ending: 0.60,
            indian_fragment: 0.75,
            western_fragment: 0.85,
            female_terminal: 0.60,
            male_terminal: 0.55,
            unknown: 0.1,
            ceiling: 0.95,
        }
    }
}
