use crate::config::ScoringConfig;
use crate::script::{Script, Target};

/// How naturally a source script maps onto a target alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    High,
    Medium,
    Low,
    None,
}

impl Compatibility {
    pub fn between(source: Script, _target: Target) -> Compatibility {
        match source {
            s if s.is_latin_family() => Compatibility::High,
            Script::Cyrillic | Script::Greek => Compatibility::Medium,
            Script::Chinese
            | Script::Japanese
            | Script::Korean
            | Script::Arabic
            | Script::Hebrew
            | Script::Thai => Compatibility::Low,
            _ => Compatibility::None,
        }
    }

    fn bonus(self, config: &ScoringConfig) -> f64 {
        match self {
            Compatibility::High => config.high_compatibility,
            Compatibility::Medium => config.medium_compatibility,
            Compatibility::Low => config.low_compatibility,
            Compatibility::None => 0.0,
        }
    }
}

#[inline]
fn within(value: f64, (low, high): (f64, f64)) -> bool {
    value >= low && value <= high
}

/// Overall confidence in a conversion, from how well the scripts fit and
/// how much of the input survived. Always in `[0.1, 1.0]` with the
/// default config.
///
/// # Examples
///
/// ```
/// use namecast::{score, Script, Target};
///
/// assert!((score("Привет", "Privet", Script::Cyrillic, Target::Latin) - 0.9).abs() < 1e-9);
/// assert!((score("John", "John", Script::Latin, Target::Ascii) - 1.0).abs() < 1e-9);
/// ```
pub fn score(input: &str, output: &str, source: Script, target: Target) -> f64 {
    score_with(input, output, source, target, &ScoringConfig::default())
}

pub fn score_with(
    input: &str,
    output: &str,
    source: Script,
    target: Target,
    config: &ScoringConfig,
) -> f64 {
    let mut score = config.base + Compatibility::between(source, target).bonus(config);

    let input_visible = input.chars().filter(|c| !c.is_whitespace()).count();
    let output_visible = output.chars().filter(|c| !c.is_whitespace()).count();
    if input_visible > 0 {
        if output_visible == 0 {
            score -= config.empty_output_penalty;
        } else if within(output_visible as f64 / input_visible as f64, config.coverage_range) {
            score += config.coverage_bonus;
        }
    }

    let input_len = input.chars().count();
    if input_len > 0 {
        let ratio = output.chars().count() as f64 / input_len as f64;
        if within(ratio, config.length_range) {
            score += config.length_bonus;
        }
    }

    score.max(config.floor).min(config.ceiling)
}
