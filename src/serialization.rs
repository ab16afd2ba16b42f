use super::{Config, Conversion, ScriptInfo};

impl Conversion {
    /// Compact JSON form of the whole conversion.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl ScriptInfo {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Config {
    /// Read a config from JSON. Missing sections and fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Config> {
        serde_json::from_str(json)
    }
}
