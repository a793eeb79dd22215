use std::fs;
use std::str::FromStr;
use serde::Deserialize;
use super::error::{Error, Result};

pub const DEFAULT_K: usize = 10;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// how many shortest paths to compute per pair
    pub k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { k: DEFAULT_K }
    }
}

impl Config {
    pub fn load_file(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }
}

impl FromStr for Config {
    type Err = Error;
    fn from_str(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text)?;
        Ok(config)
    }
}
