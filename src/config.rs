use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPoints {
    #[serde(default)]
    pub same_country: i64,
    #[serde(default)]
    pub same_continent: i64,
    #[serde(default)]
    pub specific_country: i64,
    #[serde(default)]
    pub other: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiplierKind {
    CqZone,
    ItuZone,
    Dxcc,
}

impl MultiplierKind {
    pub const ALL: [MultiplierKind; 3] = [Self::CqZone, Self::ItuZone, Self::Dxcc];

    pub fn token(self) -> &'static str {
        match self {
            Self::CqZone => "cq",
            Self::ItuZone => "itu",
            Self::Dxcc => "dxcc",
        }
    }
}

impl Serialize for MultiplierKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for MultiplierKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_multiplier_token(&raw).map_err(D::Error::custom)
    }
}

fn parse_multiplier_token(raw: &str) -> Result<MultiplierKind, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "cq" | "cqzone" | "cq_zone" => Ok(MultiplierKind::CqZone),
        "itu" | "ituzone" | "itu_zone" => Ok(MultiplierKind::ItuZone),
        "dxcc" | "prefix" | "country" => Ok(MultiplierKind::Dxcc),
        _ => Err(format!("unsupported multiplier '{raw}'")),
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("yaml parse failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json parse failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported config extension '{0}'; expected .yaml/.yml/.json")]
    Extension(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawScoringConfig")]
pub struct ScoringConfig {
    pub points: CategoryPoints,
    pub multipliers: Vec<MultiplierKind>,
    pub specific_country_prefixes: BTreeSet<String>,
}

#[derive(Deserialize)]
struct RawScoringConfig {
    #[serde(default)]
    points: CategoryPoints,
    #[serde(default)]
    multipliers: Vec<MultiplierKind>,
    #[serde(default)]
    specific_country_prefixes: Vec<String>,
}

impl From<RawScoringConfig> for ScoringConfig {
    fn from(raw: RawScoringConfig) -> Self {
        Self::new(raw.points, raw.multipliers, raw.specific_country_prefixes)
    }
}

impl ScoringConfig {
    pub fn new(
        points: CategoryPoints,
        multipliers: impl IntoIterator<Item = MultiplierKind>,
        specific_country_prefixes: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        let mut enabled = Vec::new();
        for kind in multipliers {
            if !enabled.contains(&kind) {
                enabled.push(kind);
            }
        }
        let prefixes = specific_country_prefixes
            .into_iter()
            .map(|p| p.as_ref().trim().to_ascii_uppercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            points,
            multipliers: enabled,
            specific_country_prefixes: prefixes,
        }
    }

    pub fn counts(&self, kind: MultiplierKind) -> bool {
        self.multipliers.contains(&kind)
    }

    pub fn is_specific_country(&self, prefix: &str) -> bool {
        self.specific_country_prefixes.contains(prefix)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(input)
    }

    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let raw = fs::read_to_string(path_ref).map_err(|source| ConfigError::Read {
            path: path_ref.to_path_buf(),
            source,
        })?;
        let ext = path_ref
            .extension()
            .and_then(|v| v.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::from_yaml_str(&raw)?),
            "json" => Ok(Self::from_json_str(&raw)?),
            _ => Err(ConfigError::Extension(ext)),
        }
    }
}
