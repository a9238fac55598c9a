use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_RELATIVE_PATH: &str = ".evtally/config.toml";

#[derive(Debug, Clone)]
pub struct TallyConfig {
    pub version: u32,
    pub input: Option<InputConfig>,
    pub count: Option<CountConfig>,
}

#[derive(Debug, Clone)]
pub struct InputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CountConfig {
    pub field: String,
}

#[derive(Debug, Clone, Deserialize)]
struct RawTallyConfig {
    version: Option<u32>,
    input: Option<RawInputConfig>,
    count: Option<RawCountConfig>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawInputConfig {
    path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawCountConfig {
    field: Option<String>,
}

impl TallyConfig {
    pub fn input_path(&self) -> Option<&Path> {
        self.input.as_ref().and_then(|i| i.path.as_deref())
    }

    pub fn field(&self) -> Option<&str> {
        self.count.as_ref().map(|c| c.field.as_str())
    }
}

pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_RELATIVE_PATH)
}

pub fn load_default_config(root: &Path) -> Result<Option<TallyConfig>> {
    let path = default_config_path(root);
    if !path.exists() {
        return Ok(None);
    }
    load_config(&path).map(Some)
}

pub fn load_config(path: &Path) -> Result<TallyConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read tally config {}", path.display()))?;
    let parsed: RawTallyConfig =
        toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    validate_config(parsed, path)
}

fn validate_config(raw: RawTallyConfig, path: &Path) -> Result<TallyConfig> {
    let version = raw
        .version
        .ok_or_else(|| anyhow::anyhow!("{} missing required `version`", path.display()))?;
    if version != 1 {
        bail!(
            "{} has unsupported version {version}; expected version = 1",
            path.display()
        );
    }

    let input = raw.input.map(|input| InputConfig {
        path: sanitize_optional(input.path).map(PathBuf::from),
    });

    let count = raw
        .count
        .map(|count| {
            let field = sanitize_optional(count.field).ok_or_else(|| {
                anyhow::anyhow!("{} has empty or missing `[count].field`", path.display())
            })?;
            Ok::<_, anyhow::Error>(CountConfig { field })
        })
        .transpose()?;

    Ok(TallyConfig {
        version,
        input,
        count,
    })
}

fn sanitize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
