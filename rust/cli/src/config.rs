//! Layered configuration: built-in defaults, then a TOML file named by
//! `NINES_CONFIG`, then `NINES_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fs;

use nines_ai::AI_NAMES;
use nines_engine::engine::{DEFAULT_PILE_COUNT, EngineConfig};

pub const ENV_CONFIG: &str = "NINES_CONFIG";
pub const ENV_SEED: &str = "NINES_SEED";
pub const ENV_PILES: &str = "NINES_PILES";
pub const ENV_AI: &str = "NINES_AI";
pub const ENV_MAX_MOVES: &str = "NINES_MAX_MOVES";

pub const DEFAULT_MAX_MOVES: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub piles: usize,
    pub ai: String,
    pub max_moves: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            piles: DEFAULT_PILE_COUNT,
            ai: "baseline".into(),
            max_moves: DEFAULT_MAX_MOVES,
        }
    }
}

impl Config {
    pub fn engine_config(&self, seed: u64) -> EngineConfig {
        EngineConfig {
            seed: Some(seed),
            piles: self.piles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub piles: ValueSource,
    pub ai: ValueSource,
    pub max_moves: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            piles: ValueSource::Default,
            ai: ValueSource::Default,
            max_moves: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(ENV_CONFIG)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.piles {
            cfg.piles = v;
            sources.piles = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
        if let Some(v) = f.max_moves {
            cfg.max_moves = v;
            sources.max_moves = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(ENV_SEED)
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_SEED, seed)))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(piles) = std::env::var(ENV_PILES)
        && !piles.is_empty()
    {
        cfg.piles = piles
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_PILES, piles)))?;
        sources.piles = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var(ENV_AI)
        && !ai.is_empty()
    {
        cfg.ai = ai;
        sources.ai = ValueSource::Env;
    }
    if let Ok(max) = std::env::var(ENV_MAX_MOVES)
        && !max.is_empty()
    {
        cfg.max_moves = max
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", ENV_MAX_MOVES, max)))?;
        sources.max_moves = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    piles: Option<usize>,
    #[serde(default)]
    ai: Option<String>,
    #[serde(default)]
    max_moves: Option<usize>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    cfg.engine_config(0)
        .validate()
        .map_err(|e| ConfigError::Invalid(format!("Invalid configuration: {}", e)))?;
    if !AI_NAMES.contains(&cfg.ai.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai '{}' (expected one of {})",
            cfg.ai,
            AI_NAMES.join(", ")
        )));
    }
    if cfg.max_moves == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_moves must be >=1".into(),
        ));
    }
    Ok(())
}
