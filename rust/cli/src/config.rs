//! Layered session configuration.
//!
//! Resolution order: built-in defaults, then the TOML file named by
//! `PITBOSS_CONFIG`, then `PITBOSS_*` environment variables. Command-line flags
//! are applied on top by the individual commands. Every value remembers where
//! it came from so `pitboss cfg` can show it.

use pitboss_engine::player::STARTING_BALANCE;
use pitboss_engine::table::TableRules;
use serde::{Deserialize, Serialize};
use std::fs;

pub const MAX_DECKS: u32 = 8;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub starting_balance: f64,
    pub buy_in: f64,
    pub buy_in_step: f64,
    pub decks: u32,
    pub seed: Option<u64>,
    pub bot_strategy: String,
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
    pub starting_balance: ValueSource,
    pub buy_in: ValueSource,
    pub buy_in_step: ValueSource,
    pub decks: ValueSource,
    pub seed: ValueSource,
    pub bot_strategy: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            starting_balance: ValueSource::Default,
            buy_in: ValueSource::Default,
            buy_in_step: ValueSource::Default,
            decks: ValueSource::Default,
            seed: ValueSource::Default,
            bot_strategy: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let rules = TableRules::default();
        Self {
            starting_balance: STARTING_BALANCE,
            buy_in: rules.buy_in,
            buy_in_step: rules.buy_in_step,
            decks: 6,
            seed: None,
            bot_strategy: "basic".into(),
        }
    }
}

impl Config {
    pub fn table_rules(&self) -> TableRules {
        TableRules {
            buy_in: self.buy_in,
            buy_in_step: self.buy_in_step,
        }
    }
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

    if let Ok(path) = std::env::var("PITBOSS_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.starting_balance {
            cfg.starting_balance = v;
            sources.starting_balance = ValueSource::File;
        }
        if let Some(v) = f.buy_in {
            cfg.buy_in = v;
            sources.buy_in = ValueSource::File;
        }
        if let Some(v) = f.buy_in_step {
            cfg.buy_in_step = v;
            sources.buy_in_step = ValueSource::File;
        }
        if let Some(v) = f.decks {
            cfg.decks = v;
            sources.decks = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.bot_strategy {
            cfg.bot_strategy = v;
            sources.bot_strategy = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("PITBOSS_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(decks) = std::env::var("PITBOSS_DECKS")
        && !decks.is_empty()
    {
        cfg.decks = decks
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid decks".into()))?;
        sources.decks = ValueSource::Env;
    }
    if let Ok(balance) = std::env::var("PITBOSS_STARTING_BALANCE")
        && !balance.is_empty()
    {
        cfg.starting_balance = parse_coins(&balance)
            .ok_or_else(|| ConfigError::Invalid("Invalid starting_balance".into()))?;
        sources.starting_balance = ValueSource::Env;
    }
    if let Ok(buy_in) = std::env::var("PITBOSS_BUY_IN")
        && !buy_in.is_empty()
    {
        cfg.buy_in =
            parse_coins(&buy_in).ok_or_else(|| ConfigError::Invalid("Invalid buy_in".into()))?;
        sources.buy_in = ValueSource::Env;
    }
    if let Ok(step) = std::env::var("PITBOSS_BUY_IN_STEP")
        && !step.is_empty()
    {
        cfg.buy_in_step =
            parse_coins(&step).ok_or_else(|| ConfigError::Invalid("Invalid buy_in_step".into()))?;
        sources.buy_in_step = ValueSource::Env;
    }
    if let Ok(strategy) = std::env::var("PITBOSS_BOT_STRATEGY")
        && !strategy.is_empty()
    {
        cfg.bot_strategy = strategy;
        sources.bot_strategy = ValueSource::Env;
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
    starting_balance: Option<f64>,
    #[serde(default)]
    buy_in: Option<f64>,
    #[serde(default)]
    buy_in_step: Option<f64>,
    #[serde(default)]
    decks: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    bot_strategy: Option<String>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_decks(cfg.decks)?;
    if !(cfg.starting_balance.is_finite() && cfg.starting_balance > 0.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: starting_balance must be >0".into(),
        ));
    }
    if !(cfg.buy_in.is_finite() && cfg.buy_in > 0.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: buy_in must be >0".into(),
        ));
    }
    if !(cfg.buy_in_step.is_finite() && cfg.buy_in_step >= 0.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: buy_in_step must be >=0".into(),
        ));
    }
    if !pitboss_ai::is_registered(&cfg.bot_strategy) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown bot_strategy '{}' (known: {})",
            cfg.bot_strategy,
            pitboss_ai::strategy_ids().join(", ")
        )));
    }
    Ok(())
}

pub fn validate_decks(decks: u32) -> Result<(), ConfigError> {
    if !(1..=MAX_DECKS).contains(&decks) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: decks must be between 1 and {}",
            MAX_DECKS
        )));
    }
    Ok(())
}

fn parse_coins(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
