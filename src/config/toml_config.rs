use crate::domain::model::SquadRules;
use crate::utils::error::{Result, TransferError};
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com";
pub const DEFAULT_USER_AGENT: &str = concat!("fpl-transfers/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    pub random: Option<RandomConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub players_path: String,
    pub clubs_path: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            players_path: "data/players.csv".to_string(),
            clubs_path: "data/clubs.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScraperConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    pub squad_size: Option<usize>,
    pub max_per_club: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TransferError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TransferError::ConfigError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("directory.players_path", &self.directory.players_path)?;
        validate_path("directory.clubs_path", &self.directory.clubs_path)?;
        validate_url("scraper.base_url", self.base_url())?;

        if let Some(timeout) = self.scraper.timeout_seconds {
            validate_positive_number("scraper.timeout_seconds", timeout as usize, 1)?;
        }
        if let Some(size) = self.rules.squad_size {
            validate_positive_number("rules.squad_size", size, 1)?;
        }
        if let Some(max) = self.rules.max_per_club {
            validate_positive_number("rules.max_per_club", max, 1)?;
        }

        Ok(())
    }

    pub fn base_url(&self) -> &str {
        self.scraper.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.scraper.timeout_seconds.unwrap_or(30))
    }

    pub fn user_agent(&self) -> &str {
        self.scraper
            .user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn rules(&self) -> SquadRules {
        let defaults = SquadRules::default();
        SquadRules {
            squad_size: self.rules.squad_size.unwrap_or(defaults.squad_size),
            max_per_club: self.rules.max_per_club.unwrap_or(defaults.max_per_club),
        }
    }

    pub fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|r| r.seed)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
