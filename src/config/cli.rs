use crate::config::toml_config::{AppConfig, RandomConfig};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "fpl-transfers")]
#[command(about = "Suggests a single legal transfer for a fantasy football squad")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Players CSV (id,name,club_id,position,price); overrides the config file
    #[arg(long, global = true)]
    pub players: Option<String>,

    /// Clubs CSV (id,name); overrides the config file
    #[arg(long, global = true)]
    pub clubs: Option<String>,

    /// Game site root used for squad scraping
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Fix the random source for reproducible suggestions
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Suggest a transfer for an explicit squad
    Suggest {
        /// JSON array of the 15 player ids held, e.g. "[1,2,...,15]"
        #[arg(long)]
        squad: Option<String>,
        /// Money in the bank
        #[arg(long)]
        cash: Option<String>,
    },
    /// Print a team's current squad
    Squad {
        #[arg(long)]
        fplid: Option<String>,
    },
    /// Scrape a team's squad and suggest a transfer for it
    Scout {
        #[arg(long)]
        fplid: String,
        #[arg(long)]
        cash: String,
    },
}

impl CliConfig {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn load_app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(players) = &self.players {
            config.directory.players_path = players.clone();
        }
        if let Some(clubs) = &self.clubs {
            config.directory.clubs_path = clubs.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.scraper.base_url = Some(base_url.clone());
        }
        if let Some(seed) = self.seed {
            config.random = Some(RandomConfig { seed: Some(seed) });
        }

        Ok(config)
    }
}
