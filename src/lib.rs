pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::AppConfig;

pub use adapters::{FixedChooser, HttpSquadScraper, InMemoryDirectory, RngChooser};
pub use app::ApiResponse;
pub use core::{engine::TransferEngine, selector::TransferSelector};
pub use utils::error::{Result, TransferError};
