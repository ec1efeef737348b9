use anyhow::Context;
use clap::Parser;
use fpl_transfers::app::{get_squad, transfers, ApiResponse};
use fpl_transfers::config::Command;
use fpl_transfers::core::{Budget, TeamId};
use fpl_transfers::utils::error::{ErrorSeverity, TransferError};
use fpl_transfers::utils::{logger, validation::Validate};
use fpl_transfers::{CliConfig, HttpSquadScraper, InMemoryDirectory, RngChooser, TransferEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting fpl-transfers CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = cli.load_app_config().unwrap_or_else(|e| fail(&e));

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let directory =
        InMemoryDirectory::from_csv_files(&config.directory.players_path, &config.directory.clubs_path)
            .with_context(|| {
                format!(
                    "loading players from {} and clubs from {}",
                    config.directory.players_path, config.directory.clubs_path
                )
            })?;
    let scraper = HttpSquadScraper::new(config.base_url(), config.timeout(), config.user_agent())
        .context("building squad scraper")?;
    let engine = TransferEngine::with_rules(directory, scraper, config.rules());

    let mut chooser = match config.seed() {
        Some(seed) => {
            tracing::info!("Using fixed random seed {}", seed);
            RngChooser::seeded(seed)
        }
        None => RngChooser::from_entropy(),
    };

    let response = match &cli.command {
        Command::Suggest { squad, cash } => transfers(
            &engine.selector(),
            squad.as_deref(),
            cash.as_deref(),
            &mut chooser,
        ),
        Command::Squad { fplid } => get_squad(&engine, fplid.as_deref()).await,
        Command::Scout { fplid, cash } => {
            let team_id = TeamId::parse(fplid).unwrap_or_else(|e| fail(&e));
            let budget = cash.parse::<Budget>().unwrap_or_else(|e| fail(&e));
            match engine.suggest_for_team(&team_id, budget, &mut chooser).await {
                Ok(recommendation) => {
                    println!("{}", serde_json::to_string(&recommendation)?);
                    return Ok(());
                }
                Err(e) => fail(&e),
            }
        }
    };

    report(response);
    Ok(())
}

fn report(response: ApiResponse) {
    if response.is_success() {
        println!("{}", response.body);
        return;
    }

    eprintln!("❌ {} ({})", response.body, response.status);
    let exit_code = match response.status {
        400..=499 => 1,
        502 => 2,
        _ => 3,
    };
    std::process::exit(exit_code);
}

fn fail(e: &TransferError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
