use anyhow::Context;
use clap::Parser;
use trellocard::utils::logger;
use trellocard::{CardEngine, CliConfig, TrelloClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 參數數量不對時 clap 直接結束，不會碰到網路
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.log_format, config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let client = TrelloClient::new().context("Failed to build Trello API client")?;
    let engine = CardEngine::new(client);

    match engine.run_from_file(&config.config, &config.card_name).await {
        Ok(created) => {
            tracing::info!("✅ Card created on list {}", created.list_id);
            created
                .write_confirmation(&mut std::io::stdout().lock())
                .context("Failed to write confirmation")
        }
        Err(e) => {
            tracing::error!("❌ Failed to create card: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
