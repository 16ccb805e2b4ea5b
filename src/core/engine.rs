use crate::config::card_config::CardConfig;
use crate::core::{BoardApi, CreatedCard};
use crate::utils::error::Result;
use std::path::Path;

/// Load → Resolve → Create，任何一步失敗就停，不回滾也不重試
pub struct CardEngine<A: BoardApi> {
    api: A,
}

impl<A: BoardApi> CardEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn run_from_file<P: AsRef<Path>>(
        &self,
        config_path: P,
        card_name: &str,
    ) -> Result<CreatedCard> {
        let config_path = config_path.as_ref();
        tracing::info!("📁 Loading configuration from: {}", config_path.display());
        let config = CardConfig::load(config_path)?;
        tracing::debug!("Config: {:?}", config);

        self.run(&config, card_name).await
    }

    pub async fn run(&self, config: &CardConfig, card_name: &str) -> Result<CreatedCard> {
        tracing::info!(
            "🔍 Looking up list `{}` on board {}",
            config.list_name,
            config.board_id
        );
        let list_id = self.api.find_list_id(config).await?;
        tracing::debug!("Resolved list `{}` to {}", config.list_name, list_id);

        tracing::info!("📝 Creating card `{}`", card_name);
        self.api.create_card(config, card_name, &list_id).await?;

        Ok(CreatedCard {
            name: card_name.to_string(),
            list_id,
        })
    }
}
