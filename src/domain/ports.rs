use crate::config::card_config::CardConfig;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 對看板的兩個遠端操作；`TrelloClient` 是實際實作
#[async_trait]
pub trait BoardApi: Send + Sync {
    /// 在 open 清單中找出名稱等於 `list_name` 的清單 id
    async fn find_list_id(&self, config: &CardConfig) -> Result<String>;

    /// 在指定清單底部建立卡片
    async fn create_card(&self, config: &CardConfig, name: &str, list_id: &str) -> Result<()>;
}
