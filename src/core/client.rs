use crate::config::card_config::CardConfig;
use crate::domain::model::{BoardLists, NewCard};
use crate::domain::ports::BoardApi;
use crate::utils::error::{Result, TrelloCardError};
use crate::utils::validation::validate_url;
use reqwest::{Client, StatusCode};
use url::Url;

pub const TRELLO_API_BASE_URL: &str = "https://api.trello.com/1";

/// Trello REST API 的薄包裝；沒有逾時、沒有重試
#[derive(Debug, Clone)]
pub struct TrelloClient {
    client: Client,
    base_url: Url,
}

impl TrelloClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(TRELLO_API_BASE_URL)
    }

    /// 指向其他 API 根路徑（測試時用 mock server）
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: validate_url("base_url", base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait::async_trait]
impl BoardApi for TrelloClient {
    async fn find_list_id(&self, config: &CardConfig) -> Result<String> {
        let url = self.endpoint(&["boards", config.board_id.as_str()]);

        // key/token 只放在 query，不寫進日誌
        tracing::debug!("GET {} (lists=open)", url);
        let response = self
            .client
            .get(url)
            .query(&[
                ("lists", "open"),
                ("list_fields", "name"),
                ("fields", "name,desc"),
                ("key", config.api_key.as_str()),
                ("token", config.token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Board response status: {}", status);
        let body = response.text().await?;

        let board: BoardLists =
            serde_json::from_str(&body).map_err(|e| TrelloCardError::InvalidResponseError {
                status: status.as_u16(),
                message: e.to_string(),
            })?;
        tracing::debug!("Board has {} open lists", board.lists.len());

        board
            .find_list_id(&config.list_name)
            .map(str::to_owned)
            .ok_or_else(|| TrelloCardError::ListNotFoundError {
                list_name: config.list_name.clone(),
            })
    }

    async fn create_card(&self, config: &CardConfig, name: &str, list_id: &str) -> Result<()> {
        let url = self.endpoint(&["cards"]);
        let card = NewCard::at_bottom(name, list_id, &config.api_key, &config.token);

        tracing::debug!(
            "POST {} (name={}, pos={}, idList={})",
            url,
            card.name,
            card.pos,
            card.id_list
        );
        let response = self.client.post(url).form(&card).send().await?;

        let status = response.status();
        tracing::debug!("Card response status: {}", status);

        // 只接受 200，其他 2xx 也當失敗
        if status == StatusCode::OK {
            Ok(())
        } else {
            Err(TrelloCardError::UnexpectedStatusError {
                status: status.as_u16(),
            })
        }
    }
}
