use crate::utils::error::{Result, TrelloCardError};
use crate::utils::validation::{validate_required_string, Validate};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_PATH: &str = "trellocard.conf";

/// 整個值剛好是 `${VAR}` 才算佔位符
static ENV_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$\{([A-Za-z_][A-Za-z0-9_]*)\}$").expect("valid placeholder pattern")
});

/// 設定檔內容；載入後不再變動，以參考傳給各個操作
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub board_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_key: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list_name: String,
}

/// `null` 與缺欄位一樣交給 validate 處理
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` 結尾用 TOML，其餘（包含預設的 trellocard.conf）都當 JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

impl CardConfig {
    /// 讀檔、解析並驗證四個必填欄位
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// 只讀檔與解析，不做欄位驗證
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(TrelloCardError::IoError)?;
        Self::from_str_with_format(&content, ConfigFormat::from_path(path))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, ConfigFormat::Json)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, ConfigFormat::Toml)
    }

    fn from_str_with_format(content: &str, format: ConfigFormat) -> Result<Self> {
        let mut config: Self = match format {
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| TrelloCardError::ConfigParseError {
                    message: format!("JSON parsing error: {}", e),
                })?
            }
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|e| TrelloCardError::ConfigParseError {
                    message: format!("TOML parsing error: {}", e),
                })?
            }
        };

        // 只有憑證可以從環境變數來，board_id 與 list_name 一律照檔案原文
        config.api_key = resolve_env_placeholder(config.api_key);
        config.token = resolve_env_placeholder(config.token);
        Ok(config)
    }
}

/// `${TRELLO_TOKEN}` 換成環境變數的值；未設定或不是整值佔位符就原樣保留
fn resolve_env_placeholder(value: String) -> String {
    let resolved = ENV_PLACEHOLDER
        .captures(&value)
        .and_then(|caps| std::env::var(&caps[1]).ok());
    resolved.unwrap_or(value)
}

impl Validate for CardConfig {
    fn validate(&self) -> Result<()> {
        validate_required_string("api_key", &self.api_key)?;
        validate_required_string("token", &self.token)?;
        validate_required_string("board_id", &self.board_id)?;
        validate_required_string("list_name", &self.list_name)?;
        Ok(())
    }
}

impl fmt::Debug for CardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardConfig")
            .field("board_id", &self.board_id)
            .field("api_key", &"<redacted>")
            .field("token", &"<redacted>")
            .field("list_name", &self.list_name)
            .finish()
    }
}
