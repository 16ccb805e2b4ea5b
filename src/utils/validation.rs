use crate::utils::error::{Result, TrelloCardError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(TrelloCardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme().to_string().as_str() {
            "http" | "https" if !url.cannot_be_a_base() => Ok(url),
            "http" | "https" => Err(TrelloCardError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            }),
            scheme => Err(TrelloCardError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TrelloCardError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 必填字串：缺少與空字串一律視為未定義，值本身不做 trim
pub fn validate_required_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TrelloCardError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}
