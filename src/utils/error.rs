use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrelloCardError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("configuration requires `{field}` to be defined")]
    MissingConfigError { field: String },

    #[error("Invalid value for `{field}` ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Invalid response (HTTP {status}): {message}")]
    InvalidResponseError { status: u16, message: String },

    #[error("Could not find your list `{list_name}` among the open lists of the board")]
    ListNotFoundError { list_name: String },

    #[error("got a {status} status when creating")]
    UnexpectedStatusError { status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Protocol,
    Domain,
    Remote,
}

impl TrelloCardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_)
            | Self::ConfigParseError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ApiError(_) => ErrorCategory::Network,
            Self::InvalidResponseError { .. } => ErrorCategory::Protocol,
            Self::ListNotFoundError { .. } => ErrorCategory::Domain,
            Self::UnexpectedStatusError { .. } => ErrorCategory::Remote,
        }
    }

    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Cannot read the configuration file: {}", e),
            Self::ConfigParseError { message } => {
                format!("The configuration file is not valid: {}", message)
            }
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                self.to_string()
            }
            Self::ApiError(e) => format!("Could not reach the Trello API: {}", e),
            Self::InvalidResponseError { status, .. } => {
                format!("Trello returned an unexpected response (HTTP {})", status)
            }
            Self::ListNotFoundError { list_name } => {
                format!("No open list named `{}` on the board", list_name)
            }
            Self::UnexpectedStatusError { status } => {
                format!("Trello rejected the card (HTTP {})", status)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check the --config path and file permissions",
            Self::ConfigParseError { .. } => {
                "The file must define board_id, api_key, token and list_name as strings"
            }
            Self::MissingConfigError { .. } => "Add the missing field to the configuration file",
            Self::InvalidConfigValueError { .. } => "Use an absolute http or https URL",
            Self::ApiError(_) => "Check your network connection and try again",
            Self::InvalidResponseError { status, .. } if *status == 401 || *status == 403 => {
                "Check that api_key and token are valid"
            }
            Self::InvalidResponseError { .. } => "Check that board_id refers to an existing board",
            Self::ListNotFoundError { .. } => {
                "List names match exactly, including case; check list_name"
            }
            Self::UnexpectedStatusError { .. } => {
                "Check that the token has write access to the board"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrelloCardError>;
