pub mod client;
pub mod engine;

pub use crate::domain::model::{BoardLists, CreatedCard, NewCard, TrelloList};
pub use crate::domain::ports::BoardApi;
pub use crate::utils::error::Result;
