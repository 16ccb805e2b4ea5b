use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// 看板上的一個清單，只取用 id 與 name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrelloList {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// `GET /boards/{id}` 的回應中我們關心的部分
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardLists {
    #[serde(default)]
    pub lists: Vec<TrelloList>,
}

impl BoardLists {
    /// 依回應順序找出第一個名稱完全相同的清單
    pub fn find_list_id(&self, list_name: &str) -> Option<&str> {
        self.lists
            .iter()
            .find(|list| list.name == list_name)
            .map(|list| list.id.as_str())
    }
}

/// `POST /cards` 的表單內容
#[derive(Debug, Clone, Serialize)]
pub struct NewCard<'a> {
    pub name: &'a str,
    pub pos: &'a str,
    #[serde(rename = "idList")]
    pub id_list: &'a str,
    pub key: &'a str,
    pub token: &'a str,
}

impl<'a> NewCard<'a> {
    pub const POSITION_BOTTOM: &'static str = "bottom";

    pub fn at_bottom(name: &'a str, id_list: &'a str, key: &'a str, token: &'a str) -> Self {
        Self {
            name,
            pos: Self::POSITION_BOTTOM,
            id_list,
            key,
            token,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedCard {
    pub name: String,
    pub list_id: String,
}

impl CreatedCard {
    pub fn confirmation(&self) -> String {
        format!("Created {}", self.name)
    }

    /// 成功時 stdout 上唯一的一行
    pub fn write_confirmation<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.confirmation())?;
        out.flush()
    }
}
