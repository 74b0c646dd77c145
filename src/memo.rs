use serde::{Deserialize, Serialize};

/// A single note record as returned by the memo service. Only
/// `createTime` and `content` are interpreted; every other field is
/// carried through untouched. `createTime` is opaque to us, the API is
/// asked to sort by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    #[serde(rename = "createTime")]
    pub create_time: String,
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
impl Memo {
    pub fn new(create_time: &str, content: &str) -> Self {
        Self {
            create_time: create_time.to_string(),
            content: content.to_string(),
            extra: serde_json::Map::new(),
        }
    }
}
