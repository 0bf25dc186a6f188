use serde::{Deserialize, Serialize};

/// A stored editorial blurb.
///
/// The id is caller-supplied and uniqueness is not enforced; `type` is
/// "dyk" or "otd" by convention only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlurbRecord {
    pub id: i64,

    #[serde(rename = "type")]
    pub blurb_type: String,

    pub content: String,

    pub source_url: String,

    #[serde(default)]
    pub verified: bool,
}
