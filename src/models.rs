use serde::{Deserialize, Serialize};

/// A registered player.
///
/// Fields absent from a request body decode to their zero value. Keys are
/// matched case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: String,   // caller-supplied key, never generated
    pub name: String, // display name
    pub score: i64,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, score: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score,
        }
    }
}

/// Body of `/updateScore`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateScoreRequest {
    pub id: String,
    pub score: i64,
}
