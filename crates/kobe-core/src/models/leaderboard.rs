use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// First name token of the display name.
    pub name: String,
    pub id: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub email: String,
    /// `"0"` for users without tasks, otherwise two decimal places.
    pub kobe_score: String,
    /// 1-based; tied scores share a position.
    pub position: u32,
}
