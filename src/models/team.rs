use serde::{Deserialize, Serialize};

use super::geo::LatLon;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeamStatus {
    Available,
    EnRoute,
}

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Available => "available",
            TeamStatus::EnRoute => "en_route",
        }
    }
}

/// A response team the command center can dispatch. The ETA is free text as
/// supplied by dispatch, not a computed duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTeam {
    pub id: String,
    pub name: String,
    pub status: TeamStatus,
    pub location: LatLon,
    pub eta: String,
}
