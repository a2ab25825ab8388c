use serde::{Deserialize, Serialize};

/// Query parameters for a single song lookup.
#[derive(Debug, Deserialize)]
pub struct MusicQuery {
    pub artist: String,
    pub song: Option<String>,
}

/// Response body for the seeding endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedResponse {
    pub inserted: usize,
}
