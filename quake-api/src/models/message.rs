use std::fmt::Display;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Plain `{"message": ...}` body used by the index route and id misses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn earthquake_not_found(id: impl Display) -> Self {
        Self::new(format!("Earthquake {} not found.", id))
    }
}
