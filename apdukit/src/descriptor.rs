// apdukit/src/descriptor.rs

//! Minimal session descriptor exchanged with the save/load collaborator.
//! Interchange format: `{ "device": <string>, "card_type": <string> }`.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Saved device and card-type selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Full name of the selected reader.
    pub device: String,
    /// Card type by its canonical name (e.g. `"Payment Card"`).
    pub card_type: String,
}

impl SessionDescriptor {
    /// Serialize to the JSON interchange form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the JSON interchange form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
