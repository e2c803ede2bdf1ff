use anchor_lang::prelude::*;
use base64::{engine::general_purpose, Engine as _};

pub const DATA_URI_PREFIX: &str = "data:text/json;base64,";

/// What a wallet or marketplace gets to display for an access token
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayPayload {
    pub valid: bool,
}

impl DisplayPayload {
    pub fn new(valid: bool) -> Self {
        Self { valid }
    }

    pub fn to_json(&self) -> String {
        format!("{{\"valid\": {}}}", self.valid)
    }

    /// `data:text/json;base64,` followed by the padded base64 of the JSON
    pub fn to_data_uri(&self) -> String {
        format!("{}{}", DATA_URI_PREFIX, general_purpose::STANDARD.encode(self.to_json()))
    }
}
