use anchor_lang::prelude::*;

#[event]
pub struct AccessTokenCreated {
    pub token_id: u64,
    pub parent_id: u64,
    pub holder: Pubkey,
    pub granted_by: Pubkey,
}

/// A newer grant on the same parent replaced this token
#[event]
pub struct AccessTokenSuperseded {
    pub token_id: u64,
    pub parent_id: u64,
    pub superseded_by: u64,
}

#[event]
pub struct AccessRevoked {
    pub token_id: u64,
    pub parent_id: u64,
    pub revoked_by: Pubkey,
}
