use anchor_lang::prelude::*;

#[event]
pub struct ParentMinted {
    pub parent_id: u64,
    pub owner: Pubkey,
}

/// Emitted on every ownership change. Consumers poll `owner_of` rather than
/// relying on this being delivered.
#[event]
pub struct ParentTransferred {
    pub parent_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}
