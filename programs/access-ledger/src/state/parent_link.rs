use anchor_lang::prelude::*;

/// Parent Link - the most recent access token minted for a parent asset.
///
/// Only ever moves forward to a newer token; revocation leaves it in place.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct ParentLink {
    /// Registry id of the parent asset
    pub parent_id: u64,

    /// Most recently minted token for this parent, `None` before the first
    pub current_token_id: Option<u64>,

    /// PDA bump seed
    pub bump: u8,
}

impl ParentLink {
    /// Discriminator (8) + u64 (8) + Option<u64> (1 + 8) + u8 (1)
    pub const LEN: usize = 8 + 8 + 9 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"parent_link";

    pub fn new(parent_id: u64, bump: u8) -> Self {
        Self {
            parent_id,
            current_token_id: None,
            bump,
        }
    }

    /// Address of the link account for `parent_id`
    pub fn find_address(parent_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, parent_id.to_le_bytes().as_ref()],
            &crate::ID,
        )
    }

    /// The link stored in `info`, if it is an initialized ledger link
    pub fn load(info: &AccountInfo) -> Option<Self> {
        super::load_owned(info)
    }

    /// Point the link at `token_id`, returning the token it replaced
    pub fn relink(&mut self, token_id: u64) -> Option<u64> {
        self.current_token_id.replace(token_id)
    }

    pub fn is_current(&self, token_id: u64) -> bool {
        self.current_token_id == Some(token_id)
    }
}
