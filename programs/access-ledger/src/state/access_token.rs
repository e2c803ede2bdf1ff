use anchor_lang::prelude::*;
use crate::errors::LedgerError;

/// Access Token Record - one per minted access token, never closed
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct AccessTokenRecord {
    /// Sequence id
    pub id: u64,

    /// Registry id of the parent asset this token derives from
    pub parent_id: u64,

    /// Address the token was granted to. Never reassigned.
    pub holder: Pubkey,

    /// Lifecycle state
    pub status: TokenStatus,

    /// Timestamp when created
    pub created_ts: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl AccessTokenRecord {
    /// Discriminator (8) + u64 (8) + u64 (8) + Pubkey (32)
    /// + TokenStatus (1) + i64 (8) + u8 (1)
    pub const LEN: usize = 8 + 8 + 8 + 32 + 1 + 8 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"access_token";

    pub fn new(id: u64, parent_id: u64, holder: Pubkey, created_ts: i64) -> Self {
        Self {
            id,
            parent_id,
            holder,
            status: TokenStatus::Active,
            created_ts,
            bump: 0,
        }
    }

    /// Address of the record account for `token_id`
    pub fn find_address(token_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[Self::SEED_PREFIX, token_id.to_le_bytes().as_ref()],
            &crate::ID,
        )
    }

    /// The record stored in `info`, if it is an initialized ledger record
    pub fn load(info: &AccountInfo) -> Option<Self> {
        super::load_owned(info)
    }

    /// Write the record back into `info`
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }

    /// Set once the token has left `Active`, either way
    pub fn is_revoked(&self) -> bool {
        self.status != TokenStatus::Active
    }

    /// `Active -> Revoked`, triggered by the parent owner
    pub fn revoke(&mut self) -> Result<()> {
        require!(self.status == TokenStatus::Active, LedgerError::NoActiveToken);
        self.status = TokenStatus::Revoked;
        Ok(())
    }

    /// `Active -> Superseded`, triggered by a newer grant on the same parent.
    /// A token already revoked stays revoked.
    pub fn supersede(&mut self) {
        if self.status == TokenStatus::Active {
            self.status = TokenStatus::Superseded;
        }
    }
}

/// Access token lifecycle. Transitions only ever leave `Active`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenStatus {
    /// Granted and not yet replaced or revoked
    Active,
    /// Explicitly revoked by the parent owner
    Revoked,
    /// Replaced by a newer grant on the same parent
    Superseded,
}
