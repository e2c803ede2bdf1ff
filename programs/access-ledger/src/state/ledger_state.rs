use anchor_lang::prelude::*;
use crate::errors::LedgerError;

/// Ledger State - the access token id sequence
#[account]
pub struct LedgerState {
    /// Id handed to the next access token (starts at 1, never reused)
    pub next_token_id: u64,

    /// Total number of access tokens minted
    pub total_minted: u64,

    /// Timestamp when created
    pub created_ts: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl LedgerState {
    /// Discriminator (8) + u64 (8) + u64 (8) + i64 (8) + u8 (1)
    pub const LEN: usize = 8 + 8 + 8 + 8 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"ledger_state";

    pub const FIRST_TOKEN_ID: u64 = 1;

    /// Hand out the next token id and advance the sequence
    pub fn allocate_id(&mut self) -> Result<u64> {
        let token_id = self.next_token_id;

        self.next_token_id = token_id
            .checked_add(1)
            .ok_or(LedgerError::NumericalOverflow)?;
        self.total_minted = self
            .total_minted
            .checked_add(1)
            .ok_or(LedgerError::NumericalOverflow)?;

        Ok(token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> LedgerState {
        LedgerState {
            next_token_id: LedgerState::FIRST_TOKEN_ID,
            total_minted: 0,
            created_ts: 0,
            bump: 254,
        }
    }

    #[test]
    fn sequence_starts_at_one() {
        let mut state = fresh();

        assert_eq!(state.allocate_id().unwrap(), 1);
        assert_eq!(state.allocate_id().unwrap(), 2);
        assert_eq!(state.next_token_id, 3);
        assert_eq!(state.total_minted, 2);
    }

    #[test]
    fn overflow_leaves_sequence_untouched() {
        let mut state = fresh();
        state.next_token_id = u64::MAX;

        let err = state.allocate_id().unwrap_err();
        assert_eq!(err, LedgerError::NumericalOverflow.into());
        assert_eq!(state.next_token_id, u64::MAX);
        assert_eq!(state.total_minted, 0);
    }
}
