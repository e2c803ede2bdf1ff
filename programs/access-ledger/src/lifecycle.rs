//! State transitions of the ledger.
//!
//! Every function here runs all of its checks before the first write, so a
//! rejected call leaves the passed-in state exactly as it was.

use anchor_lang::prelude::*;
use parent_registry::state::ParentAsset;

use crate::errors::LedgerError;
use crate::state::*;

/// Outcome of a successful grant
#[derive(Debug, PartialEq, Eq)]
pub struct Grant {
    /// The freshly minted record (bump left for the caller to fill in)
    pub record: AccessTokenRecord,
    /// Token that was current for the parent before this grant
    pub superseded: Option<u64>,
}

/// Require `caller` to be the registry's current owner of `parent_id`.
///
/// Registry failures such as `UnknownParent` are returned as-is.
pub fn authorize(caller: &Pubkey, parent_asset: &AccountInfo, parent_id: u64) -> Result<()> {
    let owner = ParentAsset::owner_of(parent_asset, parent_id)?;
    if *caller != owner {
        msg!("Caller {} does not own parent asset {}", caller, parent_id);
        return err!(LedgerError::NotAuthorized);
    }
    Ok(())
}

/// Mint a new access token for `parent_id`, superseding whatever the parent
/// link currently points at.
///
/// `previous` must be the record the link points at when the link is set.
pub fn issue(
    ledger_state: &mut LedgerState,
    parent_link: &mut ParentLink,
    previous: Option<&mut AccessTokenRecord>,
    parent_id: u64,
    holder: Pubkey,
    created_ts: i64,
) -> Result<Grant> {
    let previous = match parent_link.current_token_id {
        Some(current_id) => {
            let record = previous.ok_or(LedgerError::PreviousTokenMismatch)?;
            require!(
                record.id == current_id && record.parent_id == parent_id,
                LedgerError::PreviousTokenMismatch
            );
            Some(record)
        }
        None => None,
    };

    let token_id = ledger_state.allocate_id()?;

    if let Some(record) = previous {
        record.supersede();
    }
    parent_link.parent_id = parent_id;
    let superseded = parent_link.relink(token_id);

    Ok(Grant {
        record: AccessTokenRecord::new(token_id, parent_id, holder, created_ts),
        superseded,
    })
}

/// Revoke the token `parent_link` points at.
///
/// `current` is the record loaded from the account the caller supplied; it
/// must be the linked one. Returns the revoked record for write-back.
pub fn revoke(
    parent_link: Option<&ParentLink>,
    current: Option<AccessTokenRecord>,
) -> Result<AccessTokenRecord> {
    let token_id = parent_link
        .and_then(|link| link.current_token_id)
        .ok_or(LedgerError::NoActiveToken)?;
    let mut record = current.ok_or(LedgerError::TokenAccountMismatch)?;
    require!(record.id == token_id, LedgerError::TokenAccountMismatch);

    record.revoke()?;
    Ok(record)
}

/// The only outcome of any attempt to move access tokens to another holder.
///
/// Holds for every id, minted or not, and every destination. No ledger state
/// is read.
pub fn reject_transfer(to: &Pubkey, token_ids: &[u64]) -> Result<()> {
    msg!("Transfer of access tokens {:?} to {} rejected", token_ids, to);
    err!(LedgerError::TransferNotAllowed)
}
