//! The validity predicate.
//!
//! Nothing here is cached: ownership is read from the registry account on
//! every call, so a parent changing hands invalidates its token immediately.

use anchor_lang::prelude::*;
use parent_registry::state::ParentAsset;

use crate::state::*;

/// Evaluate validity from already-loaded state.
///
/// `parent_owner` is only consulted once the ledger-side conditions hold;
/// `None` from it (unknown parent) counts as a mismatch.
pub fn evaluate(
    token_id: u64,
    record: Option<&AccessTokenRecord>,
    parent_link: Option<&ParentLink>,
    parent_owner: impl FnOnce(u64) -> Option<Pubkey>,
) -> bool {
    let Some(record) = record else {
        return false;
    };
    if record.id != token_id || record.is_revoked() {
        return false;
    }
    let linked = parent_link
        .is_some_and(|link| link.parent_id == record.parent_id && link.is_current(token_id));
    if !linked {
        return false;
    }
    parent_owner(record.parent_id) == Some(record.holder)
}

/// Evaluate validity straight from the accounts supplied with a query.
///
/// Any account that is missing, uninitialized or belongs to another id reads
/// as "not valid".
pub fn check(
    token_id: u64,
    access_token: &AccountInfo,
    parent_link: &AccountInfo,
    parent_asset: &AccountInfo,
) -> bool {
    let record = AccessTokenRecord::load(access_token);
    let link = ParentLink::load(parent_link);

    evaluate(token_id, record.as_ref(), link.as_ref(), |parent_id| {
        ParentAsset::owner_of(parent_asset, parent_id).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        holder: Pubkey,
        record: AccessTokenRecord,
        link: ParentLink,
    }

    fn fixture() -> Fixture {
        let holder = Pubkey::new_unique();
        let mut link = ParentLink::new(1, 255);
        link.relink(1);
        Fixture {
            holder,
            record: AccessTokenRecord::new(1, 1, holder, 0),
            link,
        }
    }

    #[test]
    fn active_linked_and_owned_is_valid() {
        let f = fixture();
        assert!(evaluate(1, Some(&f.record), Some(&f.link), |_| Some(f.holder)));
    }

    #[test]
    fn missing_record_is_invalid() {
        let f = fixture();
        assert!(!evaluate(0, None, Some(&f.link), |_| Some(f.holder)));
        assert!(!evaluate(2, Some(&f.record), Some(&f.link), |_| Some(f.holder)));
    }

    #[test]
    fn revoked_record_is_invalid() {
        let mut f = fixture();
        f.record.revoke().unwrap();
        assert!(!evaluate(1, Some(&f.record), Some(&f.link), |_| Some(f.holder)));
    }

    #[test]
    fn unlinked_record_is_invalid() {
        let mut f = fixture();
        f.link.relink(2);
        assert!(!evaluate(1, Some(&f.record), Some(&f.link), |_| Some(f.holder)));
        assert!(!evaluate(1, Some(&f.record), None, |_| Some(f.holder)));

        let other_parent = ParentLink {
            parent_id: 2,
            current_token_id: Some(1),
            bump: 255,
        };
        assert!(!evaluate(1, Some(&f.record), Some(&other_parent), |_| Some(f.holder)));
    }

    #[test]
    fn ownership_mismatch_is_invalid() {
        let f = fixture();
        assert!(!evaluate(1, Some(&f.record), Some(&f.link), |_| Some(Pubkey::new_unique())));
        assert!(!evaluate(1, Some(&f.record), Some(&f.link), |_| None));
    }

    #[test]
    fn registry_is_not_read_for_dead_tokens() {
        let mut f = fixture();
        f.record.supersede();
        let valid = evaluate(1, Some(&f.record), Some(&f.link), |_| {
            panic!("registry read for a superseded token")
        });
        assert!(!valid);
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let f = fixture();
        let first = evaluate(1, Some(&f.record), Some(&f.link), |_| Some(f.holder));
        let second = evaluate(1, Some(&f.record), Some(&f.link), |_| Some(f.holder));
        assert_eq!(first, second);
    }
}
