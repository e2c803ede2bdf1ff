pub mod ledger_state;
pub mod access_token;
pub mod parent_link;

pub use ledger_state::*;
pub use access_token::*;
pub use parent_link::*;

use anchor_lang::prelude::*;

/// Deserialize a ledger-owned account, or `None` when the account was never
/// initialized by this program or holds another account type.
pub(crate) fn load_owned<T: AccountDeserialize>(info: &AccountInfo) -> Option<T> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return None;
    }
    let data = info.try_borrow_data().ok()?;
    T::try_deserialize(&mut &data[..]).ok()
}
