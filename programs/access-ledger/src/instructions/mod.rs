pub mod initialize_ledger;
pub mod create_access_token;
pub mod revoke_access;
pub mod is_valid;
pub mod describe;
pub mod holder_of;
pub mod transfer;

pub use initialize_ledger::*;
pub use create_access_token::*;
pub use revoke_access::*;
pub use is_valid::*;
pub use describe::*;
pub use holder_of::*;
pub use transfer::*;
