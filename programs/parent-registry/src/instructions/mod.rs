pub mod initialize_registry;
pub mod mint_parent;
pub mod transfer_parent;
pub mod owner_of;

pub use initialize_registry::*;
pub use mint_parent::*;
pub use transfer_parent::*;
pub use owner_of::*;
