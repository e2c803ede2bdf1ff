pub mod registry_state;
pub mod parent_asset;

pub use registry_state::*;
pub use parent_asset::*;
