pub mod claim_state;
pub mod distributor_state;
pub mod nonce_state;
pub mod registry_state;

pub use claim_state::*;
pub use distributor_state::*;
pub use nonce_state::*;
pub use registry_state::*;
