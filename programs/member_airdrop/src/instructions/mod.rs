pub mod can_claim;
pub mod claim;
pub mod create_distributor;
pub mod create_registry;
pub mod manage_members;
pub mod registry_views;
pub mod withdraw;

pub use can_claim::*;
pub use claim::*;
pub use create_distributor::*;
pub use create_registry::*;
pub use manage_members::*;
pub use registry_views::*;
pub use withdraw::*;
