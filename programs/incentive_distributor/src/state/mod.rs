pub mod claim_state;
pub mod config_state;
pub mod distribution_state;
pub mod nonce_state;
pub mod verification_key_state;
pub mod whitelist_state;

pub use claim_state::*;
pub use config_state::*;
pub use distribution_state::*;
pub use nonce_state::*;
pub use verification_key_state::*;
pub use whitelist_state::*;
