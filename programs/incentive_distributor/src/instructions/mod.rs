pub mod initialize_config;
pub mod update_config;
pub mod set_token_whitelist;
pub mod verification_key;
pub mod create_distribution;
pub mod on_proof_verified;
pub mod query;

pub use initialize_config::*;
pub use update_config::*;
pub use set_token_whitelist::*;
pub use verification_key::*;
pub use create_distribution::*;
pub use on_proof_verified::*;
pub use query::*;
