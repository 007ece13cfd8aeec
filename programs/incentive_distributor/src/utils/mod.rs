pub mod address;
pub mod epoch;
pub mod fee;
pub mod proof_output;
pub mod token;

pub use address::*;
pub use epoch::*;
pub use fee::*;
pub use proof_output::*;
pub use token::*;
