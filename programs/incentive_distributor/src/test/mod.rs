pub mod fixtures;
pub mod test_math;
pub mod test_proof_output;
pub mod test_settlement;
