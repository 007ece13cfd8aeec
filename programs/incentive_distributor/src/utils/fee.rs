use crate::constants::FEE_BASE;

/// Splits `amount` into `(fee, net)` at `fee_rate` (base 1e9)
///
/// The product is taken in 128 bits so any u64 amount is safe. Callers keep
/// `fee_rate < FEE_BASE`, which bounds the fee by the amount.
pub fn split_fee(amount: u64, fee_rate: u64) -> (u64, u64) {
    let fee = (amount as u128 * fee_rate as u128 / FEE_BASE as u128) as u64;
    (fee, amount - fee)
}
