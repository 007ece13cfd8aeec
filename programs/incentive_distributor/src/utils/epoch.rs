use crate::error::IncentiveError;

/// Number of whole epochs in `[start_block, end_block)`
///
/// Fails with `InvalidEpochAlignment` unless the range is non-empty and an exact
/// multiple of `blocks_per_epoch`.
pub fn epoch_count(
    start_block: u64,
    end_block: u64,
    blocks_per_epoch: u64,
) -> Result<u64, IncentiveError> {
    if end_block <= start_block || blocks_per_epoch == 0 {
        return Err(IncentiveError::InvalidEpochAlignment);
    }
    let span = end_block - start_block;
    if span % blocks_per_epoch != 0 {
        return Err(IncentiveError::InvalidEpochAlignment);
    }
    Ok(span / blocks_per_epoch)
}

/// Per-epoch share of a post-fee deposit
///
/// Rounds down. The remainder stays in the vault and is never distributed.
pub fn derive_per_epoch_amount(
    net_amount: u64,
    start_block: u64,
    end_block: u64,
    blocks_per_epoch: u64,
) -> Result<u64, IncentiveError> {
    let epochs = epoch_count(start_block, end_block, blocks_per_epoch)?;
    Ok(net_amount / epochs)
}
