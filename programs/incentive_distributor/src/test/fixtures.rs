use anchor_lang::prelude::*;

use crate::state::*;
use crate::utils::*;

pub const BLOCKS_PER_EPOCH: u64 = 100;
/// 1% at base 1e9
pub const ONE_PERCENT_FEE: u64 = 10_000_000;

/// 1000 tokens over 10 epochs at 1% fee: 99 per epoch
pub fn scenario_distribution(creator: Pubkey, pool: Pubkey, reward_mint: Pubkey) -> Distribution {
    Distribution {
        bump: 255,
        id: distribution_id(&creator, 0),
        index: 0,
        nonce: 0,
        creator,
        pool,
        reward_mint,
        amount_per_epoch: 99,
        start_block: 1_000,
        end_block: 2_000,
    }
}

/// Proof output a well-behaved circuit would commit for `user` against `distribution`
pub fn matching_output(
    distribution: &Distribution,
    user: &Pubkey,
    start_block: u64,
    end_block: u64,
    total_amount: u64,
) -> ProofOutput {
    ProofOutput {
        user: evm_address(user),
        pool: evm_address(&distribution.pool),
        start_block,
        end_block,
        distribution_id: distribution.id,
        reward_token: evm_address(&distribution.reward_mint),
        amount_per_epoch: Uint248::from_u64(distribution.amount_per_epoch),
        total_amount: Uint248::from_u64(total_amount),
    }
}
