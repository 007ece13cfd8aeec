use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::constants::*;

/**
 * Account context for reading the distribution count
 *
 * Read-only; the value is returned through return data.
 */
#[derive(Accounts)]
pub struct DistributionCount<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, IncentiveConfig>,
}

/**
 * Account context for reading a distribution by creation-order index
 *
 * The slot is optional so an index past the end reports IndexOutOfRange
 * instead of a missing account.
 */
#[derive(Accounts)]
#[instruction(index: u64)]
pub struct DistributionAtIndex<'info> {
    #[account(
        seeds = [CONFIG_SEED.as_bytes()],
        bump = config.bump
    )]
    pub config: Account<'info, IncentiveConfig>,

    /// Creation-order slot
    /// - Derived from: ["distribution_slot", index]
    #[account(
        seeds = [DISTRIBUTION_SLOT_SEED.as_bytes(), index.to_le_bytes().as_ref()],
        bump
    )]
    pub distribution_slot: Option<Account<'info, DistributionSlot>>,

    /// Distribution referenced by the slot
    /// - Checked against the slot in the handler
    pub distribution: Option<Account<'info, Distribution>>,
}

pub fn handle_get_distribution_count(ctx: Context<DistributionCount>) -> Result<u64> {
    Ok(ctx.accounts.config.distribution_count)
}

pub fn handle_get_distribution_id(ctx: Context<DistributionAtIndex>, index: u64) -> Result<[u8; 32]> {
    let slot = resolve_slot(&ctx.accounts.config, &ctx.accounts.distribution_slot, index)?;
    Ok(slot.distribution_id)
}

pub fn handle_get_distribution_pool(ctx: Context<DistributionAtIndex>, index: u64) -> Result<Pubkey> {
    let slot = resolve_slot(&ctx.accounts.config, &ctx.accounts.distribution_slot, index)?;
    let distribution = ctx
        .accounts
        .distribution
        .as_ref()
        .filter(|distribution| distribution.key() == slot.distribution)
        .ok_or(IncentiveError::UnknownDistribution)?;
    Ok(distribution.pool)
}

fn resolve_slot<'a, 'info>(
    config: &IncentiveConfig,
    slot: &'a Option<Account<'info, DistributionSlot>>,
    index: u64,
) -> Result<&'a Account<'info, DistributionSlot>> {
    require!(index < config.distribution_count, IncentiveError::IndexOutOfRange);
    slot.as_ref()
        .ok_or_else(|| error!(IncentiveError::IndexOutOfRange))
}
