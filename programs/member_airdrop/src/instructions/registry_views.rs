use anchor_lang::prelude::*;

use crate::error::MemberAirdropError;
use crate::state::*;

/**
 * Account context for administrator reads
 * (get_member, get_airdrop_amounts)
 *
 * Access Control: registry authority only
 */
#[derive(Accounts)]
pub struct ReadRegistryAsAuthority<'info> {
    pub registry: Account<'info, Registry>,

    /// The registry administrator
    #[account(constraint = authority.key() == registry.authority @ MemberAirdropError::Unauthorized)]
    pub authority: Signer<'info>,
}

/// Account context for the self-service read (get_current_member). Any signer
/// may call; the result is the caller's own record.
#[derive(Accounts)]
pub struct ReadRegistryAsMember<'info> {
    pub registry: Account<'info, Registry>,

    pub caller: Signer<'info>,
}

/// Account context for unrestricted reads (get_registered_addresses).
#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    pub registry: Account<'info, Registry>,
}

pub fn handle_get_member(
    ctx: Context<ReadRegistryAsAuthority>,
    member: Pubkey,
) -> Result<MemberRecord> {
    ctx.accounts.registry.record(&member)
}

pub fn handle_get_current_member(ctx: Context<ReadRegistryAsMember>) -> Result<MemberRecord> {
    ctx.accounts
        .registry
        .record_for(&ctx.accounts.caller.key())
}

pub fn handle_get_registered_addresses(ctx: Context<ReadRegistry>) -> Result<Vec<Pubkey>> {
    Ok(ctx.accounts.registry.registered_addresses())
}

/// Recomputes the entitlement list from the live registry. Empty registry
/// yields an empty list.
pub fn handle_get_airdrop_amounts(
    ctx: Context<ReadRegistryAsAuthority>,
) -> Result<Vec<AirdropEntry>> {
    Ok(ctx.accounts.registry.airdrop_amounts())
}
