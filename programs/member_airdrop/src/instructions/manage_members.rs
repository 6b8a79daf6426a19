use anchor_lang::prelude::*;

use crate::error::MemberAirdropError;
use crate::event::*;
use crate::state::*;

/**
 * Account context shared by the registry mutations
 * (create_member, update_member_rate, remove_member)
 *
 * Access Control: only the registry authority can mutate the member set
 */
#[event_cpi]
#[derive(Accounts)]
pub struct MutateRegistry<'info> {
    /// The registry account to mutate
    #[account(mut)]
    pub registry: Account<'info, Registry>,

    /// The registry administrator
    /// - Must match the authority stored in the registry state
    #[account(constraint = authority.key() == registry.authority @ MemberAirdropError::Unauthorized)]
    pub authority: Signer<'info>,
}

/**
 * Registers a new member
 *
 * @param member - Address to register
 * @param entry_time - Timestamp supplied by the administrator, stored verbatim (not validated against the clock)
 * @param name - Display label, at most MAX_NAME_LEN bytes
 * @param rate - Entitlement weight
 *
 * Fails with InvalidAddress for the default pubkey, AlreadyRegistered for a
 * duplicate, NameTooLong / MemberLimitReached at the capacity bounds. On
 * success the record is appended, so the new member takes the last (most
 * diluted) entitlement position.
 */
pub fn handle_create_member(
    ctx: Context<MutateRegistry>,
    member: Pubkey,
    entry_time: i64,
    name: String,
    rate: u64,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.register(member, entry_time, name, rate)?;

    emit_cpi!(MemberCreated {
        registry: registry.key(),
        member,
        entry_time,
        rate,
    });

    Ok(())
}

/// Replaces only the rate of an existing member.
pub fn handle_update_member_rate(
    ctx: Context<MutateRegistry>,
    member: Pubkey,
    new_rate: u64,
) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.update_rate(member, new_rate)?;

    emit_cpi!(MemberRateUpdated {
        registry: registry.key(),
        member,
        new_rate,
    });

    Ok(())
}

/**
 * Removes a member
 *
 * Fails with ProtectedAddress when the target is the registry authority; the
 * check runs before the existence check so the authority is rejected with
 * ProtectedAddress regardless of registration state. Removal swaps the last
 * record into the vacated slot, so list order changes for every observer.
 */
pub fn handle_remove_member(ctx: Context<MutateRegistry>, member: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.deregister(member)?;

    emit_cpi!(MemberRemoved {
        registry: registry.key(),
        member,
    });

    Ok(())
}
