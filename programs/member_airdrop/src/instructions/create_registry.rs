use anchor_lang::prelude::*;

use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a member registry
 *
 * Initializes an empty registry owned by the signing administrator. Each
 * administrator key gets exactly one registry (PDA derived from the key), and
 * the full member capacity is allocated up front so later mutations never
 * need to resize the account.
 *
 * Access Control: any signer; the signer becomes the registry authority
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateRegistry<'info> {
    /// The registry account (PDA)
    /// - Stores the authority and the ordered member list
    /// - Derived from: ["registry", authority]
    #[account(
        init,
        payer = authority,
        space = Registry::SPACE,
        seeds = [REGISTRY_SEED.as_bytes(), authority.key().as_ref()],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// The administrator creating (and paying for) the registry
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.bump = ctx.bumps.registry;
    registry.authority = ctx.accounts.authority.key();
    registry.members = Vec::new();

    emit_cpi!(RegistryCreated {
        registry: registry.key(),
        authority: registry.authority,
    });

    Ok(())
}
