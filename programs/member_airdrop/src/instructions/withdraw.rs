use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{close_token_account_with_pda, transfer_token};

/**
 * Account context for withdrawing remaining tokens
 *
 * Ends the campaign: sweeps whatever is left in the vault back to the owner
 * and closes both the vault and the distributor account, reclaiming rent.
 * ClaimStatus accounts are left in place so a spent claim can never be
 * resurrected.
 *
 * Access Control: only the owner can withdraw
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The distributor to drain and close
    /// - Rent is returned to the owner
    #[account(
        mut,
        close = owner
    )]
    pub distributor: Account<'info, Distributor>,

    /// Token vault containing the remaining tokens
    /// - Derived from: ["vault", distributor_key]
    /// - Will be emptied and closed
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account that receives the remaining tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, needed for the checked transfer
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ MemberAirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The distributor owner
    #[account(
        mut,
        constraint = owner.key() == distributor.owner @ MemberAirdropError::OnlyOwner
    )]
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let distributor = &ctx.accounts.distributor;

    let remaining = ctx.accounts.token_vault.amount;

    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    if remaining > 0 {
        transfer_token(
            ctx.accounts.distributor.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.owner_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            remaining,
            ctx.accounts.token_mint.decimals,
            Some(signer),
        )?;
    }

    // Close the vault; the distributor account itself is closed by the
    // close = owner constraint
    close_token_account_with_pda(
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer,
    )?;

    emit_cpi!(TokensWithdrawn {
        distributor: distributor_key,
        owner: owner_key,
        amount_withdrawn: remaining,
    });

    Ok(())
}
