use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for claiming an airdrop entitlement
 *
 * The claimant proves that (claimant, amount) is part of the distributor's
 * merkle commitment and receives the amount from the vault. The ClaimStatus
 * PDA is created on first use and its flag makes the claim at-most-once.
 *
 * Access Control: any claimant with a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The distributor being claimed from
    /// - Will be modified to update total_claimed
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Claim flag for this claimant
    /// - Derived from: ["claim", distributor_key, claimant_key]
    /// - Created on first claim; the flag transition is one-way
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimStatus::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the payout funds
    /// - Derived from: ["vault", distributor_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimant's token account that receives the tokens
    #[account(
        mut,
        token::mint = distributor.token_mint,
        token::authority = claimant,
        token::token_program = token_program,
    )]
    pub claimant_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, needed for the checked transfer
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == distributor.token_mint @ MemberAirdropError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The claimant
    /// - Must sign; also pays the ClaimStatus rent on first claim
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Committed amount for the signing claimant
 * @param proof - Sibling hashes from leaf to root, leaf level first
 *
 * Ordering is deliberate:
 * 1. Proof verification first, so a bad proof is always InvalidProof even if
 *    the leaf happens to be claimed already
 * 2. AlreadyClaimed on the one-way flag
 * 3. Flag set and totals updated before the transfer CPI (check-effects-
 *    interactions); a failed transfer aborts the transaction so the flag
 *    never survives an unpaid claim
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, proof: Vec<[u8; 32]>) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    let claim_status = &mut ctx.accounts.claim_status;
    let claimant = &ctx.accounts.claimant;

    // ===== VALIDATION PHASE =====

    distributor.verify_claim(&claimant.key(), amount, &proof)?;

    // ===== EFFECTS PHASE =====

    claim_status.mark_claimed()?;

    require!(
        ctx.accounts.token_vault.amount >= amount,
        MemberAirdropError::InsufficientVaultBalance
    );

    let new_total_claimed = distributor
        .total_claimed
        .checked_add(amount)
        .ok_or(MemberAirdropError::ArithmeticOverflow)?;
    distributor.total_claimed = new_total_claimed;

    let nonce_bytes = distributor.nonce.to_le_bytes();
    let token_mint_key = distributor.token_mint;
    let owner_key = distributor.owner;
    let distributor_bump = distributor.bump;
    let distributor_key = distributor.key();

    // ===== INTERACTIONS PHASE =====

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        token_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    transfer_token(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimant_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        Some(signer),
    )?;

    emit_cpi!(Claimed {
        distributor: distributor_key,
        claimant: claimant.key(),
        amount,
    });

    Ok(())
}
