use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;

/**
 * Account context for creating a new distributor
 *
 * This instruction initializes one airdrop campaign with automatic nonce
 * management:
 * - Creates or updates a nonce state PDA tracking the owner's campaign count
 * - Creates the distributor PDA with the auto-incremented nonce
 * - Creates a token vault PDA and deposits the payout funds from the owner
 * - Stores the merkle root the campaign is committed to; the root is
 *   immutable from this point on
 *
 * Access Control: only the owner can create a distributor
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateDistributor<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this owner
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The main distributor account (PDA)
    /// - Derived from: ["distributor", token_mint, owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = Distributor::LEN,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            token_mint.key().as_ref(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// Token vault account (PDA) that holds the payout funds
    /// - Controlled by the distributor PDA as token authority
    /// - Derived from: ["vault", distributor_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint of the distributed token
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Owner's token account containing the funds to be deposited
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The owner of the distributor
    /// - Funds the vault and can withdraw what remains
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new distributor committed to a fixed merkle root
 *
 * @param ctx - The account context containing all required accounts
 * @param initial_total_amount - Tokens deposited into the vault
 * @param merkle_root - Root of the merkle tree of (claimant, amount) leaves
 */
pub fn handle_create_distributor(
    ctx: Context<CreateDistributor>,
    initial_total_amount: u64,
    merkle_root: [u8; 32],
) -> Result<()> {
    require!(
        initial_total_amount > 0,
        MemberAirdropError::InvalidAmount
    );

    // An all-zeros root would commit to nothing and allow no valid claims
    require!(
        merkle_root != [0; 32],
        MemberAirdropError::InvalidMerkleRoot
    );

    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let distributor = &mut ctx.accounts.distributor;

    let current_nonce = owner_nonce
        .nonce
        .checked_add(1)
        .ok_or(MemberAirdropError::ArithmeticOverflow)?;
    owner_nonce.nonce = current_nonce;

    distributor.bump = ctx.bumps.distributor;
    distributor.nonce = current_nonce;
    distributor.owner = ctx.accounts.owner.key();
    distributor.token_mint = ctx.accounts.token_mint.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.initial_total_amount = initial_total_amount;
    distributor.merkle_root = merkle_root;
    // total_claimed starts at the default 0

    // Fund the vault so claims can be paid out
    transfer_token(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        initial_total_amount,
        ctx.accounts.token_mint.decimals,
        None, // owner-signed transfer
    )?;

    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        token_mint: ctx.accounts.token_mint.key(),
        token_vault: ctx.accounts.token_vault.key(),
        initial_total_amount,
        merkle_root,
    });

    Ok(())
}
