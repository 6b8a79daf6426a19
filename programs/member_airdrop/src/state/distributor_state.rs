use anchor_lang::prelude::*;

use crate::error::MemberAirdropError;
use crate::utils::{hash_leaf, verify};

/**
 * Main distributor state account
 *
 * Represents one airdrop campaign: a token vault plus a single merkle root
 * committing to every (claimant, amount) pair eligible to claim from it.
 * The root is fixed at creation and never changes; a new entitlement set
 * requires a new distributor.
 *
 * Derivation: ["distributor", token_mint, owner, nonce]
 *
 * Lifecycle:
 * 1. Created and funded during create_distributor
 * 2. total_claimed increments with each successful claim
 * 3. Closed during withdraw
 */
#[account]
#[derive(Default, Debug)]
pub struct Distributor {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation during claim operations
    pub bump: u8,

    /// Nonce number for this distributor
    /// - Allows multiple campaigns for the same token/owner pair
    pub nonce: u32,

    /// Owner of the distributor
    /// - Funds the vault at creation and can withdraw what remains
    pub owner: Pubkey,

    /// Token mint address of the distributed token
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA holding the payout funds, controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key]
    pub token_vault: Pubkey,

    /// Amount of tokens deposited at creation
    pub initial_total_amount: u64,

    /// Total amount paid out to all claimants so far
    pub total_claimed: u64,

    /// Merkle root for claim verification
    /// - Committed once at creation, immutable afterwards
    pub merkle_root: [u8; 32],
}

impl Distributor {
    /// Account space: 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Distributor>();

    /// Checks a (claimant, amount) pair against the committed root.
    pub fn is_committed(&self, claimant: &Pubkey, amount: u64, proof: &[[u8; 32]]) -> bool {
        verify(proof, self.merkle_root, hash_leaf(claimant, amount))
    }

    /// Same check as a fallible operation, for the claim path.
    pub fn verify_claim(&self, claimant: &Pubkey, amount: u64, proof: &[[u8; 32]]) -> Result<()> {
        require!(
            self.is_committed(claimant, amount, proof),
            MemberAirdropError::InvalidProof
        );
        Ok(())
    }
}
