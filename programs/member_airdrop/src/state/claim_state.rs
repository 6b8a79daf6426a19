use anchor_lang::prelude::*;

use crate::error::MemberAirdropError;

/**
 * Individual claim status account
 *
 * One per (distributor, claimant) pair, created on first claim. The flag is
 * one-way: it transitions false -> true exactly once and is never reset or
 * closed, which is what makes each committed leaf claimable at most once.
 *
 * Derivation: ["claim", distributor_key, claimant_key]
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Whether this claimant's drop has been paid out
    pub claimed: bool,
}

impl ClaimStatus {
    /// Account space: 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    /// Performs the one-way Unclaimed -> Claimed transition. Callers must
    /// verify the merkle proof first so an invalid proof is never reported as
    /// AlreadyClaimed.
    pub fn mark_claimed(&mut self) -> Result<()> {
        require!(!self.claimed, MemberAirdropError::AlreadyClaimed);
        self.claimed = true;
        Ok(())
    }
}
