use anchor_lang::prelude::*;

use crate::state::*;

/**
 * Account context for the read-only claim check
 *
 * No signature is required and no state is touched; the check is a pure
 * function of the distributor's root and the supplied (claimant, amount,
 * proof) triple. Prior claims are deliberately not consulted.
 */
#[derive(Accounts)]
pub struct CanClaim<'info> {
    /// The distributor holding the merkle commitment
    pub distributor: Account<'info, Distributor>,

    /// The claimant the check is performed for
    /// CHECK: only the key is hashed into the candidate leaf
    pub claimant: AccountInfo<'info>,
}

/// Returns true iff (claimant, amount) folds to the committed root under the
/// supplied proof. A wrong address, wrong amount or wrong proof simply yields
/// false, never an error.
pub fn handle_can_claim(
    ctx: Context<CanClaim>,
    amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<bool> {
    Ok(ctx
        .accounts
        .distributor
        .is_committed(&ctx.accounts.claimant.key(), amount, &proof))
}
