use anchor_lang::prelude::*;

/**
 * Per-owner nonce counter account
 *
 * Tracks how many distributors an owner has created so nonce numbers can be
 * assigned automatically without the owner having to pick them.
 *
 * Derivation: ["owner_nonce", owner]
 */
#[account]
#[derive(Default, Debug)]
pub struct NonceState {
    /// Nonce of the most recently created distributor for this owner
    pub nonce: u32,
}

impl NonceState {
    /// Account space: 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<NonceState>();
}
