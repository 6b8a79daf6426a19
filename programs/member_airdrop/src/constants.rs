use anchor_lang::prelude::*;

#[constant]
/// ===== CAPACITY CONSTANTS =====

/// Maximum number of registered members per registry
/// - The registry account is allocated once at creation, so the member list
///   capacity must be fixed up front
/// - 64 records keeps the account comfortably under the CPI allocation limit
pub const MAX_MEMBERS: usize = 64;

/// Maximum byte length of a member display name
pub const MAX_NAME_LEN: usize = 32;

/// ===== PDA SEED CONSTANTS =====

/// Seed for registry PDA derivation
/// - Used in: ["registry", authority]
/// - One registry per administrator key
pub const REGISTRY_SEED: &str = "registry";

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Tracks a per-owner counter so distributor nonces are assigned
///   automatically
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", token_mint, owner, nonce]
/// - Unique per (token, owner, nonce) combination
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", distributor_key]
/// - The vault is controlled by the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distributor_key, claimant_key]
/// - One claim flag per (distributor, claimant) pair; the flag is one-way and
///   the account is never closed, which is what makes claims at-most-once
pub const CLAIM_SEED: &str = "claim";
