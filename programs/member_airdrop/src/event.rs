use anchor_lang::prelude::*;

/// Event emitted when a registry is created
#[event]
pub struct RegistryCreated {
    /// The registry account public key
    pub registry: Pubkey,
    /// Administrator of the registry
    pub authority: Pubkey,
}

/// Event emitted when a member is registered
#[event]
pub struct MemberCreated {
    /// The registry account public key
    pub registry: Pubkey,
    /// Address of the new member
    pub member: Pubkey,
    /// Entry time supplied at registration
    pub entry_time: i64,
    /// Entitlement rate supplied at registration
    pub rate: u64,
}

/// Event emitted when a member's rate is updated
#[event]
pub struct MemberRateUpdated {
    /// The registry account public key
    pub registry: Pubkey,
    /// Address of the updated member
    pub member: Pubkey,
    /// New entitlement rate
    pub new_rate: u64,
}

/// Event emitted when a member is removed
#[event]
pub struct MemberRemoved {
    /// The registry account public key
    pub registry: Pubkey,
    /// Address of the removed member
    pub member: Pubkey,
}

/// Event emitted when a new distributor is created
#[event]
pub struct DistributorCreated {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Nonce of the distributor
    pub nonce: u32,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Token mint address
    pub token_mint: Pubkey,
    /// Token vault address
    pub token_vault: Pubkey,
    /// Initial total amount of tokens deposited
    pub initial_total_amount: u64,
    /// Merkle root the distributor is committed to
    pub merkle_root: [u8; 32],
}

/// Event emitted exactly once per successfully claimed leaf
#[event]
pub struct Claimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount of tokens paid out
    pub amount: u64,
}

/// Event emitted when remaining tokens are withdrawn
#[event]
pub struct TokensWithdrawn {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner who withdrew the tokens
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount_withdrawn: u64,
}
