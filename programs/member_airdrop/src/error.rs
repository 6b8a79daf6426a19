use anchor_lang::prelude::*;

#[error_code]
pub enum MemberAirdropError {
    // Access control errors
    #[msg("Only the registry authority can perform this action")]
    Unauthorized,
    #[msg("Only owner can perform this action")]
    OnlyOwner,

    // Registry errors
    #[msg("Not a valid address")]
    InvalidAddress,
    #[msg("Address already registered")]
    AlreadyRegistered,
    #[msg("Address is not registered")]
    NotRegistered,
    #[msg("The registry authority cannot be removed")]
    ProtectedAddress,
    #[msg("Member name exceeds the maximum length")]
    NameTooLong,
    #[msg("Registry member capacity reached")]
    MemberLimitReached,

    // Merkle claim errors
    #[msg("Invalid merkle root")]
    InvalidMerkleRoot,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Drop already claimed")]
    AlreadyClaimed,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match distributor's token mint")]
    TokenMintMismatch,
}
