use anchor_lang::prelude::*;

#[error_code]
pub enum PoolManagerError {
    // Access control errors
    #[msg("Only owner can call this function")]
    OnlyOwner,
    #[msg("Caller is not authorized to distribute funds")]
    UnauthorizedDistributor,
    #[msg("Reentrant call rejected")]
    ReentrantCall,

    // Validation errors
    #[msg("Token mint cannot be the zero address")]
    InvalidTokenMint,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Recipients and amounts length mismatch")]
    LengthMismatch,
    #[msg("No recipients provided")]
    NoRecipients,
    #[msg("Too many recipients in one batch")]
    TooManyRecipients,
    #[msg("Recipient cannot be the zero address")]
    ZeroRecipientAddress,
    #[msg("Admin address cannot be zero")]
    ZeroAdminAddress,
    #[msg("Address is already an admin")]
    AdminAlreadyExists,
    #[msg("Address is not an admin")]
    AdminNotFound,
    #[msg("Admin list is full")]
    AdminListFull,
    #[msg("New owner cannot be zero address")]
    ZeroOwnerAddress,
    #[msg("New owner is already the current owner")]
    SelfOwnershipTransfer,

    // Resource errors
    #[msg("Insufficient pool balance for this distribution")]
    InsufficientPoolBalance,
    #[msg("No tokens were received by the vault")]
    NothingReceived,

    // Lookup errors
    #[msg("Record id is out of range")]
    InvalidRecordId,

    // Account wiring errors
    #[msg("Number of recipient token accounts does not match recipients")]
    RecipientAccountsMismatch,
    #[msg("Recipient token account is invalid for this pool")]
    InvalidRecipientTokenAccount,
    #[msg("Donation record account does not match the expected address")]
    InvalidDonationRecordAccount,
    #[msg("Distribution record account does not match the expected address")]
    InvalidDistributionRecordAccount,
    #[msg("Token mint does not match the pool's token mint")]
    TokenMintMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
