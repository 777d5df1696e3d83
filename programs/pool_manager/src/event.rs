use anchor_lang::prelude::*;

/// Event emitted when a new donation pool is initialized
#[event]
pub struct PoolInitialized {
    /// The pool state account public key
    pub pool: Pubkey,
    /// Initial owner (the creator) of the pool
    pub owner: Pubkey,
    /// Token mint this pool accounts for
    pub token_mint: Pubkey,
    /// Token vault address holding pooled funds
    pub token_vault: Pubkey,
}

/// Event emitted for every recorded inflow, explicit or reconciled
#[event]
pub struct DonationReceived {
    /// The pool state account public key
    pub pool: Pubkey,
    /// Id of the newly appended donation record
    pub donation_id: u64,
    /// Donor address; the default pubkey for reconciled direct transfers
    pub donor: Pubkey,
    /// Amount credited to the pool for this record
    pub amount: u64,
    /// True when the record was created by balance reconciliation
    pub is_direct: bool,
    /// Running total of all recorded inflows after this donation
    pub total_donated: u64,
}

/// Event emitted when a batch distribution completes
#[event]
pub struct FundsDistributed {
    /// The pool state account public key
    pub pool: Pubkey,
    /// Id of the newly appended distribution record
    pub distribution_id: u64,
    /// Authorized caller who triggered the batch
    pub distributor: Pubkey,
    /// Destination addresses, in payout order
    pub recipients: Vec<Pubkey>,
    /// Amounts paired with recipients by index
    pub amounts: Vec<u64>,
    /// Sum of all amounts moved out in this batch
    pub total_amount: u64,
}

/// Event emitted when the owner grants distribution rights
#[event]
pub struct AdminAdded {
    /// The pool state account public key
    pub pool: Pubkey,
    /// Address granted admin rights
    pub admin: Pubkey,
}

/// Event emitted when the owner revokes distribution rights
#[event]
pub struct AdminRemoved {
    /// The pool state account public key
    pub pool: Pubkey,
    /// Address whose admin rights were revoked
    pub admin: Pubkey,
}

/// Event emitted when pool ownership changes hands
#[event]
pub struct OwnershipTransferred {
    /// The pool state account public key
    pub pool: Pubkey,
    /// Owner before the transfer
    pub previous_owner: Pubkey,
    /// Owner after the transfer
    pub new_owner: Pubkey,
}
