use anchor_lang::prelude::*;

use crate::constants::{MAX_ADMINS, POOL_SEED};
use crate::error::PoolManagerError;

/**
 * Main pool state account
 *
 * This struct is the accounting ledger of one donation pool: running inflow
 * and outflow totals, the derived current balance, dense record counters and
 * the access-control state (owner plus admin set).
 *
 * Derivation: ["pool", token_mint, creator]
 *
 * Accounting invariant, maintained by every mutation:
 *   current_balance == total_donated - total_distributed
 * and current_balance never exceeds the vault's actual token balance
 * (it may lag behind it until the next reconciliation).
 *
 * Lifecycle:
 * 1. Created during initialize_pool
 * 2. Counters grow monotonically with each donation/distribution
 * 3. Never closed; the pool has no paused or terminal state
 */
#[account]
#[derive(Default, Debug)]
pub struct PoolState {
    /// Bump seed for PDA derivation
    /// - Saved to avoid recomputation when signing for the vault
    pub bump: u8,

    /// Account that created the pool
    /// - Immutable seed component; stays fixed across ownership transfers
    ///   so the PDA keeps its address and vault authority
    pub creator: Pubkey,

    /// Current owner of the pool
    /// - Manages admins, may transfer ownership, may distribute funds
    /// - Never the zero address
    pub owner: Pubkey,

    /// Token mint this pool exclusively accounts for
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - PDA-owned custody account; direct transfers land here
    pub token_vault: Pubkey,

    /// Running sum of all recorded inflows, explicit and reconciled
    pub total_donated: u64,

    /// Running sum of all recorded outflows
    pub total_distributed: u64,

    /// Recorded pool balance
    /// - Always equal to total_donated - total_distributed
    pub current_balance: u64,

    /// Number of donation records; also the next donation id
    pub donation_count: u64,

    /// Number of distribution records; also the next distribution id
    pub distribution_count: u64,

    /// Addresses granted distribution rights by the owner
    /// - Membership set; the owner is authorized implicitly and is never
    ///   stored here
    pub admins: Vec<Pubkey>,

    /// Reentrancy flag set for the duration of balance-mutating handlers
    pub locked: bool,
}

impl PoolState {
    /// Space required for this account
    /// - 8-byte discriminator, fixed fields, and the admin list at capacity
    pub const LEN: usize = 8       // discriminator
        + 1                        // bump
        + 32 * 4                   // creator, owner, token_mint, token_vault
        + 8 * 5                    // counters
        + 4 + 32 * MAX_ADMINS      // admins vec
        + 1; // locked

    /// Derive the pool PDA for a (token_mint, creator) pair
    pub fn pda(token_mint: &Pubkey, creator: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[POOL_SEED.as_bytes(), token_mint.as_ref(), creator.as_ref()],
            &crate::ID,
        )
    }

    pub fn is_owner(&self, address: &Pubkey) -> bool {
        self.owner == *address
    }

    pub fn is_admin(&self, address: &Pubkey) -> bool {
        self.admins.contains(address)
    }

    /// Combined distribution-rights predicate
    /// - Owner and admin stay structurally distinct; the owner is never a
    ///   member of the admin list
    pub fn is_authorized_distributor(&self, address: &Pubkey) -> bool {
        self.is_owner(address) || self.is_admin(address)
    }

    /// Append one inflow to the ledger and return its donation id
    ///
    /// Covers both explicit donations and reconciled direct transfers; the
    /// caller decides donor attribution. Ids are dense from 0.
    pub fn record_donation(&mut self, amount: u64) -> Result<u64> {
        require!(amount > 0, PoolManagerError::InvalidAmount);

        let id = self.donation_count;
        self.total_donated = self
            .total_donated
            .checked_add(amount)
            .ok_or(PoolManagerError::ArithmeticOverflow)?;
        self.current_balance = self
            .current_balance
            .checked_add(amount)
            .ok_or(PoolManagerError::ArithmeticOverflow)?;
        self.donation_count = id
            .checked_add(1)
            .ok_or(PoolManagerError::ArithmeticOverflow)?;

        Ok(id)
    }

    /// Append one outflow to the ledger and return its distribution id
    ///
    /// The total must already be validated against the batch; this method
    /// enforces the balance bound so the ledger can never go negative.
    pub fn record_distribution(&mut self, total_amount: u64) -> Result<u64> {
        require!(total_amount > 0, PoolManagerError::InvalidAmount);
        require!(
            total_amount <= self.current_balance,
            PoolManagerError::InsufficientPoolBalance
        );

        let id = self.distribution_count;
        self.total_distributed = self
            .total_distributed
            .checked_add(total_amount)
            .ok_or(PoolManagerError::ArithmeticOverflow)?;
        // Bounded by the require above
        self.current_balance -= total_amount;
        self.distribution_count = id
            .checked_add(1)
            .ok_or(PoolManagerError::ArithmeticOverflow)?;

        Ok(id)
    }

    /// Tokens held by the vault but not yet recorded in the ledger
    ///
    /// Zero when accounting matches custody; individual raw transfers are not
    /// observable, only the net delta since the ledger last looked.
    pub fn unaccounted(&self, vault_balance: u64) -> u64 {
        vault_balance.saturating_sub(self.current_balance)
    }

    pub fn add_admin(&mut self, admin: Pubkey) -> Result<()> {
        require!(admin != Pubkey::default(), PoolManagerError::ZeroAdminAddress);
        require!(!self.is_admin(&admin), PoolManagerError::AdminAlreadyExists);
        require!(self.admins.len() < MAX_ADMINS, PoolManagerError::AdminListFull);

        self.admins.push(admin);
        Ok(())
    }

    pub fn remove_admin(&mut self, admin: &Pubkey) -> Result<()> {
        let position = self
            .admins
            .iter()
            .position(|a| a == admin)
            .ok_or(PoolManagerError::AdminNotFound)?;

        self.admins.remove(position);
        Ok(())
    }

    /// Swap the owner, returning the previous owner for event emission
    ///
    /// No-op transfers are rejected so every OwnershipTransferred event
    /// reflects an actual change.
    pub fn transfer_ownership_to(&mut self, new_owner: Pubkey) -> Result<Pubkey> {
        require!(
            new_owner != Pubkey::default(),
            PoolManagerError::ZeroOwnerAddress
        );
        require!(
            new_owner != self.owner,
            PoolManagerError::SelfOwnershipTransfer
        );

        let previous_owner = self.owner;
        self.owner = new_owner;
        Ok(previous_owner)
    }

    /// Bounds-check a donation id against the dense counter
    ///
    /// Records exist exactly for ids in [0, donation_count); anything else
    /// is a lookup error, checked before any account is touched
    pub fn check_donation_id(&self, id: u64) -> Result<()> {
        require!(id < self.donation_count, PoolManagerError::InvalidRecordId);
        Ok(())
    }

    /// Bounds-check a distribution id against the dense counter
    pub fn check_distribution_id(&self, id: u64) -> Result<()> {
        require!(
            id < self.distribution_count,
            PoolManagerError::InvalidRecordId
        );
        Ok(())
    }

    /// One consistent snapshot of the pool's aggregate counters
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            total_donated: self.total_donated,
            total_distributed: self.total_distributed,
            current_balance: self.current_balance,
            donation_count: self.donation_count,
            distribution_count: self.distribution_count,
        }
    }
}

/// Aggregate counter snapshot returned by get_contract_stats
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolStats {
    pub total_donated: u64,
    pub total_distributed: u64,
    pub current_balance: u64,
    pub donation_count: u64,
    pub distribution_count: u64,
}
