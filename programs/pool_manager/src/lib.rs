use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::PoolStats;

/**
 * Pool Manager Program
 *
 * A Solana program implementing a donation pool: a token vault whose every
 * inflow and outflow is mirrored in an append-only, sequentially-id'd
 * ledger, with batched multi-recipient payouts gated by an owner/admin
 * access-control scheme.
 *
 * Key Features:
 * - Immutable donation and distribution records with dense ids from 0
 * - Pull-based reconciliation of raw transfers that bypass donate
 * - Batched distributions of up to 100 recipients, atomic per call
 * - Owner-managed admin set; owner and admins may distribute
 * - Per-donor running totals and enumerable donation-id lists
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Accounting invariant (checked by the ledger on every mutation):
 *   current_balance == total_donated - total_distributed
 * and current_balance never exceeds the vault's actual token balance.
 *
 * Architecture:
 * - Pool State PDA: counters, record counts, owner and admin set
 * - Token Vault PDA: custody of pooled funds, pool PDA as authority
 * - Donation / Distribution Record PDAs: one per ledger entry, keyed by id
 * - Donor State / Donor Donation PDAs: per-donor totals and id index
 *
 * Workflow:
 * 1. Creator initializes a pool for one token mint and becomes owner
 * 2. Donors approve and call donate; raw transfers are folded in later
 *    by anyone calling sync_balance
 * 3. Owner or admins batch-distribute pooled funds to recipients
 * 4. Off-chain indexers follow the emitted events and record PDAs
 */
#[program]
pub mod pool_manager {
    use super::*;

    /**
     * Initializes a new donation pool
     *
     * Creates the pool's ledger state and token vault for a single token
     * mint. The creator becomes the owner; counters start at zero and the
     * admin set starts empty.
     *
     * @param ctx - Account context containing pool, vault, mint and creator
     *
     * Access Control: Anyone; the creator becomes the pool owner
     */
    pub fn initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
        handle_initialize_pool(ctx)
    }

    /**
     * Donates tokens into the pool
     *
     * Pulls `amount` from the donor's token account into the vault and
     * appends one donation record. The recorded amount is what the vault
     * actually received, so transfer-fee mints stay reconciled.
     *
     * @param ctx - Account context containing pool, record, donor accounts
     * @param amount - Nominal amount to pull; must be greater than zero
     *
     * Access Control: Any account
     */
    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        handle_donate(ctx, amount)
    }

    /**
     * Reconciles the ledger against actual vault custody
     *
     * Folds any tokens that arrived outside donate into a single
     * unattributed donation record. Idempotent: with nothing unaccounted
     * the call is a no-op and writes nothing.
     *
     * @param ctx - Account context containing pool, vault and the record
     *   PDA for the next donation id
     *
     * Access Control: Any account
     */
    pub fn sync_balance(ctx: Context<SyncBalance>) -> Result<()> {
        handle_sync_balance(ctx)
    }

    /**
     * Alias of sync_balance
     *
     * Kept as a second entry point so wallet integrations written against
     * either name keep working; both run the identical reconciliation.
     *
     * Access Control: Any account
     */
    pub fn handle_direct_transfer(ctx: Context<SyncBalance>) -> Result<()> {
        handle_sync_balance(ctx)
    }

    /**
     * Distributes pooled funds to a batch of recipients
     *
     * Transfers amounts[i] to recipients[i] in order, then appends one
     * distribution record for the whole batch. Recipient token accounts
     * are passed as remaining accounts, one per recipient, in order. Any
     * failing transfer aborts the entire call.
     *
     * @param ctx - Account context; remaining accounts carry recipient
     *   token accounts
     * @param recipients - Destination wallets, 1..=100 entries
     * @param amounts - Amounts paired with recipients by index
     *
     * Access Control: Pool owner or admin
     */
    pub fn distribute_funds<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeFunds<'info>>,
        recipients: Vec<Pubkey>,
        amounts: Vec<u64>,
    ) -> Result<()> {
        handle_distribute_funds(ctx, recipients, amounts)
    }

    /**
     * Grants distribution rights to an address
     *
     * @param ctx - Account context containing pool and owner
     * @param new_admin - Address to add; must be non-zero and not already
     *   an admin
     *
     * Access Control: Owner only
     */
    pub fn add_admin(ctx: Context<AddAdmin>, new_admin: Pubkey) -> Result<()> {
        handle_add_admin(ctx, new_admin)
    }

    /**
     * Revokes distribution rights from an address
     *
     * @param ctx - Account context containing pool and owner
     * @param admin - Address to remove; must currently be an admin
     *
     * Access Control: Owner only
     */
    pub fn remove_admin(ctx: Context<RemoveAdmin>, admin: Pubkey) -> Result<()> {
        handle_remove_admin(ctx, admin)
    }

    /**
     * Transfers pool ownership
     *
     * @param ctx - Account context containing pool and current owner
     * @param new_owner - Address taking ownership; must be non-zero and
     *   different from the current owner
     *
     * Access Control: Owner only
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_owner)
    }

    /**
     * Returns one consistent snapshot of the pool's aggregate counters
     *
     * Access Control: Any account
     */
    pub fn get_contract_stats(ctx: Context<ViewPool>) -> Result<PoolStats> {
        handle_get_contract_stats(ctx)
    }

    /**
     * Returns the donation record for an id
     *
     * Fails with a lookup error for ids outside [0, donation_count).
     *
     * Access Control: Any account
     */
    pub fn get_donation(ctx: Context<ViewDonation>, id: u64) -> Result<DonationView> {
        handle_get_donation(ctx, id)
    }

    /**
     * Returns the distribution record for an id
     *
     * Fails with a lookup error for ids outside [0, distribution_count).
     *
     * Access Control: Any account
     */
    pub fn get_distribution(ctx: Context<ViewDistribution>, id: u64) -> Result<DistributionView> {
        handle_get_distribution(ctx, id)
    }

    /**
     * Returns a donor's running totals
     *
     * Donors with no explicit donations read as zeros; direct transfers
     * are never attributed to a donor.
     *
     * Access Control: Any account
     */
    pub fn get_donor_summary(ctx: Context<ViewDonor>, donor: Pubkey) -> Result<DonorSummary> {
        handle_get_donor_summary(ctx, donor)
    }
}
