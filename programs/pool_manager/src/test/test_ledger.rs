use anchor_lang::prelude::Pubkey;
use anchor_lang::Result;

use crate::constants::{MAX_ADMINS, MAX_RECIPIENTS_PER_DISTRIBUTION};
use crate::error::PoolManagerError;
use crate::state::{DistributionRecord, DonorState, PoolState};
use crate::utils::validate_batch;

fn new_pool() -> PoolState {
    let owner = Pubkey::new_unique();
    PoolState {
        bump: 255,
        creator: owner,
        owner,
        token_mint: Pubkey::new_unique(),
        token_vault: Pubkey::new_unique(),
        ..Default::default()
    }
}

fn assert_pool_err<T: std::fmt::Debug>(result: Result<T>, expected: PoolManagerError) {
    let expected: anchor_lang::error::Error = expected.into();
    assert_eq!(result.unwrap_err(), expected);
}

fn assert_accounting_invariant(pool: &PoolState) {
    assert_eq!(
        pool.current_balance,
        pool.total_donated - pool.total_distributed
    );
}

// ============================================================
// Ledger accounting
// ============================================================

#[test]
fn donation_ids_are_dense_and_totals_accumulate() {
    let mut pool = new_pool();

    assert_eq!(pool.record_donation(100).unwrap(), 0);
    assert_eq!(pool.record_donation(250).unwrap(), 1);
    assert_eq!(pool.record_donation(1).unwrap(), 2);

    assert_eq!(pool.total_donated, 351);
    assert_eq!(pool.current_balance, 351);
    assert_eq!(pool.donation_count, 3);
    assert_accounting_invariant(&pool);
}

#[test]
fn zero_donation_is_rejected() {
    let mut pool = new_pool();
    assert_pool_err(pool.record_donation(0), PoolManagerError::InvalidAmount);
    assert_eq!(pool.donation_count, 0);
    assert_eq!(pool.total_donated, 0);
}

#[test]
fn donation_overflow_is_rejected() {
    let mut pool = new_pool();
    pool.record_donation(u64::MAX).unwrap();
    assert_pool_err(pool.record_donation(1), PoolManagerError::ArithmeticOverflow);
}

#[test]
fn distribution_reduces_balance_and_ids_are_dense() {
    let mut pool = new_pool();
    pool.record_donation(100).unwrap();

    assert_eq!(pool.record_distribution(30).unwrap(), 0);
    assert_eq!(pool.record_distribution(20).unwrap(), 1);

    assert_eq!(pool.total_distributed, 50);
    assert_eq!(pool.current_balance, 50);
    assert_eq!(pool.distribution_count, 2);
    assert_accounting_invariant(&pool);
}

#[test]
fn distribution_of_exact_balance_leaves_zero() {
    let mut pool = new_pool();
    pool.record_donation(77).unwrap();

    pool.record_distribution(77).unwrap();

    assert_eq!(pool.current_balance, 0);
    assert_accounting_invariant(&pool);
}

#[test]
fn distribution_exceeding_balance_is_rejected_without_state_change() {
    let mut pool = new_pool();
    pool.record_donation(90).unwrap();

    assert_pool_err(
        pool.record_distribution(1000),
        PoolManagerError::InsufficientPoolBalance,
    );

    assert_eq!(pool.total_distributed, 0);
    assert_eq!(pool.current_balance, 90);
    assert_eq!(pool.distribution_count, 0);
}

#[test]
fn zero_distribution_is_rejected() {
    let mut pool = new_pool();
    pool.record_donation(10).unwrap();
    assert_pool_err(pool.record_distribution(0), PoolManagerError::InvalidAmount);
}

#[test]
fn invariant_holds_over_mixed_sequences() {
    let mut pool = new_pool();
    let operations: [(bool, u64); 8] = [
        (true, 500),
        (true, 40),
        (false, 260),
        (true, 3),
        (false, 283),
        (true, 1000),
        (false, 999),
        (true, 7),
    ];

    for (is_donation, amount) in operations {
        if is_donation {
            pool.record_donation(amount).unwrap();
        } else {
            pool.record_distribution(amount).unwrap();
        }
        assert_accounting_invariant(&pool);
    }

    assert_eq!(pool.total_donated, 1550);
    assert_eq!(pool.total_distributed, 1542);
    assert_eq!(pool.current_balance, 8);
}

// ============================================================
// Reconciliation
// ============================================================

#[test]
fn unaccounted_is_the_custody_surplus() {
    let mut pool = new_pool();
    pool.record_donation(100).unwrap();

    // 40 tokens arrived through a raw transfer
    assert_eq!(pool.unaccounted(140), 40);
}

#[test]
fn unaccounted_is_zero_when_ledger_matches_custody() {
    let mut pool = new_pool();
    pool.record_donation(100).unwrap();
    assert_eq!(pool.unaccounted(100), 0);
}

#[test]
fn unaccounted_never_underflows() {
    let pool = new_pool();
    assert_eq!(pool.unaccounted(0), 0);
}

#[test]
fn reconciliation_is_idempotent() {
    let mut pool = new_pool();
    pool.record_donation(100).unwrap();

    let vault_balance = 140;
    let surplus = pool.unaccounted(vault_balance);
    assert_eq!(surplus, 40);
    pool.record_donation(surplus).unwrap();

    // Same vault balance, nothing new to record
    assert_eq!(pool.unaccounted(vault_balance), 0);
    assert_eq!(pool.total_donated, 140);
    assert_eq!(pool.donation_count, 2);
    assert_accounting_invariant(&pool);
}

#[test]
fn multiple_raw_transfers_coalesce_into_one_surplus() {
    let mut pool = new_pool();
    pool.record_donation(100).unwrap();

    // Three separate raw transfers of 10, 15 and 15 accumulated
    let surplus = pool.unaccounted(140);
    assert_eq!(surplus, 40);
    pool.record_donation(surplus).unwrap();
    assert_eq!(pool.donation_count, 2);
}

// ============================================================
// Admin management
// ============================================================

#[test]
fn owner_is_authorized_but_not_an_admin() {
    let pool = new_pool();
    let owner = pool.owner;

    assert!(pool.is_owner(&owner));
    assert!(!pool.is_admin(&owner));
    assert!(pool.is_authorized_distributor(&owner));
}

#[test]
fn added_admin_is_authorized_until_removed() {
    let mut pool = new_pool();
    let admin = Pubkey::new_unique();

    assert!(!pool.is_authorized_distributor(&admin));
    pool.add_admin(admin).unwrap();
    assert!(pool.is_admin(&admin));
    assert!(pool.is_authorized_distributor(&admin));

    pool.remove_admin(&admin).unwrap();
    assert!(!pool.is_admin(&admin));
    assert!(!pool.is_authorized_distributor(&admin));
}

#[test]
fn adding_zero_admin_is_rejected() {
    let mut pool = new_pool();
    assert_pool_err(
        pool.add_admin(Pubkey::default()),
        PoolManagerError::ZeroAdminAddress,
    );
}

#[test]
fn adding_same_admin_twice_is_rejected() {
    let mut pool = new_pool();
    let admin = Pubkey::new_unique();

    pool.add_admin(admin).unwrap();
    assert_pool_err(pool.add_admin(admin), PoolManagerError::AdminAlreadyExists);
    assert_eq!(pool.admins.len(), 1);
}

#[test]
fn removing_unknown_admin_is_rejected() {
    let mut pool = new_pool();
    assert_pool_err(
        pool.remove_admin(&Pubkey::new_unique()),
        PoolManagerError::AdminNotFound,
    );
}

#[test]
fn admin_list_is_capped() {
    let mut pool = new_pool();
    for _ in 0..MAX_ADMINS {
        pool.add_admin(Pubkey::new_unique()).unwrap();
    }
    assert_pool_err(
        pool.add_admin(Pubkey::new_unique()),
        PoolManagerError::AdminListFull,
    );
    assert_eq!(pool.admins.len(), MAX_ADMINS);
}

#[test]
fn unrelated_account_is_never_authorized() {
    let mut pool = new_pool();
    pool.add_admin(Pubkey::new_unique()).unwrap();
    assert!(!pool.is_authorized_distributor(&Pubkey::new_unique()));
}

// ============================================================
// Ownership transfer
// ============================================================

#[test]
fn ownership_transfer_swaps_owner_and_returns_previous() {
    let mut pool = new_pool();
    let old_owner = pool.owner;
    let new_owner = Pubkey::new_unique();

    let previous = pool.transfer_ownership_to(new_owner).unwrap();

    assert_eq!(previous, old_owner);
    assert_eq!(pool.owner, new_owner);
    assert!(pool.is_owner(&new_owner));
    assert!(!pool.is_owner(&old_owner));
    assert!(pool.is_authorized_distributor(&new_owner));
    assert!(!pool.is_authorized_distributor(&old_owner));
}

#[test]
fn ownership_transfer_to_zero_is_rejected() {
    let mut pool = new_pool();
    let owner = pool.owner;
    assert_pool_err(
        pool.transfer_ownership_to(Pubkey::default()),
        PoolManagerError::ZeroOwnerAddress,
    );
    assert_eq!(pool.owner, owner);
}

#[test]
fn ownership_transfer_to_self_is_rejected() {
    let mut pool = new_pool();
    let owner = pool.owner;
    assert_pool_err(
        pool.transfer_ownership_to(owner),
        PoolManagerError::SelfOwnershipTransfer,
    );
    assert_eq!(pool.owner, owner);
}

#[test]
fn admins_survive_ownership_transfer() {
    let mut pool = new_pool();
    let admin = Pubkey::new_unique();
    pool.add_admin(admin).unwrap();

    pool.transfer_ownership_to(Pubkey::new_unique()).unwrap();
    assert!(pool.is_admin(&admin));
}

// ============================================================
// Batch validation
// ============================================================

fn recipients(n: usize) -> Vec<Pubkey> {
    (0..n).map(|_| Pubkey::new_unique()).collect()
}

#[test]
fn valid_batch_returns_total() {
    let total = validate_batch(&recipients(3), &[30, 20, 5]).unwrap();
    assert_eq!(total, 55);
}

#[test]
fn length_mismatch_is_rejected_first() {
    // Also malformed in other ways; the pairing failure wins
    assert_pool_err(
        validate_batch(&recipients(2), &[0]),
        PoolManagerError::LengthMismatch,
    );
    assert_pool_err(validate_batch(&[], &[10]), PoolManagerError::LengthMismatch);
}

#[test]
fn empty_batch_is_rejected() {
    assert_pool_err(validate_batch(&[], &[]), PoolManagerError::NoRecipients);
}

#[test]
fn batch_of_exactly_the_cap_is_accepted() {
    let amounts = vec![1u64; MAX_RECIPIENTS_PER_DISTRIBUTION];
    let total = validate_batch(&recipients(MAX_RECIPIENTS_PER_DISTRIBUTION), &amounts).unwrap();
    assert_eq!(total, MAX_RECIPIENTS_PER_DISTRIBUTION as u64);
}

#[test]
fn batch_over_the_cap_is_rejected() {
    let amounts = vec![1u64; MAX_RECIPIENTS_PER_DISTRIBUTION + 1];
    assert_pool_err(
        validate_batch(&recipients(MAX_RECIPIENTS_PER_DISTRIBUTION + 1), &amounts),
        PoolManagerError::TooManyRecipients,
    );
}

#[test]
fn zero_amount_anywhere_is_rejected() {
    assert_pool_err(
        validate_batch(&recipients(3), &[10, 0, 5]),
        PoolManagerError::InvalidAmount,
    );
}

#[test]
fn zero_recipient_anywhere_is_rejected() {
    let mut batch = recipients(3);
    batch[2] = Pubkey::default();
    assert_pool_err(
        validate_batch(&batch, &[10, 10, 10]),
        PoolManagerError::ZeroRecipientAddress,
    );
}

#[test]
fn amount_checks_run_before_recipient_checks() {
    let mut batch = recipients(2);
    batch[0] = Pubkey::default();
    assert_pool_err(
        validate_batch(&batch, &[5, 0]),
        PoolManagerError::InvalidAmount,
    );
}

#[test]
fn batch_total_overflow_is_rejected() {
    assert_pool_err(
        validate_batch(&recipients(2), &[u64::MAX, 1]),
        PoolManagerError::ArithmeticOverflow,
    );
}

// ============================================================
// Donor totals
// ============================================================

#[test]
fn donor_totals_and_sequence_accumulate() {
    let mut donor_state = DonorState {
        bump: 254,
        donor: Pubkey::new_unique(),
        ..Default::default()
    };

    assert_eq!(donor_state.record(100).unwrap(), 0);
    assert_eq!(donor_state.record(50).unwrap(), 1);
    assert_eq!(donor_state.record(1).unwrap(), 2);

    assert_eq!(donor_state.total_donated, 151);
    assert_eq!(donor_state.donation_count, 3);
}

#[test]
fn donor_total_overflow_is_rejected() {
    let mut donor_state = DonorState::default();
    donor_state.record(u64::MAX).unwrap();
    assert_pool_err(donor_state.record(1), PoolManagerError::ArithmeticOverflow);
}

// ============================================================
// Record lookup bounds
// ============================================================

#[test]
fn donation_lookup_is_bounded_by_the_counter() {
    let mut pool = new_pool();
    pool.record_donation(100).unwrap();
    pool.record_donation(50).unwrap();

    pool.check_donation_id(0).unwrap();
    pool.check_donation_id(1).unwrap();
    assert_pool_err(pool.check_donation_id(2), PoolManagerError::InvalidRecordId);
    assert_pool_err(
        pool.check_donation_id(u64::MAX),
        PoolManagerError::InvalidRecordId,
    );
}

#[test]
fn distribution_lookup_is_bounded_by_the_counter() {
    let mut pool = new_pool();
    pool.record_donation(100).unwrap();
    pool.record_distribution(40).unwrap();

    pool.check_distribution_id(0).unwrap();
    assert_pool_err(
        pool.check_distribution_id(1),
        PoolManagerError::InvalidRecordId,
    );
}

#[test]
fn empty_ledger_rejects_every_lookup() {
    let pool = new_pool();
    assert_pool_err(pool.check_donation_id(0), PoolManagerError::InvalidRecordId);
    assert_pool_err(
        pool.check_distribution_id(0),
        PoolManagerError::InvalidRecordId,
    );
}

// ============================================================
// Record sizing and addresses
// ============================================================

#[test]
fn distribution_record_at_cap_fits_an_account() {
    // Solana caps CPI-created accounts at 10240 bytes
    assert!(DistributionRecord::space(MAX_RECIPIENTS_PER_DISTRIBUTION) <= 10240);
}

#[test]
fn record_pdas_are_distinct_per_id() {
    let pool = Pubkey::new_unique();
    let (donation_0, _) = crate::state::DonationRecord::pda(&pool, 0);
    let (donation_1, _) = crate::state::DonationRecord::pda(&pool, 1);
    let (distribution_0, _) = DistributionRecord::pda(&pool, 0);

    assert_ne!(donation_0, donation_1);
    assert_ne!(donation_0, distribution_0);
}

#[test]
fn pool_pda_is_deterministic_per_mint_and_creator() {
    let mint = Pubkey::new_unique();
    let creator = Pubkey::new_unique();

    let (pool_a, bump_a) = PoolState::pda(&mint, &creator);
    let (pool_b, bump_b) = PoolState::pda(&mint, &creator);
    assert_eq!(pool_a, pool_b);
    assert_eq!(bump_a, bump_b);

    let (other_pool, _) = PoolState::pda(&mint, &Pubkey::new_unique());
    assert_ne!(pool_a, other_pool);
}

#[test]
fn donor_pdas_are_distinct_per_donor_and_sequence() {
    let pool = Pubkey::new_unique();
    let donor = Pubkey::new_unique();

    let (donor_state, _) = DonorState::pda(&pool, &donor);
    let (other_donor_state, _) = DonorState::pda(&pool, &Pubkey::new_unique());
    assert_ne!(donor_state, other_donor_state);

    let (entry_0, _) = crate::state::DonorDonation::pda(&pool, &donor, 0);
    let (entry_1, _) = crate::state::DonorDonation::pda(&pool, &donor, 1);
    assert_ne!(entry_0, entry_1);
    assert_ne!(entry_0, donor_state);
}

// ============================================================
// End-to-end ledger scenarios
// ============================================================

#[test]
fn donation_then_distribution_then_reconciliation() {
    let mut pool = new_pool();
    let admin = Pubkey::new_unique();

    // Donor A donates 100
    let id = pool.record_donation(100).unwrap();
    assert_eq!(id, 0);
    assert_eq!(pool.stats().total_donated, 100);
    assert_eq!(pool.stats().current_balance, 100);

    // Owner distributes [30, 20]
    let batch_total = validate_batch(&recipients(2), &[30, 20]).unwrap();
    let distribution_id = pool.record_distribution(batch_total).unwrap();
    assert_eq!(distribution_id, 0);
    assert_eq!(pool.stats().total_distributed, 50);
    assert_eq!(pool.stats().current_balance, 50);

    // A wallet sends 40 directly to the vault, then anyone reconciles
    let surplus = pool.unaccounted(90);
    assert_eq!(surplus, 40);
    pool.record_donation(surplus).unwrap();
    assert_eq!(pool.stats().total_donated, 140);
    assert_eq!(pool.stats().current_balance, 90);

    // Immediate second reconciliation records nothing
    assert_eq!(pool.unaccounted(90), 0);

    // Over-balance distribution is refused with state intact
    assert_pool_err(
        pool.record_distribution(1000),
        PoolManagerError::InsufficientPoolBalance,
    );
    assert_eq!(pool.stats().current_balance, 90);

    // A freshly appointed admin may distribute
    pool.add_admin(admin).unwrap();
    assert!(pool.is_authorized_distributor(&admin));
    pool.record_distribution(5).unwrap();
    assert_eq!(pool.stats().current_balance, 85);

    assert_accounting_invariant(&pool);
    assert_eq!(pool.stats().donation_count, 2);
    assert_eq!(pool.stats().distribution_count, 2);
}
