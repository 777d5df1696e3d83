use anchor_lang::prelude::*;

use crate::constants::{DONOR_DONATION_SEED, DONOR_SEED};
use crate::error::PoolManagerError;

/**
 * Per-donor running totals
 *
 * Derivation: ["donor", pool_key, donor_key]
 *
 * Lifecycle:
 * 1. Created on the donor's first explicit donation (init_if_needed)
 * 2. Updated with each subsequent donation
 * 3. Never touched by reconciliation; direct transfers have no donor
 *
 * Design Notes:
 * - One DonorState account per (pool, donor) pair
 * - donation_count doubles as the donor's next per-donor sequence number,
 *   so the donor's donation-id list is enumerable through DonorDonation
 *   accounts with seq in 0..donation_count
 */
#[account]
#[derive(Default, Debug)]
pub struct DonorState {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// The donor this account tracks
    pub donor: Pubkey,

    /// Running sum of this donor's explicit donations
    pub total_donated: u64,

    /// Number of explicit donations by this donor
    pub donation_count: u64,
}

impl DonorState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<DonorState>();

    /// Derive the donor state PDA for a (pool, donor) pair
    pub fn pda(pool: &Pubkey, donor: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DONOR_SEED.as_bytes(), pool.as_ref(), donor.as_ref()],
            &crate::ID,
        )
    }

    /// Add one explicit donation to the donor's totals, returning the
    /// per-donor sequence number the donation occupies
    pub fn record(&mut self, amount: u64) -> Result<u64> {
        let seq = self.donation_count;
        self.total_donated = self
            .total_donated
            .checked_add(amount)
            .ok_or(PoolManagerError::ArithmeticOverflow)?;
        self.donation_count = seq
            .checked_add(1)
            .ok_or(PoolManagerError::ArithmeticOverflow)?;
        Ok(seq)
    }
}

/**
 * One entry of a donor's donation-id list
 *
 * Derivation: ["donor_donation", pool_key, donor_key, seq_le]
 *
 * Stores the global donation id of the donor's seq-th explicit donation.
 * Clients rebuild the full id list by walking seq from 0 to
 * donor_state.donation_count.
 */
#[account]
#[derive(Default, Debug)]
pub struct DonorDonation {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// The donor's sequence slot this entry occupies
    /// - Matches the seq in the account's own seeds; DonorState::record
    ///   hands it out from the same counter the seeds were derived from
    pub seq: u64,

    /// Global donation id for this per-donor sequence slot
    pub donation_id: u64,
}

impl DonorDonation {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<DonorDonation>();

    /// Derive the index-entry PDA for a donor's seq-th donation
    pub fn pda(pool: &Pubkey, donor: &Pubkey, seq: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                DONOR_DONATION_SEED.as_bytes(),
                pool.as_ref(),
                donor.as_ref(),
                &seq.to_le_bytes(),
            ],
            &crate::ID,
        )
    }
}
