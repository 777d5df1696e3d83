use anchor_lang::prelude::*;

use crate::constants::DONATION_SEED;

/**
 * Immutable record of one inflow into the pool
 *
 * One account per donation, created append-only with dense ids starting at 0.
 * No instruction mutates or closes a donation record after creation.
 *
 * Derivation: ["donation", pool_key, id_le]
 *
 * Design Notes:
 * - Explicit donations carry the donor's address; reconciled direct
 *   transfers carry the default pubkey as an "unattributed" sentinel
 * - A reconciled record coalesces every raw transfer since the last
 *   reconciliation into a single amount
 */
#[account]
#[derive(Default, Debug)]
pub struct DonationRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Sequential donation id, unique within the pool
    pub id: u64,

    /// Sender of the donation; default pubkey for direct transfers
    pub donor: Pubkey,

    /// Tokens actually added to the pool for this record
    pub amount: u64,

    /// Block time when the record was created
    pub timestamp: i64,

    /// True when created by balance reconciliation rather than donate
    pub is_direct: bool,
}

impl DonationRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<DonationRecord>();

    /// Derive the record PDA for a donation id
    pub fn pda(pool: &Pubkey, id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DONATION_SEED.as_bytes(), pool.as_ref(), &id.to_le_bytes()],
            &crate::ID,
        )
    }
}
