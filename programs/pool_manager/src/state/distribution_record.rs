use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTION_SEED;

/**
 * Immutable record of one batch distribution
 *
 * One account per successful distribute_funds call, append-only with dense
 * ids starting at 0. Recipients and amounts are stored in payout order,
 * paired by index.
 *
 * Derivation: ["distribution", pool_key, id_le]
 *
 * Space is computed from the batch length at creation time; the batch cap
 * keeps the account comfortably under the allocation limit.
 */
#[account]
#[derive(Default, Debug)]
pub struct DistributionRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Sequential distribution id, unique within the pool
    pub id: u64,

    /// Authorized caller who triggered the batch
    pub distributor: Pubkey,

    /// Sum of amounts; equals the tokens moved out of the vault
    pub total_amount: u64,

    /// Block time when the record was created
    pub timestamp: i64,

    /// Destination addresses, in payout order
    pub recipients: Vec<Pubkey>,

    /// Amounts paired with recipients by index
    pub amounts: Vec<u64>,
}

impl DistributionRecord {
    /// Space required for a record holding `recipient_count` entries
    pub fn space(recipient_count: usize) -> usize {
        8                          // discriminator
            + 1                    // bump
            + 8                    // id
            + 32                   // distributor
            + 8                    // total_amount
            + 8                    // timestamp
            + 4 + 32 * recipient_count // recipients vec
            + 4 + 8 * recipient_count // amounts vec
    }

    /// Derive the record PDA for a distribution id
    pub fn pda(pool: &Pubkey, id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[DISTRIBUTION_SEED.as_bytes(), pool.as_ref(), &id.to_le_bytes()],
            &crate::ID,
        )
    }
}
