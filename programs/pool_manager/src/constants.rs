use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the pool manager
 * program. These constants control PDA derivation and hard size limits.
 */

#[constant]
/// ===== LIMIT CONSTANTS =====

/// Maximum number of recipients in a single distribution batch
/// - Bounds the number of token transfers (and remaining accounts) one
///   transaction performs to a predictable, auditable maximum
/// - A batch of exactly this size is valid; one more is rejected
pub const MAX_RECIPIENTS_PER_DISTRIBUTION: usize = 100;

/// Maximum number of admin addresses a pool can hold
/// - Account space is fixed at allocation, so the admin list is capped
/// - The owner is never stored in this list; ownership is tracked separately
pub const MAX_ADMINS: usize = 16;

/// ===== PDA SEED CONSTANTS =====

/// Seed for pool state PDA derivation
/// - Used in: ["pool", token_mint, creator]
/// - One pool per (token, creator) pair
/// - The creator stays in the seeds so the PDA can keep signing for the
///   vault after ownership is transferred
pub const POOL_SEED: &str = "pool";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", pool_key]
/// - The vault is the pool's custody address; direct transfers land here
pub const VAULT_SEED: &str = "vault";

/// Seed for donation record PDA derivation
/// - Used in: ["donation", pool_key, donation_id_le]
/// - Dense ids starting at 0 give O(1) lookup by id
pub const DONATION_SEED: &str = "donation";

/// Seed for distribution record PDA derivation
/// - Used in: ["distribution", pool_key, distribution_id_le]
pub const DISTRIBUTION_SEED: &str = "distribution";

/// Seed for per-donor state PDA derivation
/// - Used in: ["donor", pool_key, donor_key]
/// - Tracks explicit donations only; reconciled direct transfers are
///   attributed to the zero-donor sentinel and never touch these accounts
pub const DONOR_SEED: &str = "donor";

/// Seed for per-donor donation index PDA derivation
/// - Used in: ["donor_donation", pool_key, donor_key, seq_le]
/// - seq is the donor's own dense counter; each account stores one global
///   donation id, forming the donor's donation-id list
pub const DONOR_DONATION_SEED: &str = "donor_donation";
