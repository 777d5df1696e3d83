use anchor_lang::prelude::*;

use crate::constants::MAX_RECIPIENTS_PER_DISTRIBUTION;
use crate::error::PoolManagerError;

/// Validates a distribution batch and returns its total amount
///
/// Checks run in a fixed order so every malformed batch fails with the same
/// reason no matter which entries are bad:
/// 1. recipients and amounts must pair up by index
/// 2. the batch must be non-empty
/// 3. the batch must not exceed the hard recipient cap
/// 4. every amount must be strictly positive
/// 5. every recipient must be a real address
///
/// The balance bound is not checked here; it belongs to the ledger
/// (PoolState::record_distribution), which holds the current balance.
pub fn validate_batch(recipients: &[Pubkey], amounts: &[u64]) -> Result<u64> {
    require!(
        recipients.len() == amounts.len(),
        PoolManagerError::LengthMismatch
    );
    require!(!recipients.is_empty(), PoolManagerError::NoRecipients);
    require!(
        recipients.len() <= MAX_RECIPIENTS_PER_DISTRIBUTION,
        PoolManagerError::TooManyRecipients
    );

    for amount in amounts {
        require!(*amount > 0, PoolManagerError::InvalidAmount);
    }
    for recipient in recipients {
        require!(
            *recipient != Pubkey::default(),
            PoolManagerError::ZeroRecipientAddress
        );
    }

    let mut total: u64 = 0;
    for amount in amounts {
        total = total
            .checked_add(*amount)
            .ok_or(PoolManagerError::ArithmeticOverflow)?;
    }

    Ok(total)
}
