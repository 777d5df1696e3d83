use crate::constants::*;
use crate::error::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Read-only accessors
 *
 * These instructions mutate nothing and return their result as Anchor
 * return data, so an off-chain caller gets one consistent snapshot from a
 * single simulated call instead of stitching together separate account
 * fetches. Role predicates (is_owner / is_admin) live directly on
 * PoolState for programs that already hold the account.
 */

/// Context for pool-level reads
#[derive(Accounts)]
pub struct ViewPool<'info> {
    pub pool: Account<'info, PoolState>,
}

pub fn handle_get_contract_stats(ctx: Context<ViewPool>) -> Result<PoolStats> {
    Ok(ctx.accounts.pool.stats())
}

/// Context for looking up one donation record by id
///
/// The record is deliberately untyped: a seeds-pinned typed account would
/// fail Anchor's account validation for ids that have no record yet, and
/// the out-of-range case must surface as the lookup error instead. The
/// handler range-checks the id against the pool counter first, then pins
/// the account to the derived record address and deserializes it.
#[derive(Accounts)]
pub struct ViewDonation<'info> {
    pub pool: Account<'info, PoolState>,

    /// CHECK: Range-checked via the pool's donation counter and verified
    /// against the derived record PDA in the handler before deserialization
    pub donation_record: UncheckedAccount<'info>,
}

pub fn handle_get_donation(ctx: Context<ViewDonation>, id: u64) -> Result<DonationView> {
    // Lookup error first; for in-range ids the record account always exists
    ctx.accounts.pool.check_donation_id(id)?;

    let pool_key = ctx.accounts.pool.key();
    let (expected_record, _) = DonationRecord::pda(&pool_key, id);
    let record_info = ctx.accounts.donation_record.to_account_info();
    require!(
        record_info.key() == expected_record,
        PoolManagerError::InvalidDonationRecordAccount
    );

    // Account::<DonationRecord>::try_from needs a `&'info AccountInfo<'info>`,
    // which a handler-local AccountInfo can't provide, so its owner and
    // discriminator checks are inlined here
    if record_info.owner == &anchor_lang::system_program::ID && record_info.lamports() == 0 {
        return Err(anchor_lang::error::ErrorCode::AccountNotInitialized.into());
    }
    if record_info.owner != &DonationRecord::owner() {
        return Err(
            Error::from(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram)
                .with_pubkeys((*record_info.owner, DonationRecord::owner())),
        );
    }
    let mut data: &[u8] = &record_info.try_borrow_data()?;
    let record = DonationRecord::try_deserialize(&mut data)?;
    Ok(DonationView {
        id: record.id,
        donor: record.donor,
        amount: record.amount,
        timestamp: record.timestamp,
        is_direct: record.is_direct,
    })
}

/// Context for looking up one distribution record by id
///
/// Untyped for the same reason as ViewDonation: out-of-range ids must
/// fail with the lookup error, not account validation.
#[derive(Accounts)]
pub struct ViewDistribution<'info> {
    pub pool: Account<'info, PoolState>,

    /// CHECK: Range-checked via the pool's distribution counter and
    /// verified against the derived record PDA in the handler before
    /// deserialization
    pub distribution_record: UncheckedAccount<'info>,
}

pub fn handle_get_distribution(
    ctx: Context<ViewDistribution>,
    id: u64,
) -> Result<DistributionView> {
    ctx.accounts.pool.check_distribution_id(id)?;

    let pool_key = ctx.accounts.pool.key();
    let (expected_record, _) = DistributionRecord::pda(&pool_key, id);
    let record_info = ctx.accounts.distribution_record.to_account_info();
    require!(
        record_info.key() == expected_record,
        PoolManagerError::InvalidDistributionRecordAccount
    );

    // Same lifetime constraint as get_donation: inline the owner and
    // discriminator checks that Account::try_from would perform
    if record_info.owner == &anchor_lang::system_program::ID && record_info.lamports() == 0 {
        return Err(anchor_lang::error::ErrorCode::AccountNotInitialized.into());
    }
    if record_info.owner != &DistributionRecord::owner() {
        return Err(
            Error::from(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram)
                .with_pubkeys((*record_info.owner, DistributionRecord::owner())),
        );
    }
    let mut data: &[u8] = &record_info.try_borrow_data()?;
    let record = DistributionRecord::try_deserialize(&mut data)?;
    Ok(DistributionView {
        id: record.id,
        distributor: record.distributor,
        total_amount: record.total_amount,
        timestamp: record.timestamp,
        recipients: record.recipients.clone(),
        amounts: record.amounts.clone(),
    })
}

/// Context for reading a donor's running totals
#[derive(Accounts)]
#[instruction(donor: Pubkey)]
pub struct ViewDonor<'info> {
    pub pool: Account<'info, PoolState>,

    /// Absent for donors with no explicit donations; reads as all zeros.
    /// Direct transfers never create donor state
    #[account(
        seeds = [DONOR_SEED.as_bytes(), pool.key().as_ref(), donor.as_ref()],
        bump
    )]
    pub donor_state: Option<Account<'info, DonorState>>,
}

pub fn handle_get_donor_summary(ctx: Context<ViewDonor>, donor: Pubkey) -> Result<DonorSummary> {
    let summary = match &ctx.accounts.donor_state {
        Some(state) => DonorSummary {
            donor,
            total_donated: state.total_donated,
            donation_count: state.donation_count,
        },
        None => DonorSummary {
            donor,
            total_donated: 0,
            donation_count: 0,
        },
    };
    Ok(summary)
}

/// Donation record fields returned by get_donation
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DonationView {
    pub id: u64,
    pub donor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
    pub is_direct: bool,
}

/// Distribution record fields returned by get_distribution
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DistributionView {
    pub id: u64,
    pub distributor: Pubkey,
    pub total_amount: u64,
    pub timestamp: i64,
    pub recipients: Vec<Pubkey>,
    pub amounts: Vec<u64>,
}

/// Per-donor totals returned by get_donor_summary
///
/// donation_count is also the number of DonorDonation index entries; the
/// donor's full donation-id list is read by walking those PDAs with seq in
/// 0..donation_count
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DonorSummary {
    pub donor: Pubkey,
    pub total_donated: u64,
    pub donation_count: u64,
}
