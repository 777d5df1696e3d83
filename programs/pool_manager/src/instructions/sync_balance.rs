use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_spl::token_interface::TokenAccount;

/**
 * Account context for balance reconciliation
 *
 * Tokens can land in the vault through a raw transfer that bypasses donate.
 * The program cannot observe those transfers individually; it can only
 * compare the vault's actual balance against the recorded balance. This
 * instruction folds any surplus into a single unattributed donation record.
 *
 * The record account is created manually in the handler rather than with an
 * init constraint: when nothing is unaccounted the call must be a clean
 * no-op that allocates nothing, and init would allocate unconditionally.
 *
 * Access Control: Anyone; the payer funds the record's rent when one is
 * created
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SyncBalance<'info> {
    /// The pool state account holding the ledger
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, PoolState>,

    /// Token vault whose actual balance is compared against the ledger
    /// - Derived from: ["vault", pool_key]
    #[account(
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Destination for the coalesced donation record, if one is created
    /// - Must be the DonationRecord PDA for the pool's next donation id
    /// CHECK: Verified against the derived record address in the handler;
    /// created and initialized there only when a surplus exists
    #[account(mut)]
    pub donation_record: UncheckedAccount<'info>,

    /// Caller funding the record's rent
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Reconciles recorded accounting with actual custody
 *
 * Idempotent: a second call with no intervening transfer finds no surplus
 * and writes nothing. All raw transfers since the last reconciliation are
 * coalesced into one record carrying the zero-donor sentinel.
 */
pub fn handle_sync_balance(ctx: Context<SyncBalance>) -> Result<()> {
    require!(!ctx.accounts.pool.locked, PoolManagerError::ReentrantCall);

    let unaccounted = ctx
        .accounts
        .pool
        .unaccounted(ctx.accounts.token_vault.amount);
    if unaccounted == 0 {
        msg!("sync_balance: ledger matches custody, nothing to record");
        return Ok(());
    }

    let pool = &mut ctx.accounts.pool;
    let donation_id = pool.record_donation(unaccounted)?;
    let total_donated = pool.total_donated;
    let pool_key = pool.key();

    // The caller supplies the record account; pin it to the PDA for the id
    // just assigned so records stay dense and lookup-by-id keeps working
    let (expected_record, record_bump) = DonationRecord::pda(&pool_key, donation_id);
    let record_info = ctx.accounts.donation_record.to_account_info();
    require!(
        record_info.key() == expected_record,
        PoolManagerError::InvalidDonationRecordAccount
    );

    let id_bytes = donation_id.to_le_bytes();
    let record_seeds: &[&[u8]] = &[
        DONATION_SEED.as_bytes(),
        pool_key.as_ref(),
        &id_bytes,
        &[record_bump],
    ];
    create_account(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: ctx.accounts.payer.to_account_info(),
                to: record_info.clone(),
            },
            &[record_seeds],
        ),
        Rent::get()?.minimum_balance(DonationRecord::LEN),
        DonationRecord::LEN as u64,
        &crate::ID,
    )?;

    let record = DonationRecord {
        bump: record_bump,
        id: donation_id,
        donor: Pubkey::default(),
        amount: unaccounted,
        timestamp: Clock::get()?.unix_timestamp,
        is_direct: true,
    };
    {
        let mut data = record_info.try_borrow_mut_data()?;
        let mut cursor: &mut [u8] = &mut data;
        record.try_serialize(&mut cursor)?;
    }

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(DonationReceived {
        pool: pool_key,
        donation_id,
        donor: Pubkey::default(),
        amount: unaccounted,
        is_direct: true,
        total_donated,
    });

    Ok(())
}
