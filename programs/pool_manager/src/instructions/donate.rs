use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_token;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for an explicit donation
 *
 * This instruction pulls tokens from the donor into the pool vault and
 * appends one donation record:
 * - Creates the DonationRecord PDA for the pool's next donation id
 * - Creates or updates the donor's running totals (DonorState)
 * - Creates one DonorDonation index entry so the donor's donation-id list
 *   stays enumerable without scanning
 *
 * Access Control: Any account with sufficient balance and approval
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Donate<'info> {
    /// The pool state account holding the ledger
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, PoolState>>,

    /// The donation record for this inflow
    /// - Derived from: ["donation", pool_key, next_donation_id]
    /// - Append-only; never mutated or closed after this instruction
    #[account(
        init,
        payer = donor,
        space = DonationRecord::LEN,
        seeds = [
            DONATION_SEED.as_bytes(),
            pool.key().as_ref(),
            pool.donation_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub donation_record: Box<Account<'info, DonationRecord>>,

    /// Per-donor running totals
    /// - Created on the donor's first donation
    /// - Derived from: ["donor", pool_key, donor_key]
    #[account(
        init_if_needed,
        payer = donor,
        space = DonorState::LEN,
        seeds = [DONOR_SEED.as_bytes(), pool.key().as_ref(), donor.key().as_ref()],
        bump
    )]
    pub donor_state: Box<Account<'info, DonorState>>,

    /// Index entry mapping the donor's next sequence slot to this donation id
    /// - Derived from: ["donor_donation", pool_key, donor_key, donor_seq]
    #[account(
        init,
        payer = donor,
        space = DonorDonation::LEN,
        seeds = [
            DONOR_DONATION_SEED.as_bytes(),
            pool.key().as_ref(),
            donor.key().as_ref(),
            donor_state.donation_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub donor_donation: Box<Account<'info, DonorDonation>>,

    /// Token vault receiving the donation
    /// - Derived from: ["vault", pool_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Donor's token account the donation is pulled from
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = donor,
        token::token_program = token_program,
    )]
    pub donor_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The token mint for verification
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == pool.token_mint @ PoolManagerError::TokenMintMismatch
    )]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The donating account
    #[account(mut)]
    pub donor: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes an explicit donation
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Nominal amount to pull from the donor's token account
 *
 * The recorded amount is the vault balance delta, not the nominal amount:
 * for transfer-fee mints the two differ, and recording anything other than
 * what the vault actually received would let the ledger claim more custody
 * than exists.
 */
pub fn handle_donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
    {
        let pool = &mut ctx.accounts.pool;
        // Guard against a malicious token program calling back in mid-transfer
        require!(!pool.locked, PoolManagerError::ReentrantCall);
        pool.locked = true;
    }

    // Rejected before any external call
    require!(amount > 0, PoolManagerError::InvalidAmount);

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let balance_before = ctx.accounts.token_vault.amount;

    transfer_token(
        ctx.accounts.donor.to_account_info(),
        ctx.accounts.donor_token_account.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        None, // Donor-signed transfer, no PDA seeds
    )?;

    // Measure what the vault actually received
    ctx.accounts.token_vault.reload()?;
    let received = ctx
        .accounts
        .token_vault
        .amount
        .checked_sub(balance_before)
        .ok_or(PoolManagerError::ArithmeticOverflow)?;
    require!(received > 0, PoolManagerError::NothingReceived);

    // ===== EFFECTS PHASE (Ledger Updates) =====

    let donor_key = ctx.accounts.donor.key();

    let pool = &mut ctx.accounts.pool;
    let donation_id = pool.record_donation(received)?;
    let total_donated = pool.total_donated;
    let pool_key = pool.key();
    pool.locked = false;

    let donor_state = &mut ctx.accounts.donor_state;
    if donor_state.donor == Pubkey::default() {
        donor_state.bump = ctx.bumps.donor_state;
        donor_state.donor = donor_key;
    }
    // Same pre-increment counter the donor_donation seeds were derived
    // from, so seq names the slot that account occupies
    let donor_seq = donor_state.record(received)?;

    let record = &mut ctx.accounts.donation_record;
    record.bump = ctx.bumps.donation_record;
    record.id = donation_id;
    record.donor = donor_key;
    record.amount = received;
    record.timestamp = Clock::get()?.unix_timestamp;
    record.is_direct = false;

    let donor_donation = &mut ctx.accounts.donor_donation;
    donor_donation.bump = ctx.bumps.donor_donation;
    donor_donation.seq = donor_seq;
    donor_donation.donation_id = donation_id;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(DonationReceived {
        pool: pool_key,
        donation_id,
        donor: donor_key,
        amount: received,
        is_direct: false,
        total_donated,
    });

    Ok(())
}
