use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_token, validate_batch};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for a batch distribution
 *
 * Pays out up to MAX_RECIPIENTS_PER_DISTRIBUTION recipients in one call and
 * appends a single distribution record summarizing the batch.
 *
 * Remaining accounts: one token account per recipient, in batch order. Each
 * must hold the pool's mint and be owned by the matching recipients[i]
 * wallet. A single bad recipient account aborts the whole transaction; the
 * runtime rolls back every transfer already made, so funds are never
 * partially distributed.
 *
 * Access Control: Pool owner or any admin
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(recipients: Vec<Pubkey>)]
pub struct DistributeFunds<'info> {
    /// The pool state account holding the ledger
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Box<Account<'info, PoolState>>,

    /// The distribution record for this batch
    /// - Derived from: ["distribution", pool_key, next_distribution_id]
    /// - Sized to the batch; append-only after this instruction
    #[account(
        init,
        payer = distributor,
        space = DistributionRecord::space(recipients.len()),
        seeds = [
            DISTRIBUTION_SEED.as_bytes(),
            pool.key().as_ref(),
            pool.distribution_count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub distribution_record: Box<Account<'info, DistributionRecord>>,

    /// Token vault the funds leave from
    /// - Derived from: ["vault", pool_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The token mint for transfer_checked validation
    #[account(
        token::token_program = token_program,
        constraint = token_mint.key() == pool.token_mint @ PoolManagerError::TokenMintMismatch
    )]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The caller triggering the batch; must be owner or admin
    #[account(mut)]
    pub distributor: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Executes a batch distribution
 *
 * @param ctx - The account context; remaining accounts carry the recipient
 *              token accounts in batch order
 * @param recipients - Destination wallets, 1..=100 entries
 * @param amounts - Amounts paired with recipients by index
 *
 * Validation order (each failure has its own reason):
 * 1. Caller authorization, before anything else
 * 2. Batch shape: lengths match, non-empty, within the cap
 * 3. Entries: positive amounts, non-zero recipients
 * 4. Sum within the recorded pool balance
 */
pub fn handle_distribute_funds<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeFunds<'info>>,
    recipients: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    require!(
        ctx.accounts
            .pool
            .is_authorized_distributor(&ctx.accounts.distributor.key()),
        PoolManagerError::UnauthorizedDistributor
    );

    {
        let pool = &mut ctx.accounts.pool;
        require!(!pool.locked, PoolManagerError::ReentrantCall);
        pool.locked = true;
    }

    let total_amount = validate_batch(&recipients, &amounts)?;
    require!(
        total_amount <= ctx.accounts.pool.current_balance,
        PoolManagerError::InsufficientPoolBalance
    );
    require!(
        ctx.remaining_accounts.len() == recipients.len(),
        PoolManagerError::RecipientAccountsMismatch
    );

    let pool_key = ctx.accounts.pool.key();
    let token_mint_key = ctx.accounts.pool.token_mint;
    let creator_key = ctx.accounts.pool.creator;
    let pool_bump = ctx.accounts.pool.bump;

    // Pool PDA signs the outbound transfers as vault authority
    let pool_seeds = &[
        POOL_SEED.as_bytes(),
        token_mint_key.as_ref(),
        creator_key.as_ref(),
        &[pool_bump],
    ];
    let signer = &[&pool_seeds[..]];

    let decimals = ctx.accounts.token_mint.decimals;

    // ===== INTERACTIONS PHASE (Token Transfers) =====

    for (index, recipient) in recipients.iter().enumerate() {
        let recipient_account_info = &ctx.remaining_accounts[index];
        let recipient_token_account =
            InterfaceAccount::<TokenAccount>::try_from(recipient_account_info)
                .map_err(|_| error!(PoolManagerError::InvalidRecipientTokenAccount))?;
        require!(
            recipient_token_account.owner == *recipient
                && recipient_token_account.mint == token_mint_key,
            PoolManagerError::InvalidRecipientTokenAccount
        );

        transfer_token(
            ctx.accounts.pool.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            recipient_account_info.clone(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            amounts[index],
            decimals,
            Some(signer),
        )?;
    }

    // ===== EFFECTS PHASE (Ledger Updates) =====

    let distributor_key = ctx.accounts.distributor.key();

    let pool = &mut ctx.accounts.pool;
    let distribution_id = pool.record_distribution(total_amount)?;
    pool.locked = false;

    let record = &mut ctx.accounts.distribution_record;
    record.bump = ctx.bumps.distribution_record;
    record.id = distribution_id;
    record.distributor = distributor_key;
    record.total_amount = total_amount;
    record.timestamp = Clock::get()?.unix_timestamp;
    record.recipients = recipients.clone();
    record.amounts = amounts.clone();

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(FundsDistributed {
        pool: pool_key,
        distribution_id,
        distributor: distributor_key,
        recipients,
        amounts,
        total_amount,
    });

    Ok(())
}
