use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for initializing a donation pool
 *
 * This instruction creates the pool's accounting state and its token vault:
 * - Creates the pool state PDA holding all counters and access control
 * - Creates a token vault PDA with the pool PDA as token authority
 * - Sets the creator as the initial owner; the admin list starts empty
 *
 * Access Control: Anyone may create a pool; the creator becomes its owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializePool<'info> {
    /// The pool state account (PDA)
    /// - Stores the ledger counters, record counts, owner and admin set
    /// - Derived from: ["pool", token_mint, creator]
    #[account(
        init,
        payer = creator,
        space = PoolState::LEN,
        seeds = [POOL_SEED.as_bytes(), token_mint.key().as_ref(), creator.key().as_ref()],
        bump
    )]
    pub pool: Account<'info, PoolState>,

    /// Token vault account (PDA) holding the pooled funds
    /// - Controlled by the pool PDA as token authority
    /// - Derived from: ["vault", pool_key]
    #[account(
        init,
        token::mint = token_mint,
        token::authority = pool,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump,
        payer = creator,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint this pool exclusively accounts for
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The creator and initial owner of the pool
    #[account(mut)]
    pub creator: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_initialize_pool(ctx: Context<InitializePool>) -> Result<()> {
    // The mint is a typed account so a nonexistent mint cannot reach this
    // point, but the zero sentinel is rejected explicitly since it doubles
    // as the unattributed-donor marker elsewhere
    require!(
        ctx.accounts.token_mint.key() != Pubkey::default(),
        PoolManagerError::InvalidTokenMint
    );

    let pool = &mut ctx.accounts.pool;
    pool.bump = ctx.bumps.pool;
    pool.creator = ctx.accounts.creator.key();
    pool.owner = ctx.accounts.creator.key();
    pool.token_mint = ctx.accounts.token_mint.key();
    pool.token_vault = ctx.accounts.token_vault.key();
    // Counters, admin list and the reentrancy flag keep their defaults

    emit_cpi!(PoolInitialized {
        pool: pool.key(),
        owner: pool.owner,
        token_mint: pool.token_mint,
        token_vault: pool.token_vault,
    });

    Ok(())
}
