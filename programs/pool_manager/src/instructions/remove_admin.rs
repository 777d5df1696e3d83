use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for revoking distribution rights
 *
 * Access Control: Only the current owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct RemoveAdmin<'info> {
    /// The pool state account holding the admin set
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, PoolState>,

    /// The pool owner
    #[account(
        constraint = owner.key() == pool.owner @ PoolManagerError::OnlyOwner
    )]
    pub owner: Signer<'info>,
}

pub fn handle_remove_admin(ctx: Context<RemoveAdmin>, admin: Pubkey) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.remove_admin(&admin)?;
    let pool_key = pool.key();

    emit_cpi!(AdminRemoved {
        pool: pool_key,
        admin,
    });

    Ok(())
}
