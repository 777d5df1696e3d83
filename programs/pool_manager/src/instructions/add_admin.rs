use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for granting distribution rights
 *
 * Access Control: Only the current owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AddAdmin<'info> {
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

pub fn handle_add_admin(ctx: Context<AddAdmin>, new_admin: Pubkey) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    pool.add_admin(new_admin)?;
    let pool_key = pool.key();

    emit_cpi!(AdminAdded {
        pool: pool_key,
        admin: new_admin,
    });

    Ok(())
}
