use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;

/**
 * Account context for transferring pool ownership
 *
 * The pool PDA address stays fixed across transfers; only the owner field
 * changes. The previous owner keeps no rights afterwards, and admins they
 * appointed remain in place until the new owner removes them.
 *
 * Access Control: Only the current owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// The pool state account
    #[account(
        mut,
        seeds = [POOL_SEED.as_bytes(), pool.token_mint.as_ref(), pool.creator.as_ref()],
        bump = pool.bump
    )]
    pub pool: Account<'info, PoolState>,

    /// The current pool owner
    #[account(
        constraint = owner.key() == pool.owner @ PoolManagerError::OnlyOwner
    )]
    pub owner: Signer<'info>,
}

pub fn handle_transfer_ownership(
    ctx: Context<TransferOwnership>,
    new_owner: Pubkey,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let previous_owner = pool.transfer_ownership_to(new_owner)?;
    let pool_key = pool.key();

    emit_cpi!(OwnershipTransferred {
        pool: pool_key,
        previous_owner,
        new_owner,
    });

    Ok(())
}
