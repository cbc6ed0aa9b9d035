use anchor_lang::prelude::*;

use crate::{Game, ResetGameEvent, TicTacToeError};

#[derive(Accounts)]
pub struct ResetGameAccounts<'info> {
    #[account(
        mut
    )]
    pub game: Account<'info, Game>,

    pub player_one: Signer<'info>,
}

#[inline(always)]
fn checks(ctx: &Context<ResetGameAccounts>) -> Result<()> {

    // Only the match creator may wipe the record back to its
    // post-setup state.
    require!(
        ctx.accounts.game.is_player_one(ctx.accounts.player_one.key),
        TicTacToeError::InvalidPlayers
    );

    Ok(())
}

pub fn reset_game_handler(ctx: Context<ResetGameAccounts>) -> Result<()> {

    checks(&ctx)?;

    let game = &mut ctx.accounts.game;

    game.reset();

    emit!(
        ResetGameEvent{
            game: game.key()
        }
    );

    Ok(())
}
