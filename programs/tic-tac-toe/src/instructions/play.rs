use anchor_lang::prelude::*;

use crate::{Game, PlayEvent, Tile};

#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct PlayArgs {
    pub tile: Tile,
}

#[derive(Accounts)]
pub struct PlayAccounts<'info> {
    #[account(
        mut
    )]
    pub game: Account<'info, Game>,

    pub player_to_move: Signer<'info>,
}

pub fn play_handler(ctx: Context<PlayAccounts>, args: PlayArgs) -> Result<()> {

    let game = &mut ctx.accounts.game;

    // The record itself decides legality; a rejection aborts the
    // transaction before the account is written back.
    game.play(ctx.accounts.player_to_move.key, &args.tile)?;

    emit!(
        PlayEvent{
            game: game.key(),
            player: ctx.accounts.player_to_move.key(),
            tile: args.tile,
            turn: game.turn(),
            state: game.state()
        }
    );

    Ok(())
}
