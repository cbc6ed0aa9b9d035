use anchor_lang::prelude::*;

use crate::{Game, SetupGameEvent};

/// Arguments for creating a new match.
/// - player_two: the opponent's address. Only the address is needed;
///   listing the opponent as an account would lock it for the whole
///   transaction even though it is neither read nor written.
#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct SetupGameArgs {
    pub player_two: Pubkey,
}

#[derive(Accounts)]
pub struct SetupGameAccounts<'info> {
    #[account(
        init,
        payer = player_one,
        space = 8 + Game::INIT_SPACE
    )]
    pub game: Account<'info, Game>,

    #[account(
        mut
    )]
    pub player_one: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn setup_game_handler(
    ctx: Context<SetupGameAccounts>,
    args: SetupGameArgs,
) -> Result<()> {

    let game = &mut ctx.accounts.game;

    game.set_inner(Game::new(ctx.accounts.player_one.key(), args.player_two)?);

    emit!(
        SetupGameEvent{
            game: game.key(),
            players: game.players()
        }
    );

    Ok(())
}
