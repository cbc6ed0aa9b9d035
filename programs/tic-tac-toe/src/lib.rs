use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod instructions;
pub use instructions::*;

pub mod state;
pub use state::*;

#[program]
pub mod tic_tac_toe {
    use super::*;

    /// Creates a new match record. The signing payer becomes player one
    /// (X) and the supplied address becomes player two (O); the board
    /// starts empty with the turn counter at 1.
    pub fn setup_game(
        ctx: Context<SetupGameAccounts>,
        args: SetupGameArgs,
    ) -> Result<()> {
        setup_game_handler(ctx, args)
    }

    /// Applies one move by the signing player. Illegal moves are
    /// rejected with the first violated rule and leave the record
    /// unchanged.
    pub fn play(
        ctx: Context<PlayAccounts>,
        args: PlayArgs,
    ) -> Result<()> {
        play_handler(ctx, args)
    }

    /// Reinitializes the match record to its post-setup state, keeping
    /// both player slots. Restricted to player one (the record's
    /// creator); intended for repeatable testing against one record,
    /// not for normal play.
    pub fn reset_game(
        ctx: Context<ResetGameAccounts>
    ) -> Result<()> {
        reset_game_handler(ctx)
    }
}
