use anchor_lang::prelude::*;

#[error_code]
pub enum TicTacToeError {
    #[msg("Player one and player two must be different addresses.")]
    InvalidPlayers,
    #[msg("The match has already ended.")]
    GameAlreadyEnded,
    #[msg("The requested tile is outside the board.")]
    TileOutOfBounds,
    #[msg("It is not this player's turn to move.")]
    NotPlayersTurn,
    #[msg("The requested tile is already occupied.")]
    TileAlreadySet,
}
