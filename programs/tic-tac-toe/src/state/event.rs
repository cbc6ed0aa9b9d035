use anchor_lang::prelude::*;

use crate::{GameState, Tile};

#[event]
pub struct SetupGameEvent {
    pub game: Pubkey,
    pub players: [Pubkey; 2],
}

#[event]
pub struct PlayEvent {
    pub game: Pubkey,
    pub player: Pubkey,
    pub tile: Tile,
    pub turn: u32,
    pub state: GameState,
}

#[event]
pub struct ResetGameEvent {
    pub game: Pubkey,
}
