use anchor_lang::prelude::*;

use crate::state::error::TicTacToeError;

/// The mark a player slot owns. Player one always plays X, player two
/// always plays O.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sign {
    X,
    O,
}

/// 3x3 grid of marks, indexed by [row][column]. `None` is an empty cell.
pub type Board = [[Option<Sign>; 3]; 3];

/// A move request. Only ever an instruction argument, never persisted.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub row: u8,
    pub column: u8,
}

/// Match outcome. Once a record leaves `Active` it never returns and the
/// terminal value never changes, so `Won` always carries its winner.
#[derive(AnchorDeserialize, AnchorSerialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Active,
    Tied,
    Won { winner: Pubkey },
}

#[account]
#[derive(PartialEq, Eq, Debug)]
/// One match between two players. Every invariant (whose turn it is,
/// which tiles are occupied, whether the match has ended) is derivable
/// from these fields alone; the only way to mutate them is through
/// `new`, `play` and `reset` below.
pub struct Game {
    /// Index 0 is player one (X, odd turns), index 1 is player two
    /// (O, even turns). Fixed at setup.
    players: [Pubkey; 2],
    /// Starts at 1 and advances by one per accepted move, except for the
    /// move that ends the match. Parity selects the acting player.
    turn: u32,
    board: Board,
    state: GameState,
}

impl Space for Game {
    const INIT_SPACE: usize = 64 + // players
        4 +  // turn
        18 + // board, 9 * (1 + 1)
        33;  // state tag + winner
}

impl Game {
    pub fn new(player_one: Pubkey, player_two: Pubkey) -> Result<Self> {
        require_keys_neq!(player_one, player_two, TicTacToeError::InvalidPlayers);

        Ok(Self {
            players: [player_one, player_two],
            turn: 1,
            board: [[None; 3]; 3],
            state: GameState::Active,
        })
    }

    /// Wipes the record back to the state `new` produced, keeping the
    /// player slots.
    pub fn reset(&mut self) {
        self.turn = 1;
        self.board = [[None; 3]; 3];
        self.state = GameState::Active;
    }

    pub fn players(&self) -> [Pubkey; 2] {
        self.players
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == GameState::Active
    }

    pub fn is_player_one(&self, player: &Pubkey) -> bool {
        self.players[0].eq(player)
    }

    fn current_player_index(&self) -> usize {
        if self.turn % 2 == 1 { 0 } else { 1 }
    }

    pub fn current_player(&self) -> Pubkey {
        self.players[self.current_player_index()]
    }

    fn current_sign(&self) -> Sign {
        match self.current_player_index() {
            0 => Sign::X,
            _ => Sign::O,
        }
    }

    /// Decides whether `player` may place a mark on `tile` right now.
    /// Pure; the checks run in a fixed order and the first violated one
    /// is reported:
    /// 1. the match must still be active,
    /// 2. the tile must be on the board (checked before any lookup),
    /// 3. it must be `player`'s turn per the counter's parity,
    /// 4. the tile must be empty.
    pub fn validate_move(&self, player: &Pubkey, tile: &Tile) -> Result<()> {
        require!(self.is_active(), TicTacToeError::GameAlreadyEnded);

        require!(
            tile.row <= 2 && tile.column <= 2,
            TicTacToeError::TileOutOfBounds
        );

        require_keys_eq!(
            self.current_player(),
            *player,
            TicTacToeError::NotPlayersTurn
        );

        require!(
            self.board[usize::from(tile.row)][usize::from(tile.column)].is_none(),
            TicTacToeError::TileAlreadySet
        );

        Ok(())
    }

    /// Applies one move. On any rejection the record is untouched. On
    /// success the mark is placed and the outcome re-evaluated: a move
    /// that ends the match freezes the turn counter at the number of
    /// moves played, otherwise the counter advances to the opponent.
    pub fn play(&mut self, player: &Pubkey, tile: &Tile) -> Result<()> {
        self.validate_move(player, tile)?;

        let sign = self.current_sign();

        self.board[usize::from(tile.row)][usize::from(tile.column)] = Some(sign);

        match self.evaluate_outcome(sign) {
            GameState::Active => {
                // Overflow not possible, the board bounds the turn count
                self.turn += 1;
            }
            terminal => {
                self.state = terminal;
            }
        }

        Ok(())
    }

    /// Determines the outcome after `sign` was just placed. Only the
    /// mover's triples are scanned, since the opponent's win condition
    /// cannot newly become true on this move; a win on the ninth cell
    /// therefore reports `Won`, not `Tied`.
    pub fn evaluate_outcome(&self, sign: Sign) -> GameState {
        if self.is_won_by(sign) {
            return GameState::Won {
                winner: self.current_player(),
            };
        }

        if self.is_board_full() {
            return GameState::Tied;
        }

        GameState::Active
    }

    fn is_won_by(&self, sign: Sign) -> bool {
        for line in 0..3 {
            if self.is_sign_trio([(line, 0), (line, 1), (line, 2)], sign)
                || self.is_sign_trio([(0, line), (1, line), (2, line)], sign)
            {
                return true;
            }
        }

        self.is_sign_trio([(0, 0), (1, 1), (2, 2)], sign)
            || self.is_sign_trio([(0, 2), (1, 1), (2, 0)], sign)
    }

    fn is_sign_trio(&self, trio: [(usize, usize); 3], sign: Sign) -> bool {
        trio.iter()
            .all(|&(row, column)| self.board[row][column] == Some(sign))
    }

    fn is_board_full(&self) -> bool {
        self.board.iter().flatten().all(Option::is_some)
    }
}
