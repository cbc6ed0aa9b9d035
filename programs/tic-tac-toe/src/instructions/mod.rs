pub mod setup_game;
pub use setup_game::*;

pub mod play;
pub use play::*;

pub mod reset_game;
pub use reset_game::*;
