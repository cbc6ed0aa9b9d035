pub mod game;
pub use game::*;

pub mod error;
pub use error::*;

pub mod event;
pub use event::*;
