//! Move legality and turn order for ply.

pub mod apply;
pub mod command;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;

pub use apply::{AppliedMove, perform_legal_move};
pub use command::MoveCommand;
pub use error::CommandError;
pub use game::GameEngine;
pub use player::Player;
pub use rules::{can_move_to, movement_range};
