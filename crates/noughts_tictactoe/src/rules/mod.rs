//! Rules for deciding how a game ends.

mod win;

pub use win::evaluate_win;
