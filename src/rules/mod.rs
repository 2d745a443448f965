//! Game rules for Caro
//!
//! Five or more identical marks in a row win; there are no captures and no
//! forbidden moves.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winner, has_winning_line_through, winning_line};
