//! Game rules for N-in-a-row.
//!
//! Pure functions for evaluating board contents. Rules are separated from
//! board storage so the transition and the invariant checks share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{check_winner, find_cluster, winning_cells};
