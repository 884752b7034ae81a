//! The adversarial search: a material evaluator, plain minimax, and root move selection.

pub mod evaluate;
pub mod scalars;
pub mod search;
pub mod select;

pub use evaluate::evaluate;
pub use scalars::*;
pub use search::search;
pub use select::{select_best_move, SearchResult};
