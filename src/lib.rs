pub mod agent;
pub mod board;
pub(crate) mod error;
pub mod game;
pub mod options;
pub mod rules;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        board::{ChessMove, Outcome, Position},
        error::{Error, Kind, Result},
        game::Game,
        options::{Difficulty, Options},
        rules::*,
    };
}
