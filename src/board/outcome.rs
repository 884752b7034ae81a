use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The reason a game has ended.
pub enum Outcome
{
    Checkmate
    {
        winner: Side,
    },
    Stalemate,
    InsufficientMaterial,
    SeventyFiveMoves,
    FivefoldRepetition,
}

impl Outcome
{
    /// The side that won, if the game was not drawn.
    pub fn winner(&self) -> Option<Side>
    {
        match self
        {
            | Self::Checkmate { winner } => Some(*winner),
            | _ => None,
        }
    }
}

impl std::fmt::Display for Outcome
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            | Self::Checkmate { winner } => write!(f, "Checkmate! {} wins!", winner),
            | Self::Stalemate => write!(f, "Stalemate! It's a draw!"),
            | Self::InsufficientMaterial => write!(f, "Draw due to insufficient material!"),
            | Self::SeventyFiveMoves => write!(f, "Draw by the seventy-five-move rule!"),
            | Self::FivefoldRepetition => write!(f, "Draw by fivefold repetition!"),
        }
    }
}
