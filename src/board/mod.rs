//! The rules engine used by the game: a thin, undoable position over the `chess` crate.

mod history;
mod notation;
mod outcome;
mod position;
mod printers;

pub use chess::ChessMove;
pub use history::{Entry, History};
pub use outcome::Outcome;
pub use position::Position;

use crate::prelude::*;

impl From<Side> for chess::Color
{
    fn from(value: Side) -> Self
    {
        match value
        {
            | Side::White => chess::Color::White,
            | Side::Black => chess::Color::Black,
        }
    }
}

impl From<chess::Color> for Side
{
    fn from(value: chess::Color) -> Self
    {
        match value
        {
            | chess::Color::White => Side::White,
            | chess::Color::Black => Side::Black,
        }
    }
}

impl From<PieceKind> for chess::Piece
{
    fn from(value: PieceKind) -> Self
    {
        match value
        {
            | PieceKind::Pawn => chess::Piece::Pawn,
            | PieceKind::Knight => chess::Piece::Knight,
            | PieceKind::Bishop => chess::Piece::Bishop,
            | PieceKind::Rook => chess::Piece::Rook,
            | PieceKind::Queen => chess::Piece::Queen,
        }
    }
}
