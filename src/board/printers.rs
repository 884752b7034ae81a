use chess::{Color, File, Piece, Rank, Square};
use itertools::Itertools;

use super::Position;

impl std::fmt::Display for Position
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        for rank in (0..8).rev()
        {
            let row = (0..8)
                .map(|file| {
                    let square = Square::make_square(Rank::from_index(rank), File::from_index(file));
                    match (self.board().piece_on(square), self.board().color_on(square))
                    {
                        | (Some(piece), Some(color)) => symbol(piece, color),
                        | _ => '.',
                    }
                })
                .join(" ");
            writeln!(f, "{} {} ", rank + 1, row)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

/// The figurine for a piece, hollow for White and filled for Black.
fn symbol(piece: Piece, color: Color) -> char
{
    match (piece, color)
    {
        | (Piece::Pawn, Color::White) => '♙',
        | (Piece::Knight, Color::White) => '♘',
        | (Piece::Bishop, Color::White) => '♗',
        | (Piece::Rook, Color::White) => '♖',
        | (Piece::Queen, Color::White) => '♕',
        | (Piece::King, Color::White) => '♔',
        | (Piece::Pawn, Color::Black) => '♟',
        | (Piece::Knight, Color::Black) => '♞',
        | (Piece::Bishop, Color::Black) => '♝',
        | (Piece::Rook, Color::Black) => '♜',
        | (Piece::Queen, Color::Black) => '♛',
        | (Piece::King, Color::Black) => '♚',
    }
}
