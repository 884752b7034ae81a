use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The two sides of a game. White is the maximizing side by convention.
pub enum Side
{
    White = 0,
    Black = 1,
}

impl Side
{
    /// Gets the other side.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::White => Self::Black,
            | Self::Black => Self::White,
        }
    }
}

impl std::fmt::Display for Side
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::White => "White",
            | Self::Black => "Black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Side
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s.trim().to_lowercase().as_str()
        {
            | "white" | "w" => Ok(Self::White),
            | "black" | "b" => Ok(Self::Black),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The kinds of pieces that carry material value. Kings are never counted.
pub enum PieceKind
{
    Pawn   = 0,
    Knight = 1,
    Bishop = 2,
    Rook   = 3,
    Queen  = 4,
}

impl PieceKind
{
    /// Returns the scored kinds in ascending value order.
    pub fn all() -> [PieceKind; 5]
    {
        [Self::Pawn, Self::Knight, Self::Bishop, Self::Rook, Self::Queen]
    }

    /// The material value of one piece of this kind, in pawns.
    pub const fn value(&self) -> Score
    {
        match self
        {
            | Self::Pawn => 1,
            | Self::Knight => 3,
            | Self::Bishop => 3,
            | Self::Rook => 5,
            | Self::Queen => 9,
        }
    }
}

impl std::fmt::Display for PieceKind
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Pawn => "Pawn",
            | Self::Knight => "Knight",
            | Self::Bishop => "Bishop",
            | Self::Rook => "Rook",
            | Self::Queen => "Queen",
        };
        write!(f, "{name}")
    }
}
