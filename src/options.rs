use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Parser, Debug, Default)]
#[command(version, about, long_about = None)]
/// Options for a game against the engine. Anything left unset is asked for interactively.
pub struct Options
{
    #[arg(short, long)]
    /// the side you play (white or black)
    pub colour: Option<Side>,

    #[arg(short, long)]
    /// engine strength: 1 (easy), 2 (medium) or 3 (hard)
    pub difficulty: Option<Difficulty>,

    #[arg(long)]
    /// start from this FEN instead of the initial position
    pub fen: Option<String>,

    #[arg(short, long, default_value = "warn")]
    /// lowest log level to show
    pub log_level: String,
}

impl Options
{
    /// Builds the starting position, from the FEN option if there is one.
    pub fn position(&self) -> Result<Position>
    {
        match &self.fen
        {
            | Some(fen) => Position::from_fen(fen).map_err(|err| err.chain(Error::empty(Kind::InvalidOption))),
            | None => Ok(Position::default()),
        }
    }
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// How hard the engine plays, which is how deep it searches.
pub enum Difficulty
{
    Easy   = 1,
    Medium = 2,
    Hard   = 3,
}

impl Difficulty
{
    /// The search depth used at this difficulty.
    pub fn depth(&self) -> Depth
    {
        match self
        {
            | Self::Easy => Depth::new(1),
            | Self::Medium => Depth::new(2),
            | Self::Hard => Depth::new(3),
        }
    }
}

impl std::fmt::Display for Difficulty
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::Easy => "Easy",
            | Self::Medium => "Medium",
            | Self::Hard => "Hard",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Difficulty
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s.trim()
        {
            | "1" => Ok(Self::Easy),
            | "2" => Ok(Self::Medium),
            | "3" => Ok(Self::Hard),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
