use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The number of plies left to search.
pub struct Depth(u8);

impl From<u8> for Depth
{
    fn from(value: u8) -> Self
    {
        Depth::new(value)
    }
}

impl From<Depth> for u8
{
    fn from(value: Depth) -> Self
    {
        value.0
    }
}

impl std::fmt::Display for Depth
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Depth
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        s.trim().parse::<u8>().map(Depth::from).map_err(|_| Error::for_parse::<Self>(s.into()))
    }
}

impl Depth
{
    /// Zero plies; the search evaluates statically.
    pub const NIL: Depth = Depth::new(0);

    /// One ply.
    pub const PLY: Depth = Depth::new(1);

    /// Constructs a new depth.
    pub const fn new(plies: u8) -> Depth
    {
        Depth(plies)
    }

    /// Whether no plies remain.
    pub const fn is_nil(&self) -> bool
    {
        self.0 == 0
    }

    /// The depth one ply further down the tree. Never goes below zero.
    pub const fn next(&self) -> Depth
    {
        Depth(self.0.saturating_sub(1))
    }

    /// The number of plies as a plain integer.
    pub const fn plies(&self) -> u8
    {
        self.0
    }
}
