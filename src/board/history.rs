use chess::{Board, ChessMove};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A move paired with everything needed to take it back.
pub struct Entry
{
    pub mv:             ChessMove,
    pub board:          Board,
    pub halfmove_clock: u32,
}

impl std::fmt::Display for Entry
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{: <5} (clock {})", self.mv.to_string(), self.halfmove_clock)
    }
}

#[derive(Clone, Debug, Default)]
/// A linear stack of played moves.
///
/// The stack keeps its capacity when moves are taken back, so a search that plays and undoes moves repeatedly stops
/// allocating once it has reached its deepest line.
pub struct History
{
    past: Vec<Entry>,
}

impl History
{
    /// Determines whether or not the history is empty.
    pub fn is_empty(&self) -> bool
    {
        self.past.is_empty()
    }

    /// A read-only iter to past moves, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry>
    {
        self.past.iter()
    }

    /// Gets the length of the history.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// Records a move.
    pub fn play(&mut self, entry: Entry)
    {
        self.past.push(entry);
    }

    /// Gets the last move played in this line, if one exists.
    pub fn prev(&self) -> Option<&Entry>
    {
        self.past.last()
    }

    /// Removes and returns the last move played, if one exists.
    pub fn undo(&mut self) -> Option<Entry>
    {
        self.past.pop()
    }
}
