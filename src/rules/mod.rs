use std::ops::{Deref, DerefMut};

pub mod piece;

pub use piece::{PieceKind, Side};

/// The contract a rules engine fulfils for the search.
///
/// The search never copies a position. It applies a move, recurses, and undoes that same move, so `apply` and `undo`
/// must be exact inverses. Implementations are trusted: every move returned by `legal_moves` must be valid to
/// `apply`, and a position without legal moves must report `is_game_over`. Neither is checked by the search.
pub trait Rules
{
    type Move: Copy + std::fmt::Debug + std::fmt::Display;

    /// Returns every legal move for the side to move, in a stable order.
    ///
    /// The order decides ties: the first move reaching a given score wins.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Plays a legal move in place.
    fn apply(&mut self, mv: Self::Move);

    /// Takes back the most recently applied move, which must be `mv`.
    fn undo(&mut self, mv: Self::Move);

    /// Whether the game has ended, for any reason.
    fn is_game_over(&self) -> bool;

    /// Counts the pieces of a kind held by a side.
    fn piece_count(&self, kind: PieceKind, side: Side) -> u32;
}

/// A move applied to a borrowed position for the lifetime of this guard.
///
/// Dropping the guard undoes the move, so every exit from a scope restores the position.
pub struct Applied<'a, R: Rules>
{
    position: &'a mut R,
    mv:       R::Move,
}

impl<'a, R: Rules> Applied<'a, R>
{
    /// Applies `mv` and returns the guard holding it.
    pub fn new(position: &'a mut R, mv: R::Move) -> Self
    {
        position.apply(mv);
        Applied { position, mv }
    }
}

impl<R: Rules> Deref for Applied<'_, R>
{
    type Target = R;
    fn deref(&self) -> &Self::Target
    {
        self.position
    }
}

impl<R: Rules> DerefMut for Applied<'_, R>
{
    fn deref_mut(&mut self) -> &mut Self::Target
    {
        self.position
    }
}

impl<R: Rules> Drop for Applied<'_, R>
{
    fn drop(&mut self)
    {
        self.position.undo(self.mv);
    }
}
