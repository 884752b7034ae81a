/// A material score in pawns. Positive favours White, negative favours Black.
pub type Score = i32;

pub mod consts
{
    use super::Score;

    /// The starting point of a maximizing node; also what a maximizing node with no moves returns.
    pub const NEGATIVE_INFINITY: Score = Score::MIN;

    /// The starting point of a minimizing node; also what a minimizing node with no moves returns.
    pub const POSITIVE_INFINITY: Score = Score::MAX;
}

pub use consts::*;

/// Whether a score is one of the sentinels, meaning the node had no legal continuation.
pub fn is_infinite(score: Score) -> bool
{
    score == NEGATIVE_INFINITY || score == POSITIVE_INFINITY
}

/// Formats a score for logs and diagnostics, spelling out the sentinels.
pub fn display(score: Score) -> String
{
    match score
    {
        | NEGATIVE_INFINITY => "-inf".into(),
        | POSITIVE_INFINITY => "+inf".into(),
        | s => format!("{:+}", s),
    }
}
