use std::time::Instant;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The move chosen at the root, and the score it was chosen for.
pub struct SearchResult<M>
{
    /// `None` when the root position has no legal moves.
    pub best:  Option<M>,
    pub score: Score,
}

impl<M> SearchResult<M>
{
    /// Whether no move could be chosen.
    pub fn is_none(&self) -> bool
    {
        self.best.is_none()
    }
}

/// Picks the root move with the highest minimax score, always scoring for the maximizing side.
///
/// Each root move is applied and its reply searched with one ply fewer and the minimizing side to move. A later move
/// only replaces the current best with a strictly greater score, so ties go to the earliest move. A root with no
/// legal moves yields no move and a score of [`NEGATIVE_INFINITY`]; callers must not try to play it.
///
/// A depth of zero is treated as one: the root moves themselves are always tried.
pub fn select_best_move<R: Rules>(position: &mut R, depth: Depth) -> SearchResult<R::Move>
{
    let start = Instant::now();
    let mut nodes: u64 = 1;
    let mut result = SearchResult {
        best:  None,
        score: NEGATIVE_INFINITY,
    };

    for mv in position.legal_moves()
    {
        let score = {
            let mut child = Applied::new(&mut *position, mv);
            super::search::search_counted(&mut *child, depth.next(), false, &mut nodes)
        };

        log::trace!("candidate {: ^8}: scored {: >5}", mv, scalars::display(score));

        if score > result.score
        {
            result.best = Some(mv);
            result.score = score;
        }
    }

    let time_elapsed = start.elapsed();
    match result.best
    {
        | Some(mv) => log::debug!("found {: ^8}: scored {: >5}", mv, scalars::display(result.score)),
        | None => log::debug!("found no legal move"),
    }
    log::debug!("took {: >3.3}s at depth {} and visited {} nodes", time_elapsed.as_secs_f64(), depth, nodes);

    result
}
