use crate::prelude::*;

/// Returns the minimax value of a position searched to `depth` plies.
///
/// The position is mutated while searching and handed back unchanged. A node at depth zero, or one the rules engine
/// reports as game over, is scored by [`evaluate`]. Otherwise the maximizing side takes the largest child score and
/// the minimizing side the smallest; the first child reaching that score is the one kept.
///
/// A non-terminal node with no legal moves returns its starting sentinel, [`NEGATIVE_INFINITY`] when maximizing and
/// [`POSITIVE_INFINITY`] when minimizing. A consistent rules engine never produces such a node.
pub fn search<R: Rules>(position: &mut R, depth: Depth, maximizing: bool) -> Score
{
    let mut nodes = 0;
    search_counted(position, depth, maximizing, &mut nodes)
}

/// Same as [`search`], adding every visited node to `nodes`.
pub(super) fn search_counted<R: Rules>(position: &mut R, depth: Depth, maximizing: bool, nodes: &mut u64) -> Score
{
    *nodes += 1;

    if depth.is_nil() || position.is_game_over()
    {
        return evaluate(position);
    }

    let mut best = if maximizing { NEGATIVE_INFINITY } else { POSITIVE_INFINITY };

    for mv in position.legal_moves()
    {
        let score = {
            let mut child = Applied::new(&mut *position, mv);
            search_counted(&mut *child, depth.next(), !maximizing, nodes)
        };

        let improves = if maximizing { score > best } else { score < best };
        if improves
        {
            best = score;
        }
    }

    best
}
