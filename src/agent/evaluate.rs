use crate::prelude::*;

/// Returns the material balance of a position, from White's point of view.
///
/// Each scored kind contributes `(white count - black count) * value`. Terminal positions get no special treatment:
/// a checkmated side is scored by whatever material it still has.
pub fn evaluate<R: Rules>(position: &R) -> Score
{
    PieceKind::all()
        .iter()
        .map(|kind| {
            let white = position.piece_count(*kind, Side::White) as Score;
            let black = position.piece_count(*kind, Side::Black) as Score;
            (white - black) * kind.value()
        })
        .sum()
}
