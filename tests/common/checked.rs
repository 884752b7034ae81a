use raibot::prelude::*;

/// The number of pieces of each scored kind, for both sides.
pub type Material = [u32; 10];

pub fn material<R: Rules>(position: &R) -> Material
{
    let mut counts = [0; 10];
    for (i, kind) in PieceKind::all().iter().enumerate()
    {
        counts[2 * i] = position.piece_count(*kind, Side::White);
        counts[2 * i + 1] = position.piece_count(*kind, Side::Black);
    }
    counts
}

/// A position wrapper that checks every undo restores the material and FEN seen before the matching apply.
pub struct Checked
{
    pub inner:  Position,
    pub nodes:  usize,
    snapshots:  Vec<(ChessMove, Material, String)>,
}

impl Checked
{
    pub fn new(inner: Position) -> Self
    {
        Checked {
            inner,
            nodes: 0,
            snapshots: Vec::new(),
        }
    }

    pub fn balanced(&self) -> bool
    {
        self.snapshots.is_empty()
    }
}

impl Rules for Checked
{
    type Move = ChessMove;

    fn legal_moves(&self) -> Vec<ChessMove>
    {
        self.inner.legal_moves()
    }

    fn apply(&mut self, mv: ChessMove)
    {
        self.nodes += 1;
        self.snapshots.push((mv, material(&self.inner), self.inner.fen()));
        self.inner.apply(mv);
    }

    fn undo(&mut self, mv: ChessMove)
    {
        self.inner.undo(mv);
        let (applied, counts, fen) = self.snapshots.pop().expect("undo without apply");
        assert_eq!(applied, mv);
        assert_eq!(material(&self.inner), counts);
        assert_eq!(self.inner.fen(), fen);
    }

    fn is_game_over(&self) -> bool
    {
        self.inner.is_game_over()
    }

    fn piece_count(&self, kind: PieceKind, side: Side) -> u32
    {
        self.inner.piece_count(kind, side)
    }
}
