use raibot::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A move in a [`Tree`]: the index of the child node to step into.
pub struct Edge(pub usize);

impl std::fmt::Display for Edge
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Node
{
    /// The material balance at this node, stored as pawns.
    pub material:  i32,
    pub children:  Vec<usize>,
    pub game_over: bool,
}

/// A hand-built game tree, which lets the search be checked against known minimax values.
#[derive(Clone, Debug)]
pub struct Tree
{
    pub nodes:   Vec<Node>,
    pub path:    Vec<usize>,
    pub applied: usize,
    pub undone:  usize,
}

impl Tree
{
    /// A tree with only a root of the given material.
    pub fn new(material: i32) -> Self
    {
        Tree {
            nodes:   vec![Node {
                material,
                ..Default::default()
            }],
            path:    Vec::new(),
            applied: 0,
            undone:  0,
        }
    }

    /// Adds a child under `parent` and returns its index.
    pub fn add(&mut self, parent: usize, material: i32) -> usize
    {
        let id = self.nodes.len();
        self.nodes.push(Node {
            material,
            ..Default::default()
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Adds several children under `parent`.
    pub fn add_all(&mut self, parent: usize, materials: &[i32]) -> Vec<usize>
    {
        materials.iter().map(|m| self.add(parent, *m)).collect()
    }

    /// Marks a node as a finished game.
    pub fn end(&mut self, node: usize)
    {
        self.nodes[node].game_over = true;
    }

    pub fn current(&self) -> usize
    {
        self.path.last().copied().unwrap_or(0)
    }
}

impl Rules for Tree
{
    type Move = Edge;

    fn legal_moves(&self) -> Vec<Edge>
    {
        self.nodes[self.current()].children.iter().map(|c| Edge(*c)).collect()
    }

    fn apply(&mut self, mv: Edge)
    {
        assert!(self.nodes[self.current()].children.contains(&mv.0), "{} is not a child of #{}", mv, self.current());
        self.path.push(mv.0);
        self.applied += 1;
    }

    fn undo(&mut self, mv: Edge)
    {
        assert_eq!(self.path.last().copied(), Some(mv.0), "undo out of order");
        self.path.pop();
        self.undone += 1;
    }

    fn is_game_over(&self) -> bool
    {
        self.nodes[self.current()].game_over
    }

    fn piece_count(&self, kind: PieceKind, side: Side) -> u32
    {
        let material = self.nodes[self.current()].material;
        match (kind, side)
        {
            | (PieceKind::Pawn, Side::White) => material.max(0) as u32,
            | (PieceKind::Pawn, Side::Black) => (-material).max(0) as u32,
            | _ => 0,
        }
    }
}
