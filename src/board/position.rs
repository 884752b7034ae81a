use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece};

use super::{Entry, History, Outcome};
use crate::prelude::*;

/// Light squares on a1-indexed bitboards; a1 is dark.
const LIGHT_SQUARES: u64 = 0x55AA_55AA_55AA_55AA;
const DARK_SQUARES: u64 = !LIGHT_SQUARES;

/// A position that can play and take back moves in place.
///
/// Besides the board, it tracks the halfmove clock and the moves played since it was created, which it needs for
/// undoing moves and for the seventy-five-move and fivefold-repetition draws.
#[derive(Clone, Debug)]
pub struct Position
{
    board:          Board,
    halfmove_clock: u32,
    history:        History,
}

impl Default for Position
{
    fn default() -> Self
    {
        Position::new(Board::default(), 0)
    }
}

impl PartialEq for Position
{
    fn eq(&self, other: &Self) -> bool
    {
        self.board == other.board && self.halfmove_clock == other.halfmove_clock
    }
}

impl Eq for Position {}

impl FromStr for Position
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        Position::from_fen(s)
    }
}

impl Position
{
    fn new(board: Board, halfmove_clock: u32) -> Self
    {
        Position {
            board,
            halfmove_clock,
            history: History::default(),
        }
    }

    /// Parses a position from FEN. Missing move counters default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self>
    {
        let mut fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 || fields.len() > 6
        {
            let err = Error::new(Kind::ParseError, format!("Expected 4 to 6 fields, found {}.", fields.len()));
            return Err(err.chain_parse::<Self>(fen.into()));
        }

        if fields.len() == 4
        {
            fields.push("0");
        }
        if fields.len() == 5
        {
            fields.push("1");
        }

        let Ok(halfmove_clock) = fields[4].parse::<u32>()
        else
        {
            let err = Error::new(Kind::ParseError, format!("Invalid halfmove clock '{}'.", fields[4]));
            return Err(err.chain_parse::<Self>(fen.into()));
        };

        let Ok(board) = fields.join(" ").parse::<Board>()
        else
        {
            let err = Error::new(Kind::InvalidState, "The board is not a legal chess position.".into());
            return Err(err.chain_parse::<Self>(fen.into()));
        };

        Ok(Position::new(board, halfmove_clock))
    }

    /// The underlying board.
    pub fn board(&self) -> &Board
    {
        &self.board
    }

    /// The number of plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32
    {
        self.halfmove_clock
    }

    /// The moves played on this position since it was created.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// The side to move.
    pub fn to_move(&self) -> Side
    {
        self.board.side_to_move().into()
    }

    /// Returns the board as FEN, with this position's halfmove clock.
    pub fn fen(&self) -> String
    {
        let board_fen = self.board.to_string();
        let fields: Vec<&str> = board_fen.split_whitespace().collect();
        let fullmove = 1 + self.history.len() / 2;
        format!("{} {} {}", fields[..4].join(" "), self.halfmove_clock, fullmove)
    }

    /// Plays a move that is known to be legal.
    pub fn play_unchecked(&mut self, mv: ChessMove)
    {
        let moved = self.board.piece_on(mv.get_source());
        let captured = self.board.piece_on(mv.get_dest());

        self.history.play(Entry {
            mv,
            board: self.board,
            halfmove_clock: self.halfmove_clock,
        });

        self.halfmove_clock = if moved == Some(Piece::Pawn) || captured.is_some()
        {
            0
        }
        else
        {
            self.halfmove_clock + 1
        };
        self.board = self.board.make_move_new(mv);
    }

    /// Plays a move, refusing it if it is not legal here.
    pub fn play(&mut self, mv: ChessMove) -> Result<()>
    {
        if !self.board.legal(mv)
        {
            return Err(Error::new(Kind::InvalidMove, format!("{} is not legal in {}.", mv, self.fen())));
        }

        self.play_unchecked(mv);
        Ok(())
    }

    /// Takes back the last move played.
    pub fn take_back(&mut self) -> Result<ChessMove>
    {
        let Some(entry) = self.history.undo()
        else
        {
            return Err(Error::new(Kind::InvalidState, "There is no move to take back.".into()));
        };

        log::trace!("took back {}", entry);
        self.board = entry.board;
        self.halfmove_clock = entry.halfmove_clock;
        Ok(entry.mv)
    }

    /// Returns the reason the game is over, or `None` while it goes on.
    pub fn outcome(&self) -> Option<Outcome>
    {
        match self.board.status()
        {
            | BoardStatus::Checkmate =>
            {
                let winner = Side::from(self.board.side_to_move()).flip();
                Some(Outcome::Checkmate { winner })
            }
            | BoardStatus::Stalemate => Some(Outcome::Stalemate),
            | BoardStatus::Ongoing if self.is_insufficient_material() => Some(Outcome::InsufficientMaterial),
            | BoardStatus::Ongoing if self.is_seventyfive_moves() => Some(Outcome::SeventyFiveMoves),
            | BoardStatus::Ongoing if self.is_fivefold_repetition() => Some(Outcome::FivefoldRepetition),
            | BoardStatus::Ongoing => None,
        }
    }

    /// Whether the side to move has been checkmated.
    pub fn is_checkmate(&self) -> bool
    {
        self.board.status() == BoardStatus::Checkmate
    }

    /// Whether the side to move has no legal move but is not in check.
    pub fn is_stalemate(&self) -> bool
    {
        self.board.status() == BoardStatus::Stalemate
    }

    /// Whether neither side can possibly deliver mate.
    pub fn is_insufficient_material(&self) -> bool
    {
        self.has_insufficient_material(Color::White) && self.has_insufficient_material(Color::Black)
    }

    /// Whether 150 plies have passed without a capture or pawn move.
    pub fn is_seventyfive_moves(&self) -> bool
    {
        self.halfmove_clock >= 150 && self.board.status() != BoardStatus::Checkmate
    }

    /// Whether the current position has now appeared five times.
    ///
    /// Only positions since the last capture or pawn move can repeat, so the search looks no further back.
    pub fn is_fivefold_repetition(&self) -> bool
    {
        let hash = self.board.get_hash();
        let earlier = self
            .history
            .iter()
            .rev()
            .take(self.halfmove_clock as usize)
            .filter(|entry| entry.board.get_hash() == hash)
            .count();
        earlier + 1 >= 5
    }

    /// Whether `color` lacks the material to mate, whatever the opponent does.
    pub fn has_insufficient_material(&self, color: Color) -> bool
    {
        let board = &self.board;
        let ours = board.color_combined(color).0;
        let theirs = board.color_combined(!color).0;
        let pawns = board.pieces(Piece::Pawn).0;
        let knights = board.pieces(Piece::Knight).0;
        let bishops = board.pieces(Piece::Bishop).0;
        let rooks = board.pieces(Piece::Rook).0;
        let queens = board.pieces(Piece::Queen).0;
        let kings = board.pieces(Piece::King).0;

        if ours & (pawns | rooks | queens) != 0
        {
            return false;
        }

        if ours & knights != 0
        {
            // A lone knight can only mate with help from enemy pieces other than queens.
            return ours.count_ones() <= 2 && theirs & !kings & !queens == 0;
        }

        if ours & bishops != 0
        {
            // Bishops all on one square colour cannot mate without pawns or knights to block.
            let same_colour = bishops & DARK_SQUARES == 0 || bishops & LIGHT_SQUARES == 0;
            return same_colour && pawns == 0 && knights == 0;
        }

        true
    }

    /// Returns the same position with the colours swapped and the board flipped top to bottom.
    pub fn mirrored(&self) -> Result<Position>
    {
        let board_fen = self.board.to_string();
        let fields: Vec<&str> = board_fen.split_whitespace().collect();
        if fields.len() < 4
        {
            return Err(Error::new(Kind::InternalError, format!("Malformed board FEN '{}'.", board_fen)));
        }

        let placement = fields[0].split('/').rev().map(swap_case).collect::<Vec<String>>().join("/");

        let side = match fields[1]
        {
            | "w" => "b",
            | _ => "w",
        };

        let castling = match fields[2]
        {
            | "-" => "-".to_owned(),
            | rights =>
            {
                let swapped = swap_case(rights);
                "KQkq".chars().filter(|c| swapped.contains(*c)).collect()
            }
        };

        let en_passant = match fields[3]
        {
            | "-" => "-".to_owned(),
            | square => square.chars().map(|c| if c == '3' { '6' } else if c == '6' { '3' } else { c }).collect(),
        };

        let fen = format!("{} {} {} {} {} 1", placement, side, castling, en_passant, self.halfmove_clock);
        Position::from_fen(&fen)
    }
}

impl Rules for Position
{
    type Move = ChessMove;

    fn legal_moves(&self) -> Vec<ChessMove>
    {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply(&mut self, mv: ChessMove)
    {
        self.play_unchecked(mv);
    }

    fn undo(&mut self, mv: ChessMove)
    {
        debug_assert_eq!(self.history.prev().map(|entry| entry.mv), Some(mv), "undo must take back the last move");
        if self.take_back().is_err()
        {
            panic!("undo of {} on a position with no history", mv);
        }
    }

    fn is_game_over(&self) -> bool
    {
        self.outcome().is_some()
    }

    fn piece_count(&self, kind: PieceKind, side: Side) -> u32
    {
        let pieces = self.board.pieces(kind.into()).0;
        let colour = self.board.color_combined(side.into()).0;
        (pieces & colour).count_ones()
    }
}

fn swap_case(s: &str) -> String
{
    s.chars()
        .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
        .collect()
}
