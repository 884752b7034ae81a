use chess::{ChessMove, File, MoveGen, Piece, Rank, Square};
use lazy_static::lazy_static;
use regex::Regex;

use super::Position;
use crate::prelude::*;

lazy_static! {
    static ref UCI: Regex = Regex::new(r"^(?<from>[a-h][1-8])(?<to>[a-h][1-8])(?<promotion>[nbrqNBRQ])?$").unwrap();
    static ref SAN: Regex =
        Regex::new(r"^(?<piece>[NBRQK])?(?<file>[a-h])?(?<rank>[1-8])?x?(?<to>[a-h][1-8])(=?(?<promotion>[NBRQnbrq]))?$").unwrap();
    static ref CASTLE: Regex = Regex::new(r"^(O-O(?<long>-O)?|0-0(?<long_zero>-0)?)$").unwrap();
}

impl Position
{
    /// Parses a move written in standard algebraic notation (`Nf3`, `exd5`, `O-O`, `e8=Q+`) or in coordinate notation
    /// (`g1f3`, `e7e8q`) into a legal move in this position.
    pub fn parse_move(&self, text: &str) -> Result<ChessMove>
    {
        let trimmed = text.trim().trim_end_matches(&['+', '#', '!', '?'][..]);

        let candidates = if let Some(caps) = UCI.captures(trimmed)
        {
            let from = square(&caps["from"]);
            let to = square(&caps["to"]);
            let promotion = caps.name("promotion").map(|m| promotion(m.as_str()));
            self.matching(|mv| mv.get_source() == from && mv.get_dest() == to && mv.get_promotion() == promotion)
        }
        else if let Some(caps) = CASTLE.captures(trimmed)
        {
            let long = caps.name("long").is_some() || caps.name("long_zero").is_some();
            let to_file = if long { File::C } else { File::G };
            self.matching(|mv| {
                self.board().piece_on(mv.get_source()) == Some(Piece::King)
                    && mv.get_source().get_file() == File::E
                    && mv.get_dest().get_file() == to_file
                    && mv.get_source().get_rank() == mv.get_dest().get_rank()
            })
        }
        else if let Some(caps) = SAN.captures(trimmed)
        {
            let piece = caps.name("piece").map(|m| kind(m.as_str())).unwrap_or(Piece::Pawn);
            let file = caps.name("file").map(|m| m.as_str().as_bytes()[0] - b'a');
            let rank = caps.name("rank").map(|m| m.as_str().as_bytes()[0] - b'1');
            let to = square(&caps["to"]);
            let promotion = caps.name("promotion").map(|m| promotion(m.as_str()));
            self.matching(|mv| {
                let from = mv.get_source();
                self.board().piece_on(from) == Some(piece)
                    && mv.get_dest() == to
                    && file.map_or(true, |f| from.get_file().to_index() == f as usize)
                    && rank.map_or(true, |r| from.get_rank().to_index() == r as usize)
                    && mv.get_promotion() == promotion
            })
        }
        else
        {
            return Err(Error::for_parse::<ChessMove>(text.into()));
        };

        match candidates.as_slice()
        {
            | [mv] => Ok(*mv),
            | [] => Err(Error::new(Kind::InvalidMove, format!("'{}' is not legal in {}.", text, self.fen()))),
            | _ => Err(Error::new(Kind::InvalidMove, format!("'{}' is ambiguous in {}.", text, self.fen()))),
        }
    }

    fn matching<F: Fn(&ChessMove) -> bool>(&self, predicate: F) -> Vec<ChessMove>
    {
        MoveGen::new_legal(self.board()).filter(|mv| predicate(mv)).collect()
    }
}

/// Reads a square the regexes have already validated.
fn square(s: &str) -> Square
{
    let bytes = s.as_bytes();
    let file = File::from_index((bytes[0] - b'a') as usize);
    let rank = Rank::from_index((bytes[1] - b'1') as usize);
    Square::make_square(rank, file)
}

fn kind(s: &str) -> Piece
{
    match s
    {
        | "N" => Piece::Knight,
        | "B" => Piece::Bishop,
        | "R" => Piece::Rook,
        | "Q" => Piece::Queen,
        | _ => Piece::King,
    }
}

fn promotion(s: &str) -> Piece
{
    kind(&s.to_uppercase())
}
