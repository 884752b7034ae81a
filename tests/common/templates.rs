use raibot::prelude::*;

/// Parses a FEN that the test expects to be valid.
pub fn position(fen: &'static str) -> Position
{
    let possibly_position: Result<Position> = fen.parse::<Position>();
    assert!(possibly_position.is_ok(), "\tdue to {}", possibly_position.unwrap_err());
    possibly_position.unwrap()
}

/// Selects a move and checks that the position came back exactly as it was.
pub fn select(position: &mut Position, depth: u8) -> SearchResult<ChessMove>
{
    let before = position.clone();
    let history_before = position.history().len();

    let result = select_best_move(position, Depth::new(depth));

    assert_eq!(*position, before);
    assert_eq!(position.fen(), before.fen());
    assert_eq!(position.history().len(), history_before);
    result
}

/// Plays a line of moves given in any notation the position accepts.
pub fn play_line(position: &mut Position, line: &[&str])
{
    for text in line
    {
        let mv = position.parse_move(text);
        assert!(mv.is_ok(), "{} in {}\n\tdue to {}", text, position.fen(), mv.unwrap_err());
        position.play(mv.unwrap()).unwrap();
    }
}

/// Runs a scripted game and returns everything it printed.
pub fn run_game(options: Options, script: &str) -> (Result<Option<Outcome>>, String)
{
    let mut output: Vec<u8> = Vec::new();
    let outcome = {
        let game = Game::new(options, script.as_bytes(), &mut output);
        assert!(game.is_ok(), "\tdue to {}", game.as_ref().err().unwrap());
        game.unwrap().run()
    };
    (outcome, String::from_utf8(output).unwrap())
}
