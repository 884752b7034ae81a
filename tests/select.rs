mod common;
use common::{checked::*, *};

#[cfg(test)]
mod select
{
    use raibot::prelude::*;

    use super::*;

    #[test]
    fn opening_tie_goes_to_first_move()
    {
        let _setup = setup::setup();
        let mut position = Position::default();
        let first = position.legal_moves()[0];

        for depth in 1..=2
        {
            let result = templates::select(&mut position, depth);
            assert_eq!(result.best, Some(first));
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn takes_undefended_queen()
    {
        let _setup = setup::setup();
        let mut position = templates::position("4k3/8/8/3q4/8/8/8/3QK3 w - - 0 1");
        let capture = position.parse_move("Qxd5").unwrap();

        for depth in 1..=2
        {
            let result = templates::select(&mut position, depth);
            assert_eq!(result.best, Some(capture), "at depth {}", depth);
            assert_eq!(result.score, 9);
        }
    }

    #[test]
    fn scores_for_white_even_when_black_moves()
    {
        let _setup = setup::setup();
        let mut position = templates::position("3qk3/8/8/8/3Q4/8/8/4K3 b - - 0 1");
        let capture = position.parse_move("Qxd4").unwrap();

        // The root always maximizes, so Black's capture is the worst move from the selector's point of view.
        let result = templates::select(&mut position, 1);
        assert_ne!(result.best, Some(capture));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn stalemate_has_no_move()
    {
        let _setup = setup::setup();
        let mut position = templates::position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(position.is_stalemate());

        let result = templates::select(&mut position, 2);
        assert!(result.is_none());
        assert_eq!(result.score, NEGATIVE_INFINITY);
    }

    #[test]
    fn checkmate_has_no_move()
    {
        let _setup = setup::setup();
        let mut position = templates::position("7k/6Q1/6K1/8/8/8/8/8 b - - 0 1");
        assert!(position.is_checkmate());

        let result = templates::select(&mut position, 3);
        assert!(result.is_none());
    }

    #[test]
    fn every_undo_restores_material()
    {
        let _setup = setup::setup();
        let position = templates::position("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
        let mut checked = Checked::new(position.clone());

        let result = select_best_move(&mut checked, Depth::new(2));
        assert!(result.best.is_some());
        assert!(checked.balanced());
        assert!(checked.nodes > 0);
        assert_eq!(checked.inner, position);
    }

    #[test]
    fn depth_zero_search_is_evaluate()
    {
        let _setup = setup::setup();
        for fen in ["4k3/8/8/3q4/8/8/8/3QK3 w - - 0 1", "rnbqkbnr/pppppppp/8/8/8/8/8/4K3 w kq - 0 1"]
        {
            let mut position = templates::position(fen);
            let expected = evaluate(&position);
            assert_eq!(search(&mut position, Depth::NIL, true), expected);
            assert_eq!(search(&mut position, Depth::NIL, false), expected);
        }
    }

    #[test]
    fn game_over_search_is_evaluate()
    {
        let _setup = setup::setup();

        for fen in ["7k/6Q1/6K1/8/8/8/8/8 b - - 0 1", "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1", "8/8/8/4k3/8/8/8/4KB2 w - - 0 1"]
        {
            let position = templates::position(fen);
            assert!(position.is_game_over());

            let mut checked = Checked::new(position.clone());
            assert_eq!(search(&mut checked, Depth::new(3), true), evaluate(&position));
            assert_eq!(search(&mut checked, Depth::new(3), false), evaluate(&position));
            assert_eq!(checked.nodes, 0);
        }
    }

    #[test]
    fn search_is_deterministic()
    {
        let _setup = setup::setup();
        let mut position = templates::position("4k3/1pp5/8/3q4/8/8/PPP5/R1B1KN2 w - - 0 1");

        let first = search(&mut position, Depth::new(2), true);
        let second = search(&mut position, Depth::new(2), true);
        assert_eq!(first, second);

        let first = templates::select(&mut position, 2);
        let second = templates::select(&mut position, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn sees_recapture_at_depth_two()
    {
        let _setup = setup::setup();

        // The black queen is guarded by a pawn, so taking it trades queens.
        let mut position = templates::position("4k3/8/2p5/3q4/8/8/8/3QK3 w - - 0 1");
        let capture = position.parse_move("Qxd5").unwrap();

        let shallow = templates::select(&mut position, 1);
        assert_eq!(shallow.best, Some(capture));
        assert_eq!(shallow.score, 8);

        let deep = templates::select(&mut position, 2);
        assert_eq!(deep.score, -1);
    }
}
