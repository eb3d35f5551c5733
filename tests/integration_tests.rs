//! Integration tests for the rule engine and the game state machine.

use fastrand::Rng;

use othello_rust::GameError;
use othello_rust::board::{Board, Cell, Player, index, parse_coord, points, to_row_col};
use othello_rust::constants::N;
use othello_rust::game::{Game, Outcome, Status};
use othello_rust::playout::{random_game, random_move};
use othello_rust::rules::{applied, is_legal, legal_moves};

// =============================================================================
// Helper functions for setting up test positions
// =============================================================================

fn board(rows: &str) -> Board {
    rows.parse().expect("valid board")
}

/// White to move. White's c2 leaves Black without a move; a1 then ends the game.
fn white_pass_position() -> Board {
    board(
        ". X X O O O O O
         O X . O O O O O
         O O O O O O O O
         O O O O O O O O
         O O O O O O O O
         O O O O O O O O
         O O O O O O O O
         O O O O O O O O",
    )
}

/// Black to move with a single legal move that fills the board at 32-32.
fn drawn_position() -> Board {
    board(
        ". O X X X X X X
         X X X X X X X X
         X X X X X X X X
         X X X X X X X X
         O O O O O O O O
         O O O O O O O O
         O O O O O O O O
         O O O O O O O O",
    )
}

// =============================================================================
// Board and coordinates
// =============================================================================

#[test]
fn test_opening_board() {
    let game = Game::new();
    let b = game.board();
    let centre = [
        (3, 3, Cell::White),
        (4, 4, Cell::White),
        (3, 4, Cell::Black),
        (4, 3, Cell::Black),
    ];
    for (row, col, cell) in centre {
        assert_eq!(b.get(index(row, col).unwrap()), cell);
    }
    let occupied = points().filter(|&pt| b.get(pt) != Cell::Empty).count();
    assert_eq!(occupied, 4);
    assert_eq!(game.legal_moves(Player::Black).len(), 4);
}

#[test]
fn test_coordinate_roundtrip() {
    for row in 0..N {
        for col in 0..N {
            assert_eq!(to_row_col(index(row, col).unwrap()).unwrap(), (row, col));
        }
    }
    assert_eq!(
        index(N, 3),
        Err(GameError::InvalidCoordinate { row: N, col: 3 })
    );
    assert!(matches!(parse_coord("k4"), Err(GameError::InvalidNotation(_))));
}

// =============================================================================
// Move application over many random games
// =============================================================================

#[test]
fn test_played_cell_is_never_legal_again() {
    for seed in 0..20 {
        let mut rng = Rng::with_seed(seed);
        let mut game = Game::new();
        while let Some(player) = game.current_player() {
            let pt = random_move(game.board(), player, &mut rng).unwrap();
            let before = game.board().clone();
            let total_before = before.count(Player::Black) + before.count(Player::White);

            game.make_move(pt, player).unwrap();

            let after = game.board();
            assert!(!is_legal(after, pt, Player::Black));
            assert!(!is_legal(after, pt, Player::White));
            assert!(!legal_moves(after, player.opponent()).contains(&pt));
            // one new piece per move, flips only change colour
            assert_eq!(
                after.count(Player::Black) + after.count(Player::White),
                total_before + 1
            );
            assert!(after.count(player) > before.count(player) + 1);
            assert_eq!(after, &applied(&before, pt, player));
        }
    }
}

#[test]
fn test_winner_matches_piece_count() {
    for seed in 100..120 {
        let mut game = Game::new();
        let outcome = random_game(&mut game, &mut Rng::with_seed(seed)).unwrap();
        let (black, white) = game.score();
        let expected = if black > white {
            Outcome::Winner(Player::Black)
        } else if white > black {
            Outcome::Winner(Player::White)
        } else {
            Outcome::Draw
        };
        assert_eq!(outcome, expected, "seed {seed}: {black}-{white}");
        assert_eq!(game.current_player(), None);
        assert!(game.legal_moves(Player::Black).is_empty());
        assert!(game.legal_moves(Player::White).is_empty());
    }
}

// =============================================================================
// Turn sequencing
// =============================================================================

#[test]
fn test_forced_pass_keeps_the_turn() {
    let mut game = Game::from_board(white_pass_position(), Player::White);
    assert_eq!(game.current_player(), Some(Player::White));
    assert!(game.legal_moves(Player::Black).is_empty());

    let c2 = parse_coord("c2").unwrap();
    let a1 = parse_coord("a1").unwrap();
    assert_eq!(game.legal_moves(Player::White), vec![a1, c2]);

    game.make_move(c2, Player::White).unwrap();
    assert!(game.legal_moves(Player::Black).is_empty());
    assert_eq!(game.status(), Status::Ongoing(Player::White));
    assert_eq!(game.passes(), 1);

    // Black cannot claim the turn it lost
    assert_eq!(
        game.make_move(a1, Player::Black),
        Err(GameError::WrongTurn {
            expected: Player::White,
            attempted: Player::Black
        })
    );

    game.make_move(a1, Player::White).unwrap();
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Outcome::Winner(Player::White)));
    assert_eq!(game.score(), (0, 64));
}

#[test]
fn test_from_board_passes_when_side_to_move_is_stuck() {
    let game = Game::from_board(white_pass_position(), Player::Black);
    assert_eq!(game.current_player(), Some(Player::White));
    assert_eq!(game.passes(), 1);
}

#[test]
fn test_equal_count_is_a_draw() {
    let mut game = Game::from_board(drawn_position(), Player::Black);
    game.make_move(parse_coord("a1").unwrap(), Player::Black).unwrap();
    assert!(game.is_over());
    assert_eq!(game.score(), (32, 32));
    assert_eq!(game.winner(), Some(Outcome::Draw));
    assert_eq!(
        game.make_move(parse_coord("a1").unwrap(), Player::White),
        Err(GameError::GameOver)
    );
}

#[test]
fn test_failed_move_changes_nothing() {
    let mut game = Game::from_board(white_pass_position(), Player::White);
    let before = game.board().clone();
    let d1 = parse_coord("d1").unwrap();
    assert_eq!(
        game.make_move(d1, Player::White),
        Err(GameError::IllegalMove { point: d1 })
    );
    assert_eq!(game.board(), &before);
    assert_eq!(game.status(), Status::Ongoing(Player::White));
    assert_eq!(game.moves_played(), 0);
}

#[test]
fn test_engine_game_runs_to_completion() {
    let mut game = Game::new();
    while let Some(player) = game.current_player() {
        let pt = game.request_ai_move(player, 2).unwrap();
        game.make_move(pt, player).unwrap();
    }
    let (black, white) = game.score();
    assert!(black + white <= N * N);
    assert!(game.winner().is_some());
}
