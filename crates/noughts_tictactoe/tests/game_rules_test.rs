//! Tests for turn sequencing, win and draw detection.

use noughts_tictactoe::{Cell, Game, GameError, GameStatus, Mark, Position};

fn at(row: usize, column: usize) -> Position {
    Position::new(row, column).unwrap()
}

/// Validates then applies each move, returning the final game.
fn play(moves: &[(usize, usize)]) -> Game {
    let mut game = Game::new();
    for &(row, column) in moves {
        game.validate_move(at(row, column)).expect("legal move");
        game.apply_move(at(row, column));
    }
    game
}

const DRAW: [(usize, usize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 1),
    (1, 0),
    (1, 2),
    (2, 1),
    (2, 0),
    (2, 2),
];

#[test]
fn test_move_counter_and_turns_alternate() {
    let mut game = Game::new();
    for (k, &(row, column)) in DRAW.iter().enumerate() {
        let mover = game.next_to_play();
        game.validate_move(at(row, column)).unwrap();
        game.apply_move(at(row, column));

        assert_eq!(game.move_count() as usize, k + 1);
        assert_eq!(game.board().get(at(row, column)), Cell::Marked(mover));
        assert_eq!(game.next_to_play(), mover.opponent());
    }
}

#[test]
fn test_full_board_draw() {
    let game = play(&DRAW);
    assert!(game.is_finished());
    assert_eq!(game.winner(), None);
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.status(), GameStatus::Drawn);
    assert!(game.board().is_full());
}

#[test]
fn test_finished_only_on_last_move_of_draw() {
    let mut game = Game::new();
    for (k, &(row, column)) in DRAW.iter().enumerate() {
        let finished = game.apply_move(at(row, column));
        assert_eq!(finished, k == DRAW.len() - 1);
    }
}

#[test]
fn test_diagonal_win() {
    let game = play(&[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert!(game.is_finished());
    assert_eq!(game.winner(), Some(Mark::Cross));
    assert_eq!(game.status(), GameStatus::Won(Mark::Cross));
    assert_eq!(game.move_count(), 5);
}

#[test]
fn test_nought_can_win() {
    let game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(game.winner(), Some(Mark::Nought));
}

#[test]
fn test_win_on_ninth_move_is_a_win() {
    // X completes the diagonal with the last free cell.
    let game = play(&[
        (0, 0),
        (0, 1),
        (1, 1),
        (2, 0),
        (1, 0),
        (1, 2),
        (0, 2),
        (2, 1),
        (2, 2),
    ]);
    assert_eq!(game.move_count(), 9);
    assert_eq!(game.winner(), Some(Mark::Cross));
}

#[test]
fn test_occupied_cell_always_rejected() {
    let game = play(&[(1, 1)]);
    assert_eq!(
        game.validate_move(at(1, 1)),
        Err(GameError::AlreadyOccupied(at(1, 1)))
    );

    // Still AlreadyOccupied after the game has finished.
    let finished = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(
        finished.validate_move(at(1, 1)),
        Err(GameError::AlreadyOccupied(at(1, 1)))
    );
}

#[test]
fn test_finished_game_rejects_empty_cells() {
    let game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    for position in Position::all() {
        if game.board().get(position).is_empty() {
            assert_eq!(game.validate_move(position), Err(GameError::GameFinished));
        }
    }
}

#[test]
fn test_finished_game_rejects_play_as() {
    let mut game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let next = game.next_to_play();
    let before = game.snapshot();

    assert_eq!(game.play_as(next, at(2, 2)), Err(GameError::GameFinished));
    assert_eq!(game.snapshot(), before);
}
