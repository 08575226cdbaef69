//! Behavioral tests for the game session: moves, time travel and ordering.

use tictactoe_timetravel::{
    Board, GameSession, LINES, Location, Player, Position, Square, calculate_winner,
};

fn click_all(session: GameSession, cells: &[usize]) -> GameSession {
    cells.iter().fold(session, |s, &i| {
        s.click(Position::from_index(i).expect("cell index"))
    })
}

#[test]
fn test_center_then_corner() {
    let session = click_all(GameSession::new(), &[4, 0]);
    assert_eq!(session.board_panel().status(), "Next player: X");
    assert_eq!(session.history().len(), 3);
}

#[test]
fn test_top_row_win_blocks_further_clicks() {
    // X: 0, 1, 2 and O: 3, 4
    let session = click_all(GameSession::new(), &[0, 3, 1, 4, 2]);
    let victory = calculate_winner(session.current_board()).expect("X has won");
    assert_eq!(victory.winner, Player::X);
    assert_eq!(victory.indices(), [0, 1, 2]);
    assert_eq!(session.board_panel().status(), "Winner: X");

    for pos in session.current_board().empty_positions() {
        assert_eq!(session.click(pos), session);
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let session = click_all(GameSession::new(), &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(session.current_board().to_string(), "XOX\nXOO\nOXX");
    assert_eq!(session.board_panel().status(), "Draw");
    assert_eq!(session.history().len(), 10);
    assert_eq!(session.click(Position::Center), session);
}

#[test]
fn test_every_line_reports_winner_and_triple() {
    for line in LINES {
        let mut board = Board::new();
        for pos in line {
            board.set(pos, Square::Occupied(Player::O));
        }
        let victory = calculate_winner(&board).expect("complete line");
        assert_eq!(victory.winner, Player::O);
        assert_eq!(victory.line, line);
    }
}

#[test]
fn test_jump_then_move_truncates_history() {
    let session = click_all(GameSession::new(), &[4, 0, 8, 2, 6]);
    for k in 0..session.history().len() {
        let jumped = session.jump_to(k).unwrap();
        let Some(pos) = jumped.current_board().empty_positions().first().copied() else {
            continue;
        };
        if jumped.board_panel().victory().is_some() {
            continue;
        }
        let branched = jumped.click(pos);
        assert_eq!(branched.history().len(), k + 2, "jump to {k}");
        assert_eq!(branched.current_move(), k + 1);
        let record = branched.history().get(k + 1).unwrap();
        assert_eq!(record.location, Some(pos.location()));
        assert_eq!(
            &branched.history().records()[..=k],
            &session.history().records()[..=k]
        );
    }
}

#[test]
fn test_each_record_adds_one_mark_of_alternating_player() {
    let session = click_all(GameSession::new(), &[4, 0, 8, 2, 1, 7]);
    let records = session.history().records();
    for k in 1..records.len() {
        let before = records[k - 1].board;
        let after = records[k].board;
        let changed: Vec<_> = Position::ALL
            .into_iter()
            .filter(|p| before.get(*p) != after.get(*p))
            .collect();
        assert_eq!(changed.len(), 1, "record {k}");
        let pos = changed[0];
        assert_eq!(before.get(pos), Square::Empty);
        let expected = if k % 2 == 1 { Player::X } else { Player::O };
        assert_eq!(after.get(pos), Square::Occupied(expected), "record {k}");
        assert_eq!(records[k].location, Some(pos.location()));
    }
}

#[test]
fn test_toggle_sort_changes_only_display_order() {
    let session = click_all(GameSession::new(), &[4, 0, 8]).jump_to(1).unwrap();
    let toggled = session.toggle_sort_order();

    assert_eq!(toggled.history(), session.history());
    assert_eq!(toggled.current_move(), session.current_move());
    assert_eq!(toggled.current_board(), session.current_board());

    let indices: Vec<usize> = toggled.move_list().iter().map(|e| *e.index()).collect();
    assert_eq!(indices, vec![3, 2, 1, 0]);
    let labels: Vec<String> = toggled.move_list().iter().map(|e| e.label().clone()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to move #3 (2, 2)",
            "Go to move #2 (0, 0)",
            "You are at move #1 (1, 1)",
            "Go to game start",
        ]
    );
}

#[test]
fn test_start_record_has_no_location() {
    let session = click_all(GameSession::new(), &[4]);
    assert_eq!(session.history().get(0).unwrap().location, None);
    assert_eq!(
        session.history().get(1).unwrap().location,
        Some(Location::new(1, 1))
    );
}
