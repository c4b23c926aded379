//! Tests for event handling and status rendering.

use strictly_tictactoe::{
    GameController, Handled, InputEvent, Labels, Locale, MoveOutcome, Player, Rejection,
    StatusLine,
};

fn controller() -> GameController<Vec<String>> {
    GameController::new(Vec::new(), Labels::default(), Locale::En)
}

#[test]
fn test_opening_message_names_b() {
    let controller = controller();
    assert_eq!(controller.sink(), &vec!["Player O is on turn!".to_string()]);
}

#[test]
fn test_win_sequence_renders_each_step() {
    let mut controller = controller();
    for index in [0, 1, 3, 4, 6] {
        controller.handle(InputEvent::CellSelected(index));
    }

    assert_eq!(
        controller.into_sink(),
        vec![
            "Player O is on turn!",
            "Player X is on turn!",
            "Player O is on turn!",
            "Player X is on turn!",
            "Player O is on turn!",
            "Player O has won!",
        ]
    );
}

#[test]
fn test_rejected_selection_renders_nothing() {
    let mut controller = controller();
    controller.handle(InputEvent::CellSelected(0));
    let handled = controller.handle(InputEvent::CellSelected(0));

    assert_eq!(
        handled,
        Handled::Move(MoveOutcome::Rejected(Rejection::Occupied(
            strictly_tictactoe::Position::TopLeft
        )))
    );
    assert_eq!(controller.sink().len(), 2);
}

#[test]
fn test_status_line_counts_only_rendered_messages() {
    let mut controller = GameController::new(StatusLine::default(), Labels::default(), Locale::En);
    assert_eq!(*controller.sink().renders(), 1);

    controller.handle(InputEvent::CellSelected(4));
    controller.handle(InputEvent::CellSelected(4));
    controller.handle(InputEvent::CellSelected(42));

    assert_eq!(*controller.sink().renders(), 2);
    assert_eq!(controller.sink().text(), "Player X is on turn!");
}

#[test]
fn test_only_the_finishing_move_is_terminal() {
    let mut controller = controller();
    let outcomes: Vec<MoveOutcome> = [0, 1, 3, 4, 6, 8]
        .into_iter()
        .filter_map(|index| match controller.handle(InputEvent::CellSelected(index)) {
            Handled::Move(outcome) => Some(outcome),
            Handled::Restarted => None,
        })
        .collect();

    let terminal: Vec<bool> = outcomes.iter().map(MoveOutcome::is_terminal).collect();
    assert_eq!(terminal, vec![false, false, false, false, true, false]);
    assert!(!outcomes[5].is_accepted());
}

#[test]
fn test_tie_message() {
    let mut controller = controller();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        controller.handle(InputEvent::CellSelected(index));
    }
    assert_eq!(
        controller.sink().last().map(String::as_str),
        Some("The game ends in a tie!")
    );
}

#[test]
fn test_restart_after_game_over() {
    let mut controller = GameController::new(StatusLine::default(), Labels::default(), Locale::De);
    for index in [0, 1, 3, 4, 6] {
        controller.handle(InputEvent::CellSelected(index));
    }
    assert_eq!(controller.sink().text(), "Spieler O hat gewonnen!");

    // Finished games ignore selections
    let handled = controller.handle(InputEvent::CellSelected(8));
    assert_eq!(handled, Handled::Move(MoveOutcome::Rejected(Rejection::GameOver)));
    assert_eq!(controller.sink().text(), "Spieler O hat gewonnen!");

    assert_eq!(controller.handle(InputEvent::RestartRequested), Handled::Restarted);
    assert_eq!(controller.sink().text(), "Spieler O ist an der Reihe!");
    assert_eq!(controller.engine().current_player(), Player::B);
    assert_eq!(
        controller.handle(InputEvent::CellSelected(8)),
        Handled::Move(MoveOutcome::Continue(Player::A))
    );
}
