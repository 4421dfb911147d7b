//! Tests for session phases and turn orchestration.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tictactoe_engine::{
    Board, BoardObserver, Cell, Console, ConsoleError, GameMode, GameOutcome, GameSession,
    INVALID_CHOICE, MoveStrategy, OCCUPIED_CELL, OUT_OF_RANGE, PlayerKind, Position,
    ScriptedConsole, SessionErrorKind, SessionPhase, SessionSettings, SessionSetup, StrategyError,
    Symbol, TurnOutcome,
};

fn mentions(console: &ScriptedConsole, needle: &str) -> bool {
    console.transcript().iter().any(|line| line.contains(needle))
}

fn count(console: &ScriptedConsole, needle: &str) -> usize {
    console
        .transcript()
        .iter()
        .filter(|line| line.contains(needle))
        .count()
}

/// Plays a fixed list of cells and logs every time it is asked.
struct ScriptedPlayer {
    name: String,
    moves: VecDeque<usize>,
    log: Rc<RefCell<Vec<String>>>,
}

impl ScriptedPlayer {
    fn boxed(name: &str, moves: &[usize], log: &Rc<RefCell<Vec<String>>>) -> Box<dyn MoveStrategy> {
        Box::new(Self {
            name: name.to_string(),
            moves: moves.iter().copied().collect(),
            log: Rc::clone(log),
        })
    }
}

impl MoveStrategy for ScriptedPlayer {
    fn get_move(
        &mut self,
        _board: &mut Board,
        _symbol: Symbol,
        _console: &mut dyn Console,
    ) -> Result<Position, StrategyError> {
        self.log.borrow_mut().push(self.name.clone());
        let index = self.moves.pop_front().ok_or(StrategyError::NoLegalMove)?;
        Ok(Position::from_index(index).unwrap())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }
}

/// Keeps every board it is shown.
#[derive(Default)]
struct RecordingObserver {
    frames: RefCell<Vec<[Cell; 9]>>,
}

impl BoardObserver for RecordingObserver {
    fn update(&self, board: &Board) {
        self.frames.borrow_mut().push(*board.cells());
    }
}

fn scripted_session(
    x: &[usize],
    o: &[usize],
) -> (GameSession<ScriptedConsole>, Rc<RefCell<Vec<String>>>, Rc<RecordingObserver>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let observer = Rc::new(RecordingObserver::default());
    let session = GameSession::start(
        ScriptedConsole::default(),
        ScriptedPlayer::boxed("X", x, &log),
        ScriptedPlayer::boxed("O", o, &log),
        Some(observer.clone()),
    );
    (session, log, observer)
}

#[test]
fn test_top_row_wins_without_ninth_move() {
    let (session, log, _) = scripted_session(&[0, 1, 2], &[3, 4]);

    let finished = session.play().unwrap();

    assert_eq!(finished.outcome(), GameOutcome::WinBy(Symbol::X));
    assert_eq!(finished.winner_name(), Some("X"));
    assert_eq!(finished.history().len(), 5);
    assert_eq!(log.borrow().len(), 5);
    let console = finished.into_console();
    assert!(mentions(&console, "X (X) WINS!"));
}

#[test]
fn test_draw_on_ninth_cell() {
    let (mut session, _, _) = scripted_session(&[0, 2, 3, 7, 8], &[4, 1, 5, 6]);

    for _ in 0..8 {
        assert_eq!(session.take_turn().unwrap(), TurnOutcome::Continue);
        assert_eq!(session.phase(), SessionPhase::Playing);
    }
    assert_eq!(
        session.take_turn().unwrap(),
        TurnOutcome::Finished(GameOutcome::Draw)
    );
    assert_eq!(session.phase(), SessionPhase::Terminal);
    assert!(session.board().is_full());
    assert!(mentions(&session.into_console(), "It's a DRAW!"));
}

#[test]
fn test_turn_order_and_retry_on_occupied_cell() {
    let (session, log, observer) = scripted_session(&[4, 1, 7], &[4, 0, 2]);

    let finished = session.play().unwrap();

    assert_eq!(*log.borrow(), ["X", "O", "O", "X", "O", "X"]);
    assert_eq!(finished.outcome(), GameOutcome::WinBy(Symbol::X));
    let console = finished.into_console();
    assert_eq!(count(&console, OCCUPIED_CELL), 1);
    assert_eq!(count(&console, "O's turn (O)"), 3);
    // Initial render plus one per committed move.
    assert_eq!(observer.frames.borrow().len(), 6);
}

#[test]
fn test_observer_sees_only_committed_boards() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let observer = Rc::new(RecordingObserver::default());
    let session = GameSession::start(
        ScriptedConsole::default(),
        ScriptedPlayer::boxed("X", &[0, 8, 3, 7], &log),
        tictactoe_engine::PlayerFactory::create(PlayerKind::Ai, "Computer"),
        Some(observer.clone()),
    );

    session.play().unwrap();

    let frames = observer.frames.borrow();
    assert_eq!(frames[0], [Cell::Empty; 9]);
    for pair in frames.windows(2) {
        let changed = pair[0].iter().zip(pair[1].iter()).filter(|(a, b)| a != b).count();
        assert_eq!(changed, 1, "each frame adds exactly one mark");
    }
}

#[test]
fn test_no_moves_after_terminal() {
    let (mut session, log, _) = scripted_session(&[0, 1, 2, 5], &[3, 4, 6]);
    while !matches!(session.take_turn().unwrap(), TurnOutcome::Finished(_)) {}
    let asked = log.borrow().len();

    assert_eq!(
        session.take_turn().unwrap(),
        TurnOutcome::Finished(GameOutcome::WinBy(Symbol::X))
    );
    assert_eq!(log.borrow().len(), asked);
}

#[test]
fn test_strategy_without_move_is_fatal() {
    let (session, _, _) = scripted_session(&[0], &[]);
    let err = session.play().err().unwrap();
    assert_eq!(err.kind, SessionErrorKind::NoLegalMove);
}

#[test]
fn test_menu_flow_against_human() {
    let console = ScriptedConsole::new(["3", "2", "Ada", "Bob", "1", "4", "12", "2", "5", "3"]);

    let finished = SessionSetup::new(console, SessionSettings::new()).run().unwrap();

    assert_eq!(finished.outcome(), GameOutcome::WinBy(Symbol::X));
    assert_eq!(finished.winner_name(), Some("Ada"));
    let mut console = finished.into_console();
    assert_eq!(count(&console, INVALID_CHOICE), 1);
    assert_eq!(count(&console, OUT_OF_RANGE), 1);
    assert!(mentions(&console, "Ada (X) vs Bob (O)"));
    assert!(mentions(&console, "Game Instructions:"));
    assert!(mentions(&console, "Ada (X) WINS!"));
    // Every scripted answer was consumed.
    assert!(matches!(console.read_line(""), Err(ConsoleError::InputClosed)));
}

#[test]
fn test_menu_flow_against_computer() {
    let console = ScriptedConsole::new(["1", "", "1", "2", "7", "9"]);
    let settings = SessionSettings::new().with_instructions(false);

    let setup = SessionSetup::new(console, settings);
    assert_eq!(setup.phase(), SessionPhase::ModeSelection);
    let names = setup.select_mode().unwrap();
    assert_eq!(names.phase(), SessionPhase::NameCollection);
    assert_eq!(names.mode(), GameMode::VsAi);
    let session = names.collect_names().unwrap();
    assert_eq!(session.phase(), SessionPhase::Playing);
    assert_eq!(session.player(Symbol::X).name(), "Player 1");
    assert_eq!(session.player(Symbol::O).name(), "Computer");
    assert_eq!(session.player(Symbol::O).kind(), PlayerKind::Ai);

    let finished = session.play().unwrap();

    // O takes the center, blocks 0-1-2, blocks 0-3-6, then completes 3-4-5.
    assert_eq!(finished.outcome(), GameOutcome::WinBy(Symbol::O));
    assert_eq!(
        finished.history().iter().map(|p| p.to_index()).collect::<Vec<_>>(),
        [0, 4, 1, 2, 6, 3, 8, 5]
    );
    assert!(!mentions(&finished.into_console(), "Game Instructions:"));
}

#[test]
fn test_preselected_mode_skips_menu() {
    let console = ScriptedConsole::new(["Ada"]);
    let settings = SessionSettings::new()
        .with_mode(GameMode::VsAi)
        .with_ai_name("HAL");

    let session = SessionSetup::new(console, settings)
        .select_mode()
        .unwrap()
        .collect_names()
        .unwrap();

    assert_eq!(session.player(Symbol::O).name(), "HAL");
    let console = session.into_console();
    assert!(!mentions(&console, "Choose game mode:"));
    assert!(mentions(&console, "Ada (X) vs HAL (O)"));
}

#[test]
fn test_closed_input_ends_session_with_error() {
    let console = ScriptedConsole::new(["2", "Ada", "Bob", "5"]);
    let err = SessionSetup::new(console, SessionSettings::new())
        .run()
        .err()
        .unwrap();
    assert_eq!(err.kind, SessionErrorKind::InputClosed);
    assert!(err.to_string().contains("Input stream closed"));
}
