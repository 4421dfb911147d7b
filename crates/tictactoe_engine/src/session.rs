//! Phase-specific session types from mode selection to the final report.
//!
//! Each phase is its own type and consumes the previous one:
//! [`SessionSetup`] (mode selection) → [`NameCollection`] →
//! [`GameSession`] (playing) → [`FinishedSession`] (terminal).
//! The console is acquired once by [`SessionSetup::new`] and travels
//! through every phase until the caller takes it back.

use crate::console::{Console, ConsoleError};
use crate::strategy::{FactoryError, MoveStrategy, PlayerFactory, PlayerKind, StrategyError};
use crate::{Board, BoardObserver, GameOutcome, MoveError, Position, Symbol};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Printed between turns.
pub const TURN_SEPARATOR: &str = "-----------------------------------";

/// Shown when a player picks a cell that already holds a symbol.
pub const OCCUPIED_CELL: &str = "❌ Invalid move! That cell is already occupied. Try again.";

/// Shown when the mode menu answer is not one of the listed choices.
pub const INVALID_CHOICE: &str = "Invalid choice! Please enter 1 or 2.";

const BANNER: &str = "====================================";

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SessionPhase {
    /// Choosing between the computer and a second human.
    ModeSelection,
    /// Asking players for their names.
    NameCollection,
    /// Moves are being requested and applied.
    Playing,
    /// Outcome decided, no more moves.
    Terminal,
}

/// Who player 2 (O) is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameMode {
    /// Player 2 is the computer.
    #[serde(rename = "ai")]
    #[strum(to_string = "Play against Computer (AI)")]
    VsAi,
    /// Player 2 is another human at the same console.
    #[serde(rename = "human")]
    #[strum(to_string = "Play with another Human player")]
    VsHuman,
}

impl GameMode {
    /// Number of this mode in the menu.
    pub fn menu_number(self) -> i64 {
        match self {
            GameMode::VsAi => 1,
            GameMode::VsHuman => 2,
        }
    }

    /// Mode for a menu answer.
    pub fn from_menu_number(number: i64) -> Option<Self> {
        <GameMode as strum::IntoEnumIterator>::iter().find(|mode| mode.menu_number() == number)
    }

    /// Kind of player bound to O in this mode.
    pub fn opponent_kind(self) -> PlayerKind {
        match self {
            GameMode::VsAi => PlayerKind::Ai,
            GameMode::VsHuman => PlayerKind::Human,
        }
    }
}

/// User-configurable settings for a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Display name of the computer player.
    ai_name: String,
    /// Whether to print the how-to-play block before the first move.
    show_instructions: bool,
    /// Preselected mode; the menu is skipped when set.
    mode: Option<GameMode>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ai_name: crate::HeuristicAi::DEFAULT_NAME.to_string(),
            show_instructions: true,
            mode: None,
        }
    }
}

impl SessionSettings {
    /// Creates settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preselects the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Renames the computer player.
    pub fn with_ai_name(mut self, name: impl Into<String>) -> Self {
        self.ai_name = name.into();
        self
    }

    /// Turns the instruction block on or off.
    pub fn with_instructions(mut self, show: bool) -> Self {
        self.show_instructions = show;
        self
    }
}

/// Category of a fatal session error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionErrorKind {
    /// Input ended before the game did.
    InputClosed,
    /// The console could not be read or written.
    Io,
    /// A strategy found no empty cell.
    NoLegalMove,
    /// A player of an unknown kind was requested.
    UnknownPlayerKind,
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", message, file, line)]
pub struct SessionError {
    /// What went wrong.
    pub kind: SessionErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ConsoleError> for SessionError {
    #[track_caller]
    fn from(err: ConsoleError) -> Self {
        let kind = match err {
            ConsoleError::InputClosed => SessionErrorKind::InputClosed,
            ConsoleError::Io(_) => SessionErrorKind::Io,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<StrategyError> for SessionError {
    #[track_caller]
    fn from(err: StrategyError) -> Self {
        match err {
            StrategyError::NoLegalMove => Self::new(SessionErrorKind::NoLegalMove, err.to_string()),
            StrategyError::Console(inner) => inner.into(),
        }
    }
}

impl From<FactoryError> for SessionError {
    #[track_caller]
    fn from(err: FactoryError) -> Self {
        Self::new(SessionErrorKind::UnknownPlayerKind, err.to_string())
    }
}

// ─────────────────────────────────────────────────────────────
//  Mode selection
// ─────────────────────────────────────────────────────────────

/// Session waiting for a game mode.
pub struct SessionSetup<C: Console> {
    console: C,
    settings: SessionSettings,
    observer: Option<Rc<dyn BoardObserver>>,
}

impl<C: Console> SessionSetup<C> {
    /// Creates a session that owns `console` until it is handed back.
    #[instrument(skip(console))]
    pub fn new(console: C, settings: SessionSettings) -> Self {
        Self {
            console,
            settings,
            observer: None,
        }
    }

    /// Display to attach to the board once play begins.
    pub fn with_observer(mut self, observer: Rc<dyn BoardObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        SessionPhase::ModeSelection
    }

    /// Runs every phase to the end of the game.
    #[instrument(skip(self))]
    pub fn run(self) -> Result<FinishedSession<C>, SessionError> {
        self.select_mode()?.collect_names()?.play()
    }

    /// Greets and asks for a mode unless one was preselected.
    #[instrument(skip(self))]
    pub fn select_mode(mut self) -> Result<NameCollection<C>, SessionError> {
        self.console.say(BANNER)?;
        self.console.say("  Welcome to Tic Tac Toe Game!")?;
        self.console.say(BANNER)?;

        let mode = match self.settings.mode {
            Some(mode) => {
                debug!(%mode, "Using preselected mode");
                mode
            }
            None => self.ask_mode()?,
        };
        Ok(self.choose_mode(mode))
    }

    /// Moves on with `mode` without asking.
    #[instrument(skip(self))]
    pub fn choose_mode(self, mode: GameMode) -> NameCollection<C> {
        info!(?mode, "Mode selected");
        NameCollection {
            console: self.console,
            settings: self.settings,
            observer: self.observer,
            mode,
        }
    }

    fn ask_mode(&mut self) -> Result<GameMode, SessionError> {
        self.console.say("\nChoose game mode:")?;
        for mode in <GameMode as strum::IntoEnumIterator>::iter() {
            self.console.say(&format!("{}. {}", mode.menu_number(), mode))?;
        }
        loop {
            let answer = self.console.request_integer("Enter your choice (1 or 2): ")?;
            match GameMode::from_menu_number(answer) {
                Some(mode) => return Ok(mode),
                None => {
                    debug!(answer, "Rejected menu choice");
                    self.console.say(INVALID_CHOICE)?;
                }
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Name collection
// ─────────────────────────────────────────────────────────────

/// Session with a mode, waiting for player names.
pub struct NameCollection<C: Console> {
    console: C,
    settings: SessionSettings,
    observer: Option<Rc<dyn BoardObserver>>,
    mode: GameMode,
}

impl<C: Console> NameCollection<C> {
    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        SessionPhase::NameCollection
    }

    /// Selected mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Asks for the human names. Blank answers fall back to "Player N".
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn collect_names(mut self) -> Result<GameSession<C>, SessionError> {
        let player1 = self.ask_name("\nEnter name for Player 1 (X): ", "Player 1")?;
        let player2 = match self.mode {
            GameMode::VsAi => self.settings.ai_name.clone(),
            GameMode::VsHuman => self.ask_name("Enter name for Player 2 (O): ", "Player 2")?,
        };
        self.with_names(&player1, &player2)
    }

    /// Builds both players, announces the match and starts play.
    #[instrument(skip(self))]
    pub fn with_names(
        mut self,
        player1: &str,
        player2: &str,
    ) -> Result<GameSession<C>, SessionError> {
        let player_x = PlayerFactory::create(PlayerKind::Human, player1);
        let player_o = PlayerFactory::create(self.mode.opponent_kind(), player2);

        self.console.say(&format!(
            "\n{} (X) vs {} (O)",
            player_x.name(),
            player_o.name()
        ))?;
        if self.settings.show_instructions {
            self.console.say("\nGame Instructions:")?;
            self.console.say("- Enter numbers 1-9 to place your mark")?;
            self.console.say("- Numbers represent positions on the board")?;
            self.console.say("- First player is X, second player is O")?;
        }
        self.console.say("\nLet's start!\n")?;

        Ok(GameSession::start(self.console, player_x, player_o, self.observer))
    }

    fn ask_name(&mut self, prompt: &str, fallback: &str) -> Result<String, SessionError> {
        let name = self.console.request_line(prompt)?;
        if name.is_empty() {
            Ok(fallback.to_string())
        } else {
            Ok(name)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Playing
// ─────────────────────────────────────────────────────────────

/// What a single turn attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The chosen cell was occupied; the same player moves again.
    Rejected(Position),
    /// The move stood and the turn passed to the other symbol.
    Continue,
    /// The game is over.
    Finished(GameOutcome),
}

/// Session in play.
///
/// Invariants:
/// - X always moves first
/// - the active symbol flips only after a committed, non-terminal move
/// - once an outcome is stored no player is asked for a move again
pub struct GameSession<C: Console> {
    console: C,
    board: Board,
    player_x: Box<dyn MoveStrategy>,
    player_o: Box<dyn MoveStrategy>,
    active: Symbol,
    history: Vec<Position>,
    outcome: Option<GameOutcome>,
}

impl<C: Console> GameSession<C> {
    /// Starts play on an empty board and fires the initial render.
    #[instrument(skip_all, fields(x = player_x.name(), o = player_o.name()))]
    pub fn start(
        console: C,
        player_x: Box<dyn MoveStrategy>,
        player_o: Box<dyn MoveStrategy>,
        observer: Option<Rc<dyn BoardObserver>>,
    ) -> Self {
        let mut board = Board::new();
        if let Some(observer) = observer {
            board.set_observer(observer);
        }
        board.render();
        info!("Game started");

        Self {
            console,
            board,
            player_x,
            player_o,
            active: Symbol::X,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        if self.outcome.is_some() {
            SessionPhase::Terminal
        } else {
            SessionPhase::Playing
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol whose player is asked next.
    pub fn active_symbol(&self) -> Symbol {
        self.active
    }

    /// Committed moves in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Outcome, once decided.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Player bound to `symbol`.
    pub fn player(&self, symbol: Symbol) -> &dyn MoveStrategy {
        match symbol {
            Symbol::X => self.player_x.as_ref(),
            Symbol::O => self.player_o.as_ref(),
        }
    }

    /// Asks the active player for one move and applies it.
    ///
    /// # Errors
    ///
    /// Fails if the console closes or the strategy has no move.
    #[instrument(skip(self), fields(symbol = %self.active))]
    pub fn take_turn(&mut self) -> Result<TurnOutcome, SessionError> {
        if let Some(outcome) = self.outcome {
            return Ok(TurnOutcome::Finished(outcome));
        }

        let symbol = self.active;
        let player = match symbol {
            Symbol::X => &mut self.player_x,
            Symbol::O => &mut self.player_o,
        };

        self.console.say(TURN_SEPARATOR)?;
        self.console.say(&format!("{}'s turn ({})", player.name(), symbol))?;

        let position = player.get_move(&mut self.board, symbol, &mut self.console)?;

        if let Err(MoveError::SquareOccupied(pos)) = self.board.make_move(position, symbol, true) {
            warn!(position = pos.to_index(), "Move rejected, same player again");
            self.console.say(OCCUPIED_CELL)?;
            return Ok(TurnOutcome::Rejected(pos));
        }
        self.history.push(position);
        debug!(position = position.to_index(), "Move committed");

        let outcome = if self.board.check_win(symbol) {
            GameOutcome::WinBy(symbol)
        } else if self.board.is_full() {
            GameOutcome::Draw
        } else {
            self.active = symbol.opponent();
            return Ok(TurnOutcome::Continue);
        };

        info!(%outcome, moves = self.history.len(), "Game finished");
        self.outcome = Some(outcome);
        self.report(outcome)?;
        Ok(TurnOutcome::Finished(outcome))
    }

    /// Plays turns until the game ends.
    #[instrument(skip(self))]
    pub fn play(mut self) -> Result<FinishedSession<C>, SessionError> {
        let outcome = loop {
            if let TurnOutcome::Finished(outcome) = self.take_turn()? {
                break outcome;
            }
        };

        let winner_name = outcome
            .winner()
            .map(|symbol| self.player(symbol).name().to_string());

        Ok(FinishedSession {
            console: self.console,
            board: self.board,
            history: self.history,
            outcome,
            winner_name,
        })
    }

    /// Gives the console back, ending the session.
    pub fn into_console(self) -> C {
        self.console
    }

    fn report(&mut self, outcome: GameOutcome) -> Result<(), SessionError> {
        match outcome {
            GameOutcome::WinBy(symbol) => {
                let message = format!(
                    "\n🎉🎉🎉 {} ({}) WINS! 🎉🎉🎉",
                    self.player(symbol).name(),
                    symbol
                );
                self.console.say(&message)?;
            }
            GameOutcome::Draw => self.console.say("\n🤝 It's a DRAW! Well played both! 🤝")?,
        }
        self.console.say(&format!("\n{}", BANNER))?;
        self.console.say("       Game Over! Thanks for playing!")?;
        self.console.say(BANNER)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Terminal
// ─────────────────────────────────────────────────────────────

/// Finished session. The outcome is always present.
pub struct FinishedSession<C: Console> {
    console: C,
    board: Board,
    history: Vec<Position>,
    outcome: GameOutcome,
    winner_name: Option<String>,
}

impl<C: Console> FinishedSession<C> {
    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        SessionPhase::Terminal
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Display name of the winner, if there is one.
    pub fn winner_name(&self) -> Option<&str> {
        self.winner_name.as_deref()
    }

    /// Final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Committed moves in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Gives the console back.
    pub fn into_console(self) -> C {
        self.console
    }
}
