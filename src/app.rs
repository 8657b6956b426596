//! Top-level application state machine
//!
//! Menu → session → game over → (restart | menu | quit). Every screen
//! returns a typed choice and every state is matched exhaustively, so there
//! is no "unknown state" to recover from.

use std::cell::Cell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::Config;
use crate::session::{Platform, SessionExit, SessionReport, run_session};
use crate::sim::SessionState;

/// Where the application is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    Playing,
    GameOver,
    Quit,
}

/// Main menu result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Quit,
}

/// Game-over screen result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverChoice {
    Restart,
    Menu,
    Quit,
}

impl AppState {
    pub fn after_menu(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::Start => AppState::Playing,
            MenuChoice::Quit => AppState::Quit,
        }
    }

    pub fn after_session(exit: SessionExit) -> Self {
        match exit {
            SessionExit::Collided => AppState::GameOver,
            SessionExit::ReturnToMenu => AppState::Menu,
            SessionExit::Quit => AppState::Quit,
        }
    }

    pub fn after_game_over(choice: GameOverChoice) -> Self {
        match choice {
            GameOverChoice::Restart => AppState::Playing,
            GameOverChoice::Menu => AppState::Menu,
            GameOverChoice::Quit => AppState::Quit,
        }
    }
}

/// Main menu collaborator
pub trait MenuScreen {
    /// Block until the player picks something
    fn run(&mut self) -> MenuChoice;
}

/// Game-over collaborator
pub trait GameOverScreen {
    /// Show the final score and block until the player picks something
    fn run(&mut self, score: u64) -> GameOverChoice;
}

/// The whole game: screens, platform and the state that links them
pub struct App {
    config: Config,
    platform: Platform,
    menu: Box<dyn MenuScreen>,
    game_over: Box<dyn GameOverScreen>,
    state: AppState,
    /// Seeds each new session
    rng: Pcg32,
    last_report: Option<SessionReport>,
    sessions_played: u32,
}

impl App {
    /// Fails if `config` does not validate
    pub fn new(
        config: Config,
        platform: Platform,
        menu: Box<dyn MenuScreen>,
        game_over: Box<dyn GameOverScreen>,
        seed: u64,
    ) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            platform,
            menu,
            game_over,
            state: AppState::Menu,
            rng: Pcg32::seed_from_u64(seed),
            last_report: None,
            sessions_played: 0,
        })
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn last_report(&self) -> Option<SessionReport> {
        self.last_report
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    /// Run the current state once and move to the next one
    pub fn step(&mut self) -> AppState {
        let next = match self.state {
            AppState::Menu => AppState::after_menu(self.menu.run()),
            AppState::Playing => {
                // Every start and restart gets a fresh session
                let session = SessionState::new(&self.config, self.rng.random());
                let report = run_session(session, &self.config, &mut self.platform);
                self.sessions_played += 1;
                self.last_report = Some(report);
                AppState::after_session(report.exit)
            }
            AppState::GameOver => {
                let score = self.last_report.map_or(0, |r| r.score);
                AppState::after_game_over(self.game_over.run(score))
            }
            AppState::Quit => AppState::Quit,
        };

        if next != self.state {
            log::info!("State: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        next
    }

    /// Run until the player quits
    pub fn run(&mut self) {
        while self.step() != AppState::Quit {}
        log::info!("Goodbye after {} session(s)", self.sessions_played);
    }
}

/// How many more sessions the headless screens will start
#[derive(Debug, Clone, Default)]
pub struct RunBudget(Rc<Cell<u32>>);

impl RunBudget {
    pub fn new(runs: u32) -> Self {
        Self(Rc::new(Cell::new(runs)))
    }

    pub fn remaining(&self) -> u32 {
        self.0.get()
    }

    /// Spend one run if any are left
    fn take(&self) -> bool {
        let left = self.0.get();
        if left == 0 {
            return false;
        }
        self.0.set(left - 1);
        true
    }
}

/// Menu that starts sessions while the budget lasts, then quits
#[derive(Debug, Clone)]
pub struct HeadlessMenu {
    budget: RunBudget,
}

impl HeadlessMenu {
    pub fn new(budget: RunBudget) -> Self {
        Self { budget }
    }
}

impl MenuScreen for HeadlessMenu {
    fn run(&mut self) -> MenuChoice {
        if self.budget.take() {
            MenuChoice::Start
        } else {
            MenuChoice::Quit
        }
    }
}

/// Game-over screen that logs the score and restarts while the budget lasts
#[derive(Debug, Clone)]
pub struct HeadlessGameOver {
    budget: RunBudget,
}

impl HeadlessGameOver {
    pub fn new(budget: RunBudget) -> Self {
        Self { budget }
    }
}

impl GameOverScreen for HeadlessGameOver {
    fn run(&mut self, score: u64) -> GameOverChoice {
        log::info!("Game Over! Score: {}", score);
        if self.budget.take() {
            GameOverChoice::Restart
        } else {
            GameOverChoice::Quit
        }
    }
}
