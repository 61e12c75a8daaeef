use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{error, info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{Action, GameConfig, GameEngine, GameSession, Snapshot};
use crate::highscore::HighscoreStore;
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Keyboard-driven game in the terminal
///
/// Owns the current session and replaces it on restart. The highscore is
/// loaded from the store once, here, and written back once per new record.
pub struct HumanMode<S: HighscoreStore> {
    engine: GameEngine,
    session: GameSession,
    store: S,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl<S: HighscoreStore> HumanMode<S> {
    pub fn new(config: GameConfig, store: S) -> Result<Self> {
        Self::with_engine(GameEngine::new(config), store)
    }

    pub fn with_engine(mut engine: GameEngine, store: S) -> Result<Self> {
        let highscore = store.load_or_default();
        let session = engine
            .new_session(highscore)
            .context("Failed to start a game session")?;

        Ok(Self {
            engine,
            session,
            store,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session, self.engine.config().tick_rate_hz)
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Game state advances at most once per tick
        let tick_rate = u64::from(self.engine.config().tick_rate_hz.max(1));
        let mut tick_timer = interval(tick_period(tick_rate));
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => warn!("terminal event error: {}", e),
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    let snapshot = self.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("quitting");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.handle_key_action(action);
        }
    }

    fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::GameAction(Action::Move(dir)) => {
                self.session.queue_direction(dir);
            }
            KeyAction::GameAction(Action::TogglePause) => {
                if self.session.toggle_pause() {
                    info!("paused: {}", self.session.is_paused());
                }
            }
            KeyAction::GameAction(Action::Restart) => {
                if self.session.is_game_over() {
                    self.reset_game();
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        let result = self.engine.step(&mut self.session);

        if let Some(score) = result.new_highscore {
            info!("new highscore: {}", score);
            if let Err(e) = self.store.save(score) {
                warn!("could not persist highscore: {}", e);
            }
        }

        if let Some(reason) = result.game_over {
            info!(
                "game over ({:?}) with score {} after {} ticks",
                reason,
                self.session.score(),
                self.session.ticks
            );
        }
    }

    fn reset_game(&mut self) {
        match self.engine.new_session(self.session.highscore) {
            Ok(session) => {
                self.session = session;
                info!("restarted");
            }
            Err(e) => error!("could not start a new session: {}", e),
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Time between game ticks, to the microsecond
fn tick_period(tick_rate_hz: u64) -> Duration {
    Duration::from_micros(1_000_000 / tick_rate_hz.max(1))
}
