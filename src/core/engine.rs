//! Headless frame loop
//!
//! Drives a [`Game`] with a fixed time step. There is no window or
//! renderer; each frame is a single `update` call.

use crate::core::Time;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Name used in log output
    pub title: String,
    /// Seconds simulated per frame
    pub frame_delta: f32,
    /// Stop after this many frames (0 for no limit)
    pub max_frames: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: String::from("Arena"),
            frame_delta: 1.0 / 60.0,
            max_frames: 3600,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the fixed frame delta in seconds
    #[must_use]
    pub fn with_frame_delta(mut self, delta: f32) -> Self {
        self.frame_delta = delta;
        self
    }

    /// Set the frame limit
    #[must_use]
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = frames;
        self
    }
}

/// Game trait that users implement
pub trait Game {
    /// Called once before the first frame
    fn init(&mut self, engine: &mut EngineContext);

    /// Called every frame
    fn update(&mut self, engine: &mut EngineContext);

    /// Called when the loop ends
    fn shutdown(&mut self, _engine: &mut EngineContext) {}
}

/// Context passed to game callbacks
#[derive(Debug, Default)]
pub struct EngineContext {
    /// Time tracking
    pub time: Time,
    /// Should the engine quit
    should_quit: bool,
}

impl EngineContext {
    fn new() -> Self {
        Self::default()
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Check if engine should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Main engine struct
pub struct Engine<G: Game> {
    config: EngineConfig,
    game: G,
    context: EngineContext,
}

impl<G: Game> Engine<G> {
    /// Create a new engine with the given game
    pub fn new(config: EngineConfig, game: G) -> Self {
        Self {
            config,
            game,
            context: EngineContext::new(),
        }
    }

    /// Run until the game quits or the frame limit is reached
    ///
    /// Returns the game so its final state can be inspected.
    pub fn run(mut self) -> G {
        // Already set up when several engines run in one process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();

        log::info!("Starting engine: {}", self.config.title);

        self.game.init(&mut self.context);

        loop {
            let frames = self.context.time.frame_count();
            if self.config.max_frames != 0 && frames >= self.config.max_frames {
                log::info!("Frame limit reached after {frames} frames");
                break;
            }

            self.context.time.advance(self.config.frame_delta);
            self.game.update(&mut self.context);

            if self.context.should_quit() {
                log::info!("Quit requested at frame {}", self.context.time.frame_count());
                break;
            }
        }

        self.game.shutdown(&mut self.context);
        log::info!(
            "Engine stopped after {:.1}s simulated",
            self.context.time.elapsed_seconds()
        );

        self.game
    }
}
