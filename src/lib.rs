#![forbid(unsafe_code)]

//! Frame-driven core of a 5x5 Lights Out puzzle.
//!
//! Clicking a cell toggles its light together with the lights of its
//! orthogonal neighbors, the puzzle is solved once every light is off.
//! This crate owns the board, the screen flow and the pointer hit-testing,
//! nothing else: windowing, rendering and audio are left to a platform layer
//! that drives [`Game`] once per frame and presents the [`Scene`] it
//! produces.
//!
//! # Goals
//!
//! - A pure, deterministic game core that can be driven and tested without a
//!   window.
//! - One update tick per rendered frame with strictly ordered phases: input
//!   sampling, state update, scene production.
//!
//! # Non-Goals
//!
//! - Drawing. The [`Scene`] is an ordered draw list, turning it into draw
//!   calls is the presenter's job.
//! - Persistence, there is no saving or restoring of puzzle progress.
//!
//! # Coordinate convention
//!
//! The x axis grows to the right, the y axis grows up, the origin is the
//! bottom-left corner of the window. All shape positions are centers. Board
//! row `0` is the bottom row, cells are indexed row-major,
//! `index = row * 5 + col`.
//!
//! # Example
//!
//! A platform layer drives the game by sampling its input into a
//! [`FrameInput`] every frame and presenting the returned scene:
//!
//! ```
//! use lampje::{Config, FrameInput, Game};
//!
//! let mut game = Game::new(Config::default()).unwrap();
//!
//! // Run a single frame, holding the start key
//! game.update(FrameInput {
//!     start_held: true,
//!     ..FrameInput::default()
//! });
//!
//! // Hand the draw list to the presenter
//! let scene = game.scene();
//! assert!(!scene.shapes.is_empty());
//! assert!(!game.should_exit());
//! ```

pub mod clock;
pub mod config;
mod decor;
pub mod grid;
mod input;
mod random;
pub mod scene;
pub mod screen;
pub mod shape;

use glam::Vec2;

pub use clock::{Clock, MonotonicClock};
pub use config::{Config, Palette};
use decor::Decor;
pub use grid::Grid;
use input::Input;
pub use input::FrameInput;
pub use random::random;
pub use scene::{Scene, Text};
pub use screen::{Screen, Session};
pub use shape::{Aabb, Shape};

/// RGBA color with normalized `f32` components.
pub type Rgba = rgb::RGBA<f32>;

/// Build a color from normalized RGBA components.
#[inline]
#[must_use]
pub const fn rgba(components: [f32; 4]) -> Rgba {
    Rgba {
        r: components[0],
        g: components[1],
        b: components[2],
        a: components[3],
    }
}

/// How much the hover overlay shrinks while the primary button is held.
const PRESS_SCALE: f32 = 0.92;

/// Top-level driver owning the full game state.
///
/// The platform layer calls [`Game::update`] once per frame with the raw
/// input it sampled, then [`Game::scene`] for the draw list and
/// [`Game::should_exit`] to decide when to tear the window down.
pub struct Game {
    /// Static configuration the game was created with.
    config: Config,
    /// The puzzle board.
    grid: Grid,
    /// Screen flow and session counters.
    session: Session,
    /// Edge-detected input state.
    input: Input,
    /// Win screen decoration.
    decor: Decor,
    /// Time source, sampled once per tick.
    clock: Box<dyn Clock>,
    /// Clock sample of the previous tick, for delta time derivation.
    last_time: f32,
    /// Cell the pointer is currently over, purely visual.
    hovered: Option<usize>,
    /// Latched when an exit press is observed.
    exit: bool,
}

impl Game {
    /// Create a game driven by the wall clock.
    ///
    /// The board starts fully lit behind the start screen.
    ///
    /// # Errors
    ///
    /// - When the configuration fails [`Config::validate`].
    pub fn new(config: Config) -> miette::Result<Self> {
        Self::with_clock(config, MonotonicClock::new())
    }

    /// Create a game driven by a custom time source.
    ///
    /// # Errors
    ///
    /// - When the configuration fails [`Config::validate`].
    pub fn with_clock(config: Config, clock: impl Clock + 'static) -> miette::Result<Self> {
        config.validate()?;

        let mut grid = Grid::new(&config);
        // The start screen shows the board fully lit
        grid.fill(true);

        let session = Session::default();
        let input = Input::default();
        let decor = Decor::default();
        let clock: Box<dyn Clock> = Box::new(clock);
        let last_time = clock.now();
        let hovered = None;
        let exit = false;

        Ok(Self {
            config,
            grid,
            session,
            input,
            decor,
            clock,
            last_time,
            hovered,
            exit,
        })
    }

    /// A single update tick of the game loop.
    ///
    /// Runs the input sampling and state update phases, strictly in that
    /// order. The platform layer must call this exactly once per frame,
    /// before [`Game::scene`].
    pub fn update(&mut self, frame: FrameInput) {
        // Input sampling phase
        self.input.sample(&frame);

        // State update phase
        let now = self.clock.now();
        let delta_time = (now - self.last_time).max(0.0);
        self.last_time = now;

        if self.input.exit_pressed() {
            self.exit = true;
        }

        // The hovered cell only drives the visual overlay
        self.hovered = self
            .input
            .pointer()
            .and_then(|pointer| self.grid.cell_at(pointer));

        match self.session.screen() {
            Screen::Start => {
                if self.input.start_pressed() {
                    self.begin_round(now);
                }
            }
            Screen::Playing => {
                self.session.tick(now);

                if self.input.primary_released() {
                    // The cell under the pointer at the moment of release,
                    // zero matches means no action
                    if let Some(index) = self.hovered {
                        self.grid.toggle(index);
                        self.session.record_click();
                        log::debug!("toggled cell {index}, {} lit", self.grid.lit_count());

                        if self.grid.is_solved() {
                            self.session.finish();
                            self.decor.spawn(&self.config);
                        }
                    }
                }
            }
            Screen::Won => {
                self.decor.update(delta_time, &self.config);
            }
        }

        // Roll the edge detection state, once per tick
        self.input.update();
    }

    /// Start a fresh round from the start screen.
    fn begin_round(&mut self, now: f32) {
        // Scrambling from the solved state with real toggle moves keeps the
        // round solvable
        self.grid.fill(false);
        self.grid.scramble(self.config.scramble_moves);

        self.session.begin(now);

        // A scramble whose moves cancel out leaves nothing to do
        if self.grid.is_solved() {
            self.session.finish();
            self.decor.spawn(&self.config);
        }
    }

    /// Build the draw list for the render phase.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::with_capacity(grid::CELLS + 1);
        let text_color = rgba(self.config.colors.text);
        let top = Vec2::new(self.config.width / 2.0, self.config.height - 60.0);
        let subline = top - Vec2::new(0.0, 50.0);

        match self.session.screen() {
            Screen::Start => {
                self.push_cells(&mut scene);

                scene
                    .texts
                    .push(Text::new("LIGHTS OUT", top, text_color).with_scale(2.0));
                scene.texts.push(Text::new(
                    "turn every light off, press start to play",
                    subline,
                    text_color,
                ));
            }
            Screen::Playing => {
                // The overlay sits behind the pointed-at cell, leaving a
                // glowing border around it
                if let Some(index) = self.hovered {
                    let mut overlay = self.grid.cells()[index].hover().clone();
                    if self.input.primary_held() {
                        overlay.set_size(Vec2::splat(self.config.cell_size * PRESS_SCALE));
                    }

                    scene.shapes.push(overlay);
                }
                self.push_cells(&mut scene);

                let left = Vec2::new(self.config.width * 0.25, top.y);
                let right = Vec2::new(self.config.width * 0.75, top.y);
                scene.texts.push(Text::new(
                    format!("clicks: {}", self.session.clicks()),
                    left,
                    text_color,
                ));
                scene.texts.push(Text::new(
                    format!("time: {:.1}s", self.session.elapsed()),
                    right,
                    text_color,
                ));
            }
            Screen::Won => {
                self.push_cells(&mut scene);
                scene.shapes.extend(self.decor.shapes().cloned());

                scene
                    .texts
                    .push(Text::new("solved!", top, text_color).with_scale(2.0));
                scene.texts.push(Text::new(
                    format!(
                        "{} clicks in {:.1} seconds",
                        self.session.clicks(),
                        self.session.elapsed()
                    ),
                    subline,
                    text_color,
                ));
            }
        }

        scene
    }

    /// Append the cell visuals to the scene, in index order.
    fn push_cells(&self, scene: &mut Scene) {
        scene
            .shapes
            .extend(self.grid.cells().iter().map(|cell| cell.visual().clone()));
    }

    /// Whether an exit-triggering input was observed.
    #[inline]
    #[must_use]
    pub const fn should_exit(&self) -> bool {
        self.exit
    }

    /// Static configuration the game was created with.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The puzzle board.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Screen flow and session counters.
    #[inline]
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Cell the pointer is currently over, purely visual.
    #[inline]
    #[must_use]
    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{Config, FrameInput, Game, Screen};

    /// Frame with only the pointer set.
    fn pointer_frame(pointer: Vec2, primary_held: bool) -> FrameInput {
        FrameInput {
            pointer: Some(pointer),
            primary_held,
            ..FrameInput::default()
        }
    }

    /// Press and release the start key.
    fn press_start(game: &mut Game) {
        game.update(FrameInput {
            start_held: true,
            ..FrameInput::default()
        });
        game.update(FrameInput::default());
    }

    /// Game in the middle of a round.
    ///
    /// An odd amount of scramble moves can never cancel back to the solved
    /// state, so the round is guaranteed to be in progress.
    fn playing_game() -> Game {
        let config = Config::default().with_scramble_moves(9);
        let mut game = Game::new(config).unwrap();
        press_start(&mut game);

        game
    }

    #[test]
    fn start_screen_ignores_clicks() {
        let mut game = Game::new(Config::default()).unwrap();
        let cell = game.grid().cells()[12].visual().position();

        game.update(pointer_frame(cell, true));
        game.update(pointer_frame(cell, false));

        assert_eq!(game.session().screen(), Screen::Start);
        assert_eq!(game.session().clicks(), 0);
        // The start screen board stays fully lit
        assert_eq!(game.grid().lit_count(), crate::grid::CELLS);
    }

    #[test]
    fn start_key_begins_a_round() {
        let game = playing_game();

        assert_eq!(game.session().screen(), Screen::Playing);
        assert_eq!(game.session().clicks(), 0);
        // Freshly scrambled and something left to do
        assert!(!game.grid().is_solved());
    }

    #[test]
    fn degenerate_scramble_wins_immediately() {
        // Zero scramble moves leave the board solved on entry
        let config = Config::default().with_scramble_moves(0);
        let mut game = Game::new(config).unwrap();
        press_start(&mut game);

        assert_eq!(game.session().screen(), Screen::Won);
        assert_eq!(game.session().clicks(), 0);
        assert!(game.session().elapsed().abs() < f32::EPSILON);
    }

    #[test]
    fn hover_has_no_game_state_effect() {
        let mut game = playing_game();
        let lit_before = game.grid().lit_count();

        let cell = game.grid().cells()[7].visual().position();
        game.update(pointer_frame(cell, false));

        assert_eq!(game.hovered(), Some(7));
        assert_eq!(game.grid().lit_count(), lit_before);
        assert_eq!(game.session().clicks(), 0);
    }

    #[test]
    fn hover_overlay_only_while_playing() {
        let mut game = Game::new(Config::default()).unwrap();
        let cell = game.grid().cells()[3].visual().position();

        // Hovering on the start screen adds no overlay shape
        game.update(pointer_frame(cell, false));
        assert_eq!(game.scene().shapes.len(), crate::grid::CELLS);

        let mut game = playing_game();
        let cell = game.grid().cells()[3].visual().position();
        game.update(pointer_frame(cell, false));
        assert_eq!(game.scene().shapes.len(), crate::grid::CELLS + 1);
    }

    #[test]
    fn exit_press_latches() {
        let mut game = Game::new(Config::default()).unwrap();
        assert!(!game.should_exit());

        game.update(FrameInput {
            exit_held: true,
            ..FrameInput::default()
        });
        assert!(game.should_exit());

        // The latch survives the key being released
        game.update(FrameInput::default());
        assert!(game.should_exit());
    }

    #[test]
    fn scene_carries_session_counters() {
        let game = playing_game();

        let scene = game.scene();
        assert!(scene
            .texts
            .iter()
            .any(|text| text.content.contains("clicks: 0")));
    }
}
