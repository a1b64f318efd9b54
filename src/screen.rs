//! Coarse screen flow of a puzzle session.

/// Which screen of the game is active.
///
/// The flow is linear, `Start -> Playing -> Won`, there is no way back other
/// than an external restart through [`Session::reset`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Waiting for the player to start a round.
    #[default]
    Start,
    /// A round is in progress.
    Playing,
    /// The puzzle has been solved, terminal until an external restart.
    Won,
}

/// Screen state and counters for a single game session.
#[derive(Debug, Default, Clone)]
pub struct Session {
    /// Active screen.
    screen: Screen,
    /// Amount of accepted toggle actions this round.
    clicks: u32,
    /// Seconds played, frozen at the winning toggle once [`Screen::Won`] is reached.
    elapsed: f32,
    /// Clock sample taken when [`Screen::Playing`] was entered.
    started_at: f32,
}

impl Session {
    /// Active screen.
    #[inline]
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// Amount of accepted toggle actions this round.
    #[inline]
    #[must_use]
    pub const fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Seconds played this round.
    ///
    /// Recomputed every tick while playing, frozen once the puzzle is solved.
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Enter a round, resetting the counters and seeding the round clock.
    ///
    /// # Panics
    ///
    /// - When not on the start screen.
    pub fn begin(&mut self, now: f32) {
        assert!(
            self.screen == Screen::Start,
            "a round can only begin from the start screen"
        );

        self.screen = Screen::Playing;
        self.clicks = 0;
        self.elapsed = 0.0;
        self.started_at = now;

        log::info!("round started");
    }

    /// Record one accepted toggle action.
    ///
    /// # Panics
    ///
    /// - When no round is in progress.
    pub fn record_click(&mut self) {
        assert!(
            self.screen == Screen::Playing,
            "clicks can only be recorded while playing"
        );

        self.clicks += 1;
    }

    /// Recompute the elapsed play time from the round clock.
    ///
    /// Does nothing outside of a round. Resilient to the clock jumping below
    /// the sample taken at round entry.
    pub fn tick(&mut self, now: f32) {
        if self.screen == Screen::Playing {
            self.elapsed = (now - self.started_at).max(0.0);
        }
    }

    /// Enter the win screen, freezing the elapsed time at its last computed value.
    ///
    /// # Panics
    ///
    /// - When no round is in progress.
    pub fn finish(&mut self) {
        assert!(
            self.screen == Screen::Playing,
            "only a round in progress can be won"
        );

        self.screen = Screen::Won;

        log::info!(
            "puzzle solved in {} clicks and {:.1} seconds",
            self.clicks,
            self.elapsed
        );
    }

    /// Return to the start screen for a fresh session.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{Screen, Session};

    #[test]
    fn linear_flow() {
        let mut session = Session::default();
        assert_eq!(session.screen(), Screen::Start);

        session.begin(100.0);
        assert_eq!(session.screen(), Screen::Playing);
        assert_eq!(session.clicks(), 0);
        assert!(session.elapsed().abs() < f32::EPSILON);

        session.record_click();
        session.record_click();
        assert_eq!(session.clicks(), 2);

        session.tick(101.5);
        session.finish();
        assert_eq!(session.screen(), Screen::Won);
        assert!((session.elapsed() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn elapsed_is_frozen_after_winning() {
        let mut session = Session::default();
        session.begin(10.0);
        session.tick(12.0);
        session.finish();

        // Further ticks don't move the frozen value
        session.tick(50.0);
        assert!((session.elapsed() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn elapsed_survives_clock_reset() {
        let mut session = Session::default();
        session.begin(100.0);

        // A clock sample below the round entry clamps instead of wrapping
        session.tick(99.0);
        assert!(session.elapsed().abs() < f32::EPSILON);
    }

    #[test]
    fn reset_returns_to_start() {
        let mut session = Session::default();
        session.begin(0.0);
        session.record_click();
        session.reset();

        assert_eq!(session.screen(), Screen::Start);
        assert_eq!(session.clicks(), 0);
    }

    #[test]
    #[should_panic(expected = "only a round in progress")]
    fn finishing_without_a_round_panics() {
        Session::default().finish();
    }
}
