//! Game configuration.

use miette::{IntoDiagnostic, WrapErr};
use serde::Deserialize;

use crate::grid::{COLS, ROWS};

/// Color palette of the presentation, normalized RGBA components.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill of a lit cell.
    pub on: [f32; 4],
    /// Fill of an unlit cell.
    pub off: [f32; 4],
    /// Fill of the hover overlay behind the pointed-at cell.
    pub hover: [f32; 4],
    /// Window clear color.
    pub background: [f32; 4],
    /// Text fill.
    pub text: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            on: [1.0, 0.84, 0.25, 1.0],
            off: [0.16, 0.17, 0.20, 1.0],
            hover: [1.0, 1.0, 1.0, 0.35],
            background: [0.09, 0.09, 0.11, 1.0],
            text: [0.92, 0.92, 0.95, 1.0],
        }
    }
}

/// Initial game configuration passed to [`crate::Game::new`].
///
/// There's two ways to initialize the config:
///
/// # Example
///
/// ```rust
/// # use lampje::Config;
/// Config {
///   title: "My Puzzle".to_owned(),
///   ..Default::default()
/// };
/// ```
///
/// # Example
///
/// ```rust
/// # use lampje::Config;
/// Config::default().with_title("My Puzzle");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name in the title bar.
    ///
    /// Defaults to `"Lights Out"`.
    pub title: String,
    /// Window width in pixels.
    ///
    /// Defaults to `700.0`.
    pub width: f32,
    /// Window height in pixels.
    ///
    /// Defaults to `800.0`.
    pub height: f32,
    /// Width and height of a single cell in pixels.
    ///
    /// Defaults to `96.0`.
    pub cell_size: f32,
    /// Empty space between two adjacent cells in pixels.
    ///
    /// Defaults to `12.0`.
    pub cell_gap: f32,
    /// Amount of random toggle moves applied when scrambling the board.
    ///
    /// Defaults to `10`.
    pub scramble_moves: usize,
    /// Amount of decorative circles spawned on the win screen.
    ///
    /// Defaults to `12`.
    pub decor_circles: usize,
    /// Smallest radius of a decorative circle in pixels.
    ///
    /// Defaults to `8.0`.
    pub decor_radius_min: f32,
    /// Biggest radius of a decorative circle in pixels.
    ///
    /// Defaults to `24.0`.
    pub decor_radius_max: f32,
    /// Color palette of the presentation.
    pub colors: Palette,
}

impl Config {
    /// Parse a configuration from a TOML document.
    ///
    /// Missing fields fall back to their defaults, the result is validated.
    ///
    /// # Errors
    ///
    /// - When the document is not valid TOML or a field has the wrong type.
    /// - When the parsed configuration fails [`Config::validate`].
    pub fn from_toml(document: &str) -> miette::Result<Self> {
        let config: Self = toml::from_str(document)
            .into_diagnostic()
            .wrap_err("Error parsing game configuration")?;
        config.validate()?;

        Ok(config)
    }

    /// Check that the configuration describes a playable game.
    ///
    /// # Errors
    ///
    /// - When a dimension is zero or negative.
    /// - When the board does not fit inside the window.
    /// - When the decorative radius range is inverted.
    pub fn validate(&self) -> miette::Result<()> {
        if self.width <= 0.0 || self.height <= 0.0 {
            miette::bail!(
                "window size {}x{} must be positive",
                self.width,
                self.height
            );
        }
        if self.cell_size <= 0.0 {
            miette::bail!("cell size {} must be positive", self.cell_size);
        }
        if self.cell_gap < 0.0 {
            miette::bail!("cell gap {} can't be negative", self.cell_gap);
        }

        let board_width = COLS as f32 * (self.cell_size + self.cell_gap) - self.cell_gap;
        let board_height = ROWS as f32 * (self.cell_size + self.cell_gap) - self.cell_gap;
        if board_width > self.width || board_height > self.height {
            miette::bail!(
                "board of {board_width}x{board_height} does not fit the {}x{} window",
                self.width,
                self.height
            );
        }

        if self.decor_radius_min > self.decor_radius_max {
            miette::bail!(
                "decorative radius range {}..{} is inverted",
                self.decor_radius_min,
                self.decor_radius_max
            );
        }

        Ok(())
    }

    /// Set the name in the title bar.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();

        self
    }

    /// Set the window size in pixels.
    #[must_use]
    pub fn with_window_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;

        self
    }

    /// Set the width and height of a single cell in pixels.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;

        self
    }

    /// Set the empty space between two adjacent cells in pixels.
    #[must_use]
    pub fn with_cell_gap(mut self, cell_gap: f32) -> Self {
        self.cell_gap = cell_gap;

        self
    }

    /// Set the amount of random toggle moves applied when scrambling.
    #[must_use]
    pub fn with_scramble_moves(mut self, scramble_moves: usize) -> Self {
        self.scramble_moves = scramble_moves;

        self
    }

    /// Set the color palette of the presentation.
    #[must_use]
    pub fn with_colors(mut self, colors: Palette) -> Self {
        self.colors = colors;

        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Lights Out".to_owned(),
            width: 700.0,
            height: 800.0,
            cell_size: 96.0,
            cell_gap: 12.0,
            scramble_moves: 10,
            decor_circles: 12,
            decor_radius_min: 8.0,
            decor_radius_max: 24.0,
            colors: Palette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = Config::from_toml(
            r#"
            title = "Lampje"
            cell_size = 64.0
            scramble_moves = 3

            [colors]
            on = [0.0, 1.0, 0.0, 1.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.title, "Lampje");
        assert!((config.cell_size - 64.0).abs() < f32::EPSILON);
        assert_eq!(config.scramble_moves, 3);
        assert_eq!(config.colors.on, [0.0, 1.0, 0.0, 1.0]);
        // Untouched fields keep their defaults
        assert!((config.width - 700.0).abs() < f32::EPSILON);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(Config::from_toml("cell_size = \"big\"").is_err());
    }

    #[test]
    fn oversized_board_is_rejected() {
        // 5 * 200 = 1000 pixels of cells in a 700 pixel window
        let config = Config::default().with_cell_size(200.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_window_is_rejected() {
        let config = Config::default().with_window_size(-1.0, 800.0);
        assert!(config.validate().is_err());
    }
}
