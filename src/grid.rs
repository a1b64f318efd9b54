//! The puzzle board and its toggle rule.
//!
//! Cells are stored in row-major order with row `0` at the bottom of the
//! window, matching the y-up coordinate convention of the crate.

use glam::Vec2;
use smallvec::SmallVec;

use crate::{config::Config, rgba, shape::Shape, Rgba};

/// Amount of cell rows on the board.
pub const ROWS: usize = 5;
/// Amount of cell columns on the board.
pub const COLS: usize = 5;
/// Total amount of cells on the board.
pub const CELLS: usize = ROWS * COLS;

/// How much bigger the hover hit-box is than the cell itself.
const HOVER_SCALE: f32 = 1.15;

/// Single toggleable unit of the board.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Whether the light of this cell is on.
    lit: bool,
    /// Shape drawn for the cell itself.
    visual: Shape,
    /// Slightly bigger shape drawn behind the cell while the pointer is over it.
    ///
    /// Doubles as the hit-box for pointer interaction.
    hover: Shape,
}

impl Cell {
    /// Create an unlit cell centered at the position.
    fn new(position: Vec2, config: &Config) -> Self {
        let lit = false;
        let visual = Shape::rect(
            position,
            Vec2::splat(config.cell_size),
            rgba(config.colors.off),
        );
        let hover = Shape::rect(
            position,
            Vec2::splat(config.cell_size * HOVER_SCALE),
            rgba(config.colors.hover),
        );

        Self { lit, visual, hover }
    }

    /// Whether the light of this cell is on.
    #[inline]
    #[must_use]
    pub const fn is_lit(&self) -> bool {
        self.lit
    }

    /// Shape drawn for the cell.
    #[inline]
    #[must_use]
    pub const fn visual(&self) -> &Shape {
        &self.visual
    }

    /// Hover overlay shape, also the hit-box for pointer interaction.
    #[inline]
    #[must_use]
    pub const fn hover(&self) -> &Shape {
        &self.hover
    }

    /// Set the light state and sync the visual color to it.
    fn set_lit(&mut self, lit: bool, on: Rgba, off: Rgba) {
        self.lit = lit;
        self.visual.set_color(if lit { on } else { off });
    }
}

/// Fixed 5x5 board of toggleable cells.
#[derive(Debug, Clone)]
pub struct Grid {
    /// All cells in row-major order, row `0` at the bottom.
    cells: Vec<Cell>,
    /// Color of a lit cell.
    on_color: Rgba,
    /// Color of an unlit cell.
    off_color: Rgba,
}

impl Grid {
    /// Build the board from the configuration, all cells unlit.
    ///
    /// The board is centered inside the window, cell shapes are created once
    /// here and mutated in place afterwards.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let step = config.cell_size + config.cell_gap;
        let board = Vec2::new(COLS as f32, ROWS as f32) * step - Vec2::splat(config.cell_gap);
        let origin = (Vec2::new(config.width, config.height) - board) / 2.0
            + Vec2::splat(config.cell_size / 2.0);

        let mut cells = Vec::with_capacity(CELLS);
        for row in 0..ROWS {
            for col in 0..COLS {
                let position = origin + Vec2::new(col as f32, row as f32) * step;

                cells.push(Cell::new(position, config));
            }
        }

        let on_color = rgba(config.colors.on);
        let off_color = rgba(config.colors.off);

        Self {
            cells,
            on_color,
            off_color,
        }
    }

    /// Set every cell to the same light state.
    pub fn fill(&mut self, lit: bool) {
        let (on, off) = (self.on_color, self.off_color);

        for cell in &mut self.cells {
            cell.set_lit(lit, on, off);
        }
    }

    /// Flip the cell at the index together with its orthogonal neighbors.
    ///
    /// The visual color of every affected cell is synced to its new state.
    ///
    /// # Panics
    ///
    /// - When the index is out of range, passing one is a programming error.
    pub fn toggle(&mut self, index: usize) {
        let (on, off) = (self.on_color, self.off_color);

        for affected in Self::neighbors(index) {
            let cell = &mut self.cells[affected];
            cell.set_lit(!cell.lit, on, off);
        }
    }

    /// Indices affected by toggling a cell: itself plus the cells directly
    /// above, below, left and right of it.
    ///
    /// Neighbor existence is decided on the `(row, col)` pair with explicit
    /// boundary checks, never on raw linear-index arithmetic, so an edge cell
    /// can't pick up a neighbor from the adjacent row.
    ///
    /// # Panics
    ///
    /// - When the index is out of range.
    #[must_use]
    pub fn neighbors(index: usize) -> SmallVec<[usize; 5]> {
        assert!(
            index < CELLS,
            "cell index {index} out of range for a {ROWS}x{COLS} board"
        );

        let row = index / COLS;
        let col = index % COLS;

        let mut indices = SmallVec::new();
        indices.push(index);
        if row + 1 < ROWS {
            indices.push(index + COLS);
        }
        if row > 0 {
            indices.push(index - COLS);
        }
        if col > 0 {
            indices.push(index - 1);
        }
        if col + 1 < COLS {
            indices.push(index + 1);
        }

        indices
    }

    /// Perturb the board by applying the toggle rule at randomly drawn cells.
    ///
    /// Because every perturbation is a legal player move, a board scrambled
    /// from the solved state stays solvable, each move is its own inverse.
    ///
    /// # Returns
    ///
    /// - The toggled indices, in the order they were applied.
    pub fn scramble(&mut self, moves: usize) -> Vec<usize> {
        let moves: Vec<usize> = (0..moves).map(|_| crate::random::index(CELLS)).collect();

        for &index in &moves {
            self.toggle(index);
        }

        log::debug!(
            "scrambled board with {} toggles, {} lit",
            moves.len(),
            self.lit_count()
        );

        moves
    }

    /// Amount of cells whose light is on.
    #[inline]
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.lit).count()
    }

    /// Whether the puzzle is solved, meaning every light is off.
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.lit_count() == 0
    }

    /// Find the cell whose hit-box contains the point.
    ///
    /// Scans in index order, so when adjacent hover regions overlap the
    /// lowest index wins deterministically.
    #[inline]
    #[must_use]
    pub fn cell_at(&self, point: Vec2) -> Option<usize> {
        self.cells.iter().position(|cell| cell.hover.contains(point))
    }

    /// All cells in row-major order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
