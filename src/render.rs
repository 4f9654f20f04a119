//! Screen-buffer drawing service.
//!
//! The simulation paints into a fixed-size grid of glyph + tint cells and
//! never reads it back.  The binary flushes the grid to the terminal each
//! frame; tests inspect it directly.

// ── Tints ─────────────────────────────────────────────────────────────────────

/// Logical colour of a cell.  The terminal layer maps these to real colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Blank,
    Frame,
    Text,
    Highlight,
    Player,
    Enemy,
    Building,
    PlayerShot,
    EnemyShot,
    Debris,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub tint: Tint,
}

impl Default for Cell {
    fn default() -> Self {
        Cell { symbol: ' ', tint: Tint::Blank }
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

pub trait Canvas {
    /// Paint one cell.  Coordinates outside the canvas are silently dropped.
    fn put(&mut self, x: i32, y: i32, symbol: char, tint: Tint);

    fn write_text(&mut self, x: i32, y: i32, text: &str, tint: Tint) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as i32, y, ch, tint);
        }
    }

    /// Blank every cell inside the given rectangle (inclusive).
    fn clear_region(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, ' ', Tint::Blank);
            }
        }
    }

    /// Box outline with corners at (x0, y0) and (x1, y1), inclusive.
    fn draw_rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, tint: Tint) {
        for x in x0 + 1..x1 {
            self.put(x, y0, '─', tint);
            self.put(x, y1, '─', tint);
        }
        for y in y0 + 1..y1 {
            self.put(x0, y, '│', tint);
            self.put(x1, y, '│', tint);
        }
        self.put(x0, y0, '┌', tint);
        self.put(x1, y0, '┐', tint);
        self.put(x0, y1, '└', tint);
        self.put(x1, y1, '┘', tint);
    }
}

// ── ScreenBuffer ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Text of a single row, handy for assertions.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width as i32)
            .filter_map(|x| self.cell(x, y))
            .map(|c| c.symbol)
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }
}

impl Canvas for ScreenBuffer {
    fn put(&mut self, x: i32, y: i32, symbol: char, tint: Tint) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { symbol, tint };
        }
    }
}
