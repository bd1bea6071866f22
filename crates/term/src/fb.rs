//! Framebuffer of styled character cells.

pub use crate::types::Rgb;

/// Per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn with_fg(self, fg: Rgb) -> Self {
        Self { fg, ..self }
    }

    pub fn with_bg(self, bg: Rgb) -> Self {
        Self { bg, ..self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(245, 250, 255), Rgb::new(6, 10, 20))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// 2D grid of cells; writes outside the bounds are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
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

    /// Resize in place, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x as i32, y as i32).map(|i| self.cells[i])
    }

    /// Write one cell; signed coordinates so callers can draw partly
    /// off-screen.
    pub fn put(&mut self, x: i32, y: i32, ch: char, style: CellStyle) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = Cell::new(ch, style);
        }
    }

    /// Write a string left to right. Returns the column after the last char.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) -> i32 {
        let mut cx = x;
        for ch in s.chars() {
            self.put(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a string centered on column `cx`.
    pub fn put_str_centered(&mut self, cx: i32, y: i32, s: &str, style: CellStyle) {
        let w = s.chars().count() as i32;
        self.put_str(cx - w / 2, y, s, style);
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x + dx, y + dy, ch, style);
            }
        }
    }

    /// Single-line box outline.
    pub fn draw_box(&mut self, x: i32, y: i32, w: i32, h: i32, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (r, b) = (x + w - 1, y + h - 1);
        for cx in x + 1..r {
            self.put(cx, y, '─', style);
            self.put(cx, b, '─', style);
        }
        for cy in y + 1..b {
            self.put(x, cy, '│', style);
            self.put(r, cy, '│', style);
        }
        self.put(x, y, '╭', style);
        self.put(r, y, '╮', style);
        self.put(x, b, '╰', style);
        self.put(r, b, '╯', style);
    }

    /// Text of one row with trailing spaces trimmed (handy in tests).
    pub fn row_text(&self, y: u16) -> String {
        let mut s: String = (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect();
        s.truncate(s.trim_end().len());
        s
    }

    /// Whether `needle` appears on any row.
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }
}
