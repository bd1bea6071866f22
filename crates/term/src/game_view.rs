//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O) so it can be unit-tested. Layout, left to right: controls
//! panel, playfield, info panel (time, score, lines, level, next piece). The
//! controls panel is dropped first when the terminal is too narrow.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WHITE: Rgb = Rgb::new(245, 250, 255);
const MUTED: Rgb = Rgb::new(170, 190, 210);
const BACKDROP: Rgb = Rgb::new(6, 10, 20);
const PLAYFIELD: Rgb = Rgb::new(12, 20, 36);
const GRID: Rgb = Rgb::new(40, 60, 90);
const FRAME: Rgb = Rgb::new(80, 160, 255);

const CONTROLS: [(&str, &str); 6] = [
    ("←/→ or A/D", "Move"),
    ("↓ or S", "Soft drop"),
    ("↑ or W", "Rotate"),
    ("SPACE", "Hard drop"),
    ("R", "Restart"),
    ("ESC", "Quit"),
];
const CONTROLS_W: i32 = 26;
const INFO_W: i32 = 14;
const GAP: i32 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: i32,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1) as i32,
        }
    }

    fn frame_size(&self) -> (i32, i32) {
        (
            BOARD_WIDTH as i32 * self.cell_w + 2,
            BOARD_HEIGHT as i32 + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::new(' ', CellStyle::new(WHITE, BACKDROP)));

        let (frame_w, frame_h) = self.frame_size();
        let full_w = CONTROLS_W + GAP + frame_w + GAP + INFO_W;
        let show_controls = viewport.width as i32 >= full_w;
        let used_w = if show_controls {
            full_w
        } else {
            frame_w + GAP + INFO_W
        };

        let left = (viewport.width as i32 - used_w).max(0) / 2;
        let top = (viewport.height as i32 - frame_h).max(0) / 2;
        let board_x = if show_controls {
            left + CONTROLS_W + GAP
        } else {
            left
        };

        if show_controls {
            draw_controls(fb, left, top, frame_h);
        }

        let shake = shake_offset(snap);
        self.draw_board(fb, snap, board_x + shake, top);
        self.draw_info(fb, snap, board_x + frame_w + GAP, top);

        if snap.is_game_over() {
            draw_game_over(fb, board_x, top, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: i32, y0: i32) {
        let (frame_w, frame_h) = self.frame_size();
        fb.draw_box(x0, y0, frame_w, frame_h, CellStyle::new(FRAME, BACKDROP));

        let grid = CellStyle::new(GRID, PLAYFIELD).dim();
        let flash = clear_flash(snap.clear_progress);

        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                match snap.board[y][x] {
                    Some(_) if snap.clearing[y] => {
                        let style = CellStyle::new(flash, PLAYFIELD).bold();
                        self.fill_cell(fb, x0, y0, x as i8, y as i8, '▓', style);
                    }
                    Some(kind) => {
                        let style = CellStyle::new(kind.color(), PLAYFIELD);
                        self.fill_cell(fb, x0, y0, x as i8, y as i8, '█', style);
                    }
                    None => self.fill_cell(fb, x0, y0, x as i8, y as i8, '·', grid),
                }
            }
        }

        let Some(active) = snap.active else {
            return;
        };

        if let Some(ghost_y) = snap.ghost_y {
            let style = CellStyle::new(active.color.scaled(0.45), PLAYFIELD);
            for (x, y) in active.cells(ghost_y - active.y) {
                if in_field(x, y) && snap.board[y as usize][x as usize].is_none() {
                    self.fill_cell(fb, x0, y0, x, y, '░', style);
                }
            }
        }

        let style = CellStyle::new(active.color, PLAYFIELD).bold();
        for (x, y) in active.cells(0) {
            if in_field(x, y) {
                self.fill_cell(fb, x0, y0, x, y, '█', style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        x0: i32,
        y0: i32,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = x0 + 1 + x as i32 * self.cell_w;
        let py = y0 + 1 + y as i32;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_info(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: i32, y0: i32) {
        let label = CellStyle::new(MUTED, BACKDROP);
        let value = CellStyle::new(WHITE, BACKDROP).bold();

        let mut y = y0 + 1;
        fb.put_str(x, y, "TIME", label);
        let secs = snap.elapsed.as_secs();
        put_clock(fb, x, y + 1, secs / 60, secs % 60, value);
        y += 3;

        for (name, v) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LEVEL", snap.level),
        ] {
            fb.put_str(x, y, name, label);
            put_u32(fb, x, y + 1, v, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        self.draw_preview(fb, snap.next, x, y + 2);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, kind: PieceKind, x: i32, y: i32) {
        let shape = Shape::for_kind(kind);
        let style = CellStyle::new(kind.color(), BACKDROP);
        for (c, r) in shape.offsets() {
            let px = x + c as i32 * self.cell_w;
            fb.fill_rect(px, y + r as i32, self.cell_w, 1, '█', style);
        }
    }
}

fn in_field(x: i8, y: i8) -> bool {
    (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y)
}

/// Rows pulse toward white as the clear animation advances.
fn clear_flash(progress: f32) -> Rgb {
    let p = progress.clamp(0.0, 1.0);
    let lo = 0.55 + 0.45 * p;
    WHITE.scaled(lo)
}

/// Horizontal jitter in columns for the shake hint; alternates sides every
/// ~50ms of game time.
fn shake_offset(snap: &GameSnapshot) -> i32 {
    if snap.shake <= 0.0 {
        return 0;
    }
    let mag = (snap.shake * 4.0).round() as i32;
    if (snap.elapsed.as_millis() / 50) % 2 == 0 {
        mag
    } else {
        -mag
    }
}

fn draw_controls(fb: &mut FrameBuffer, x: i32, y: i32, h: i32) {
    let panel = Rgb::new(10, 20, 35);
    fb.fill_rect(x, y, CONTROLS_W, h, ' ', CellStyle::new(WHITE, panel));
    fb.draw_box(x, y, CONTROLS_W, h, CellStyle::new(FRAME.scaled(0.5), panel));
    fb.put_str(x + 2, y + 1, "CONTROLS", CellStyle::new(WHITE, panel).bold());

    let key = CellStyle::new(WHITE, panel);
    let desc = CellStyle::new(MUTED, panel);
    for (i, (k, d)) in CONTROLS.iter().enumerate() {
        let row = y + 3 + i as i32 * 2;
        fb.put_str(x + 2, row, k, key);
        fb.put_str(x + 15, row, d, desc);
    }
}

fn draw_game_over(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32) {
    let cx = x + w / 2;
    let mid = y + h / 2;
    let shade = CellStyle::new(WHITE, Rgb::new(0, 0, 0));
    fb.fill_rect(x + 1, mid - 2, w - 2, 4, ' ', shade);
    fb.put_str_centered(cx, mid - 1, "GAME OVER", shade.bold());
    fb.put_str_centered(cx, mid, "ESC quit, R restart", shade.with_fg(MUTED));
}

fn put_u32(fb: &mut FrameBuffer, x: i32, y: i32, v: u32, style: CellStyle) {
    let mut digits = [0u8; 10];
    let mut n = v;
    let mut len = 0;
    loop {
        digits[len] = b'0' + (n % 10) as u8;
        len += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    for (i, d) in digits[..len].iter().rev().enumerate() {
        fb.put(x + i as i32, y, *d as char, style);
    }
}

fn put_clock(fb: &mut FrameBuffer, x: i32, y: i32, mm: u64, ss: u64, style: CellStyle) {
    let mm = mm.min(99) as u32;
    let ss = ss as u32;
    let chars = [
        (b'0' + (mm / 10) as u8) as char,
        (b'0' + (mm % 10) as u8) as char,
        ':',
        (b'0' + (ss / 10) as u8) as char,
        (b'0' + (ss % 10) as u8) as char,
    ];
    for (i, ch) in chars.iter().enumerate() {
        fb.put(x + i as i32, y, *ch, style);
    }
}
