//! Block-stacking view: grid cells drawn two characters wide so they read
//! roughly square, plus a score sidebar.

use crate::blocks::{BlocksSnapshot, GRID_COLS, GRID_ROWS};

use super::fb::{CellStyle, FrameBuffer, Rgb};

pub const VIEW_W: u16 = 40;
pub const VIEW_H: u16 = GRID_ROWS as u16 + 2;

const FIELD_X: u16 = 1;
const FIELD_Y: u16 = 1;

pub fn render(snap: &BlocksSnapshot, fb: &mut FrameBuffer) {
    fb.clear();
    let border = CellStyle::fg(Rgb::gray(120));
    draw_border(fb, 0, 0, GRID_COLS as u16 * 2 + 2, GRID_ROWS as u16 + 2, border);

    for (y, row) in snap.cells.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let Some(color) = cell {
                let style = CellStyle::on(Rgb::from(color.rgb()));
                let cx = FIELD_X + x as u16 * 2;
                let cy = FIELD_Y + y as u16;
                fb.put(cx, cy, ' ', style);
                fb.put(cx + 1, cy, ' ', style);
            }
        }
    }

    let hud_x = GRID_COLS as u16 * 2 + 5;
    let label = CellStyle::fg(Rgb::gray(160));
    let value = CellStyle::default().bold();
    fb.put_str(hud_x, 2, "SCORE", label);
    fb.put_str(hud_x, 3, &snap.score.to_string(), value);
    fb.put_str(hud_x, 5, "DROP MS", label);
    fb.put_str(hud_x, 6, &snap.drop_interval_ms.to_string(), value);
    fb.put_str(hud_x, 8, "arrows move", label);
    fb.put_str(hud_x, 9, "p pause r new", label);

    if snap.game_over {
        fb.put_str(FIELD_X + 5, 10, " GAME OVER ", CellStyle::on(Rgb::new(160, 0, 0)).bold());
    } else if snap.paused {
        fb.put_str(FIELD_X + 7, 10, " PAUSED ", CellStyle::on(Rgb::gray(60)).bold());
    }
}

pub(super) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    fb.hline(x, y, w, '─', style);
    fb.hline(x, y + h - 1, w, '─', style);
    for dy in 0..h {
        fb.put(x, y + dy, '│', style);
        fb.put(x + w - 1, y + dy, '│', style);
    }
    fb.put(x, y, '┌', style);
    fb.put(x + w - 1, y, '┐', style);
    fb.put(x, y + h - 1, '└', style);
    fb.put(x + w - 1, y + h - 1, '┘', style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlocksGame;

    #[test]
    fn active_piece_and_score_are_visible() {
        let game = BlocksGame::new(1);
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        render(&game.snapshot(), &mut fb);

        // The spawned piece paints at least one colored cell in the top rows.
        let default_bg = CellStyle::default().bg;
        let painted = (0..VIEW_W).any(|x| {
            (1..5).any(|y| fb.get(x, y).map(|c| c.style.bg != default_bg).unwrap_or(false))
        });
        assert!(painted);
        assert_eq!(fb.get(25, 3).map(|c| c.ch), Some('0'));
    }

    #[test]
    fn game_over_overlay_renders() {
        let game = BlocksGame::new(1);
        let mut snap = game.snapshot();
        snap.game_over = true;
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        render(&snap, &mut fb);
        let row: String = (0..VIEW_W)
            .filter_map(|x| fb.get(x, 10).map(|c| c.ch))
            .collect();
        assert!(row.contains("GAME OVER"));
    }
}
