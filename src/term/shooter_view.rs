//! Shooter view: the 400x600 world scaled onto a 50x30 character playfield
//! with a status row above it.

use crate::shooter::{EnemyKind, PowerupKind, ShooterSnapshot};

use super::blocks_view::draw_border;
use super::fb::{CellStyle, FrameBuffer, Rgb};

/// World units per terminal column / row.
const SCALE_X: f32 = 8.0;
const SCALE_Y: f32 = 20.0;

const FIELD_W: u16 = 50;
const FIELD_H: u16 = 30;
const FIELD_X: u16 = 1;
const FIELD_Y: u16 = 2;

pub const VIEW_W: u16 = FIELD_W + 2;
pub const VIEW_H: u16 = FIELD_H + 3;

/// Map a terminal cell (from a mouse event) into world coordinates, if it
/// falls inside the playfield.
pub fn cell_to_world(col: u16, row: u16) -> Option<(f32, f32)> {
    let inside = (FIELD_X..FIELD_X + FIELD_W).contains(&col)
        && (FIELD_Y..FIELD_Y + FIELD_H).contains(&row);
    inside.then(|| {
        (
            (col - FIELD_X) as f32 * SCALE_X + SCALE_X / 2.0,
            (row - FIELD_Y) as f32 * SCALE_Y + SCALE_Y / 2.0,
        )
    })
}

fn plot(x: f32, y: f32) -> (u16, u16) {
    (
        FIELD_X + (x / SCALE_X).clamp(0.0, (FIELD_W - 1) as f32) as u16,
        FIELD_Y + (y / SCALE_Y).clamp(0.0, (FIELD_H - 1) as f32) as u16,
    )
}

pub fn render(snap: &ShooterSnapshot, fb: &mut FrameBuffer) {
    fb.clear();

    let label = CellStyle::fg(Rgb::gray(160));
    fb.put_str(1, 0, "HP", label);
    let hp_style = if snap.player.hp > 40 {
        CellStyle::fg(Rgb::new(0, 200, 80))
    } else {
        CellStyle::fg(Rgb::new(220, 60, 40))
    };
    fb.put_bar(4, 0, 20, snap.player.hp as f32 / 100.0, hp_style);
    if snap.player.shield_frames > 0 {
        fb.put_str(26, 0, "[SHIELD]", CellStyle::fg(Rgb::new(80, 160, 255)));
    }
    if snap.player.double_frames > 0 {
        fb.put_str(35, 0, "[2X]", CellStyle::fg(Rgb::new(255, 200, 60)));
    }
    fb.put_str(42, 0, &format!("{:>8}", snap.score), CellStyle::default().bold());

    draw_border(fb, 0, 1, FIELD_W + 2, FIELD_H + 2, CellStyle::fg(Rgb::gray(120)));

    for p in &snap.particles {
        let (x, y) = plot(p.x, p.y);
        fb.put(x, y, '·', CellStyle::fg(Rgb::new(255, 160, 60)));
    }
    for p in &snap.projectiles {
        let (x, y) = plot(p.x, p.y);
        fb.put(x, y, '|', CellStyle::fg(Rgb::new(120, 220, 255)));
    }
    for p in &snap.powerups {
        let (x, y) = plot(p.x, p.y);
        let (ch, color) = match p.kind {
            PowerupKind::Shield => ('S', Rgb::new(80, 160, 255)),
            PowerupKind::DoubleShot => ('D', Rgb::new(255, 200, 60)),
            PowerupKind::Heal => ('H', Rgb::new(0, 220, 100)),
        };
        fb.put(x, y, ch, CellStyle::fg(color).bold());
    }
    for e in &snap.enemies {
        let (x, y) = plot(e.x, e.y);
        let (ch, color) = match e.kind {
            EnemyKind::Normal => ('◆', Rgb::new(220, 60, 60)),
            EnemyKind::Chaser => ('◈', Rgb::new(255, 120, 200)),
        };
        fb.put(x, y, ch, CellStyle::fg(color));
    }
    if !snap.game_over {
        let (x, y) = plot(snap.player.x, snap.player.y);
        let ship = if snap.player.shield_frames > 0 {
            CellStyle::fg(Rgb::new(80, 160, 255)).bold()
        } else {
            CellStyle::fg(Rgb::gray(240)).bold()
        };
        fb.put(x, y, '▲', ship);
    } else {
        fb.put_str_centered(FIELD_Y + FIELD_H / 2, " GAME OVER ", CellStyle::on(Rgb::new(160, 0, 0)).bold());
        fb.put_str_centered(FIELD_Y + FIELD_H / 2 + 1, " r to retry, esc for menu ", CellStyle::fg(Rgb::gray(160)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shooter::ShooterGame;

    #[test]
    fn pointer_mapping_round_trips_through_the_playfield() {
        let (x, y) = cell_to_world(FIELD_X, FIELD_Y).unwrap();
        assert_eq!((x, y), (4.0, 10.0));
        let (x, _) = cell_to_world(FIELD_X + FIELD_W - 1, FIELD_Y).unwrap();
        assert!(x < 400.0);
        // The border and HUD are dead zones.
        assert!(cell_to_world(0, 5).is_none());
        assert!(cell_to_world(5, 0).is_none());
    }

    #[test]
    fn ship_renders_at_the_scaled_position() {
        let mut game = ShooterGame::new(1);
        game.set_pointer(200.0, 300.0);
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        render(&game.snapshot(), &mut fb);
        assert_eq!(fb.get(FIELD_X + 25, FIELD_Y + 15).map(|c| c.ch), Some('▲'));
    }

    #[test]
    fn game_over_overlay_replaces_the_ship() {
        let game = ShooterGame::new(1);
        let mut snap = game.snapshot();
        snap.game_over = true;
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        render(&snap, &mut fb);
        let row: String = (0..VIEW_W)
            .filter_map(|x| fb.get(x, FIELD_Y + FIELD_H / 2).map(|c| c.ch))
            .collect();
        assert!(row.contains("GAME OVER"));
    }
}
