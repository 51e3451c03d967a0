//! Fighter view: selection roster, the 1024x600 stage scaled to character
//! cells, health and energy bars, and the round-over overlay.

use crate::fighter::{
    Fighter, FighterSnapshot, Phase, SpecialKind, FIGHTER_H, ROSTER,
};

use super::fb::{CellStyle, FrameBuffer, Rgb};

const SCALE_X: f32 = 16.0;
const SCALE_Y: f32 = 20.0;

pub const VIEW_W: u16 = 64;
pub const VIEW_H: u16 = 24;

/// Stage rows start below the two HUD rows.
const STAGE_Y: u16 = 2;
const GROUND_ROW: u16 = STAGE_Y + 20;

pub fn render(snap: &FighterSnapshot, fb: &mut FrameBuffer) {
    fb.clear();
    match snap.phase {
        Phase::Select { hovered } => render_select(hovered, fb),
        Phase::Fighting => render_stage(snap, fb),
        Phase::RoundOver { player_won } => {
            render_stage(snap, fb);
            let msg = if player_won { " YOU WIN " } else { " CPU WINS " };
            fb.put_str_centered(10, msg, CellStyle::on(Rgb::new(160, 120, 0)).bold());
            fb.put_str_centered(12, " r rematch   enter new fighters ", CellStyle::fg(Rgb::gray(180)));
        }
    }
}

fn render_select(hovered: usize, fb: &mut FrameBuffer) {
    fb.put_str_centered(1, "CHOOSE YOUR FIGHTER", CellStyle::default().bold());
    for (i, archetype) in ROSTER.iter().enumerate() {
        let y = 4 + i as u16 * 3;
        let color = Rgb::from(archetype.rgb());
        let (name_style, marker) = if i == hovered {
            (CellStyle::fg(color).bold(), '>')
        } else {
            (CellStyle::fg(color), ' ')
        };
        fb.put(6, y, marker, CellStyle::default().bold());
        fb.put_str(8, y, archetype.name(), name_style);
        fb.put_str(
            20,
            y,
            &format!("{:<14} {}", archetype.power_name(), archetype.tagline()),
            CellStyle::fg(Rgb::gray(150)),
        );
    }
    fb.put_str_centered(
        VIEW_H - 2,
        "left/right pick   enter fight   esc menu",
        CellStyle::fg(Rgb::gray(130)),
    );
}

fn render_stage(snap: &FighterSnapshot, fb: &mut FrameBuffer) {
    draw_hud(snap, fb);

    fb.hline(0, GROUND_ROW, VIEW_W, '▔', CellStyle::fg(Rgb::gray(110)));

    for s in &snap.sparks {
        let (x, y) = plot(s.x, s.y);
        fb.put(x, y, '✦', CellStyle::fg(Rgb::new(255, 240, 160)));
    }
    for p in &snap.projectiles {
        let (x, y) = plot(p.x, p.y);
        let (ch, color) = match p.kind {
            SpecialKind::Ice => ('❆', Rgb::new(120, 200, 255)),
            _ => ('●', Rgb::new(255, 120, 40)),
        };
        fb.put(x, y, ch, CellStyle::fg(color).bold());
    }

    draw_fighter(&snap.player, fb);
    draw_fighter(&snap.cpu, fb);
}

fn plot(x: f32, y: f32) -> (u16, u16) {
    (
        (x / SCALE_X).clamp(0.0, (VIEW_W - 1) as f32) as u16,
        STAGE_Y + (y / SCALE_Y).clamp(0.0, (VIEW_H - STAGE_Y - 1) as f32) as u16,
    )
}

fn draw_fighter(f: &Fighter, fb: &mut FrameBuffer) {
    let (x, y) = plot(f.x, f.y);
    let rows = (FIGHTER_H / SCALE_Y) as u16;
    let color = Rgb::from(f.archetype.rgb());
    let body = if f.frozen_frames > 0 {
        CellStyle::on(Rgb::new(120, 200, 255))
    } else if f.stun_frames > 0 {
        CellStyle::on(Rgb::gray(90))
    } else {
        CellStyle::on(color)
    };
    for dy in 0..rows {
        for dx in 0..3 {
            fb.put(x + dx, y + dy, ' ', body);
        }
    }
    // Face marker on the leading edge; doubles as the swing cue.
    let face_x = if f.facing_right { x + 2 } else { x };
    let face = if f.attacking { '═' } else { '·' };
    fb.put(face_x, y + 1, face, CellStyle { fg: Rgb::gray(10), ..body });
}

fn draw_hud(snap: &FighterSnapshot, fb: &mut FrameBuffer) {
    let p = &snap.player;
    let c = &snap.cpu;
    let p_color = CellStyle::fg(Rgb::from(p.archetype.rgb())).bold();
    let c_color = CellStyle::fg(Rgb::from(c.archetype.rgb())).bold();

    fb.put_str(0, 0, p.archetype.name(), p_color);
    fb.put_bar(8, 0, 20, p.hp as f32 / 100.0, CellStyle::fg(Rgb::new(0, 200, 80)));
    fb.put_bar(8, 1, 20, p.energy as f32 / 100.0, CellStyle::fg(Rgb::new(80, 160, 255)));

    let name_x = VIEW_W - c.archetype.name().chars().count() as u16;
    fb.put_str(name_x, 0, c.archetype.name(), c_color);
    fb.put_bar(VIEW_W - 29, 0, 20, c.hp as f32 / 100.0, CellStyle::fg(Rgb::new(0, 200, 80)));
    fb.put_bar(VIEW_W - 29, 1, 20, c.energy as f32 / 100.0, CellStyle::fg(Rgb::new(80, 160, 255)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fighter::FighterGame;
    use std::time::Instant;

    #[test]
    fn select_screen_lists_the_roster() {
        let game = FighterGame::new(1);
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        render(&game.snapshot(), &mut fb);

        for (i, archetype) in ROSTER.iter().enumerate() {
            let y = 4 + i as u16 * 3;
            let row: String = (0..VIEW_W).filter_map(|x| fb.get(x, y).map(|c| c.ch)).collect();
            assert!(row.contains(archetype.name()), "{}", archetype.name());
        }
    }

    #[test]
    fn fighting_phase_draws_both_fighters_on_the_ground_row() {
        let mut game = FighterGame::new(1);
        game.confirm_selection(Instant::now());
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        render(&game.snapshot(), &mut fb);

        // The player body paints background color at its plotted position.
        let snap = game.snapshot();
        let (px, py) = plot(snap.player.x, snap.player.y);
        let body_bg = fb.get(px, py).map(|c| c.style.bg);
        assert_eq!(body_bg, Some(Rgb::from(snap.player.archetype.rgb())));

        let row: String = (0..VIEW_W)
            .filter_map(|x| fb.get(x, GROUND_ROW).map(|c| c.ch))
            .collect();
        assert!(row.contains('▔'));
    }

    #[test]
    fn round_over_overlay_names_the_winner() {
        let game = FighterGame::new(1);
        let mut snap = game.snapshot();
        snap.phase = Phase::RoundOver { player_won: true };
        let mut fb = FrameBuffer::new(VIEW_W, VIEW_H);
        render(&snap, &mut fb);
        let row: String = (0..VIEW_W).filter_map(|x| fb.get(x, 10).map(|c| c.ch)).collect();
        assert!(row.contains("YOU WIN"));
    }
}
