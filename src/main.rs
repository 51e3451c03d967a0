//! Terminal arcade entrypoint: a menu that mounts one game at a time.
//!
//! Each runner owns its game instance for the duration of the mount and
//! tears it down (clock cancelled, mouse capture released) on every exit
//! path. The terminal itself is always restored by `main`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEventKind};

use tui_arcade::blocks::BlocksGame;
use tui_arcade::clock::FRAME_MS;
use tui_arcade::fighter::{FighterGame, Phase};
use tui_arcade::input::{self, HeldKeys};
use tui_arcade::shooter::ShooterGame;
use tui_arcade::term::{
    blocks_view, fighter_view, shooter_view, CellStyle, FrameBuffer, Rgb, TerminalRenderer,
};

/// Where a mounted game hands control back to.
enum Flow {
    Menu,
    Quit,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    loop {
        let flow = match menu(term)? {
            Some(Game::Blocks) => run_blocks(term)?,
            Some(Game::Shooter) => run_shooter(term)?,
            Some(Game::Fighter) => run_fighter(term)?,
            None => return Ok(()),
        };
        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

enum Game {
    Blocks,
    Shooter,
    Fighter,
}

fn menu(term: &mut TerminalRenderer) -> Result<Option<Game>> {
    let mut fb = FrameBuffer::new(44, 12);
    let dim = CellStyle::fg(Rgb::gray(150));
    fb.put_str_centered(1, "T U I   A R C A D E", CellStyle::default().bold());
    fb.put_str(12, 4, "1  Blockfall", CellStyle::fg(Rgb::new(0, 0xf0, 0xf0)));
    fb.put_str(12, 5, "2  Starfire", CellStyle::fg(Rgb::new(255, 200, 60)));
    fb.put_str(12, 6, "3  Archetype Duel", CellStyle::fg(Rgb::new(0xef, 0x44, 0x44)));
    fb.put_str(12, 9, "q  quit", dim);
    term.invalidate();
    term.draw(&fb)?;

    loop {
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let ev = event::read()?;
        if input::should_quit(&ev) {
            return Ok(None);
        }
        if let Event::Key(key) = ev {
            if !input::is_press(&key) {
                continue;
            }
            match key.code {
                KeyCode::Char('1') => return Ok(Some(Game::Blocks)),
                KeyCode::Char('2') => return Ok(Some(Game::Shooter)),
                KeyCode::Char('3') => return Ok(Some(Game::Fighter)),
                _ => {}
            }
        } else if let Event::Resize(..) = ev {
            term.invalidate();
            term.draw(&fb)?;
        }
    }
}

/// Poll timeout until the game's next frame is due.
fn frame_timeout(due: Option<Duration>) -> Duration {
    due.unwrap_or(Duration::from_millis(FRAME_MS as u64))
}

fn run_blocks(term: &mut TerminalRenderer) -> Result<Flow> {
    let mut game = BlocksGame::new(rand::random());
    game.start(Instant::now());
    let mut fb = FrameBuffer::new(blocks_view::VIEW_W, blocks_view::VIEW_H);
    term.invalidate();

    loop {
        blocks_view::render(&game.snapshot(), &mut fb);
        term.draw(&fb)?;

        let timeout = frame_timeout(game.clock().time_until_due(Instant::now()));
        if event::poll(timeout)? {
            let ev = event::read()?;
            if input::should_quit(&ev) {
                game.close();
                return Ok(Flow::Quit);
            }
            match ev {
                Event::Key(key) if input::is_press(&key) => {
                    if input::is_close(key.code) {
                        game.close();
                        return Ok(Flow::Menu);
                    }
                    if input::is_restart(key.code) {
                        game.restart(rand::random(), Instant::now());
                    } else if let Some(action) = input::blocks_action(key.code) {
                        game.apply(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let ticks = game.clock_mut().poll(Instant::now());
        if ticks > 0 {
            game.step(ticks * FRAME_MS);
        }
    }
}

fn run_shooter(term: &mut TerminalRenderer) -> Result<Flow> {
    let mut game = ShooterGame::new(rand::random());
    game.start(Instant::now());
    let mut fb = FrameBuffer::new(shooter_view::VIEW_W, shooter_view::VIEW_H);
    term.invalidate();
    term.set_mouse_capture(true)?;

    let flow = loop {
        shooter_view::render(&game.snapshot(), &mut fb);
        term.draw(&fb)?;

        let timeout = frame_timeout(game.clock().time_until_due(Instant::now()));
        if event::poll(timeout)? {
            let ev = event::read()?;
            if input::should_quit(&ev) {
                break Flow::Quit;
            }
            match ev {
                Event::Key(key) if input::is_press(&key) => {
                    if input::is_close(key.code) {
                        break Flow::Menu;
                    }
                    if input::is_restart(key.code) {
                        game.restart(rand::random(), Instant::now());
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                        if let Some((x, y)) =
                            shooter_view::cell_to_world(mouse.column, mouse.row)
                        {
                            game.set_pointer(x, y);
                        }
                    }
                    MouseEventKind::Down(MouseButton::Left) => game.set_firing(true),
                    MouseEventKind::Up(MouseButton::Left) => game.set_firing(false),
                    _ => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let ticks = game.clock_mut().poll(Instant::now());
        for _ in 0..ticks {
            game.step();
        }
    };

    game.close();
    term.set_mouse_capture(false)?;
    Ok(flow)
}

fn run_fighter(term: &mut TerminalRenderer) -> Result<Flow> {
    let mut game = FighterGame::new(rand::random());
    let mut held = HeldKeys::new();
    let mut fb = FrameBuffer::new(fighter_view::VIEW_W, fighter_view::VIEW_H);
    term.invalidate();

    loop {
        fighter_view::render(&game.snapshot(), &mut fb);
        term.draw(&fb)?;

        let timeout = frame_timeout(game.clock().time_until_due(Instant::now()));
        if event::poll(timeout)? {
            let ev = event::read()?;
            if input::should_quit(&ev) {
                game.close();
                return Ok(Flow::Quit);
            }
            match ev {
                Event::Key(key) if input::is_press(&key) => {
                    if input::is_close(key.code) {
                        game.close();
                        return Ok(Flow::Menu);
                    }
                    match game.phase() {
                        Phase::Select { .. } => match key.code {
                            KeyCode::Left => game.select_prev(),
                            KeyCode::Right => game.select_next(),
                            KeyCode::Enter => game.confirm_selection(Instant::now()),
                            _ => {}
                        },
                        Phase::Fighting => held.press(key.code, Instant::now()),
                        Phase::RoundOver { .. } => match key.code {
                            KeyCode::Char('r') | KeyCode::Char('R') => {
                                held.clear();
                                game.rematch(Instant::now());
                            }
                            KeyCode::Enter => {
                                held.clear();
                                game.back_to_select();
                            }
                            _ => {}
                        },
                    }
                }
                Event::Key(key) => held.release(key.code),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let ticks = game.clock_mut().poll(Instant::now());
        for _ in 0..ticks {
            held.expire(Instant::now());
            game.step(input::fighter_inputs(&held));
        }
    }
}
