//! Terminal tile-match runner (default binary).
//!
//! Drag blocks with the left mouse button to swap them with their neighbours.
//! Uses crossterm for input and the framebuffer renderer from `tile_match::term`.
//!
//! Logs go to a file so they never fight the alternate screen:
//! `TILE_MATCH_LOG` (default: `<temp dir>/tile-match.log`), filtered by
//! `RUST_LOG` (default: `info`).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tile_match::engine::{Controller, GameSnapshot};
use tile_match::input::{handle_key_event, handle_mouse_event, should_quit, PointerEvent};
use tile_match::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tile_match::types::{GameConfig, TICK_MS};

fn main() -> Result<()> {
    init_logging()?;

    let mut config = GameConfig::from_env().context("invalid configuration")?;
    config.seed.get_or_insert_with(clock_seed);
    info!(?config, "starting tile-match");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exiting");
    result
}

fn init_logging() -> Result<()> {
    let path = std::env::var_os("TILE_MATCH_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("tile-match.log"));
    let log_file = std::fs::File::create(&path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = Controller::new(config);
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let snap = game.snapshot();
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        debug!(action = action.as_str(), "key action");
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        apply_pointer(&mut game, &view, &snap, viewport, pointer);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            game.tick(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}

fn apply_pointer(
    game: &mut Controller,
    view: &BoardView,
    snap: &GameSnapshot,
    viewport: Viewport,
    pointer: PointerEvent,
) {
    match pointer {
        PointerEvent::Down { x, y } => {
            if let Some((pos, offset)) = view.hit_test(snap, viewport, x, y) {
                game.grab(pos, offset);
            }
        }
        PointerEvent::Drag { x, y } => {
            let region = view.board_region(snap, viewport);
            game.move_to(x, y, Some(&region));
        }
        PointerEvent::Up { .. } => {
            game.release();
        }
    }
}
