//! Terminal blockfall runner (default binary).
//!
//! Reads keys with crossterm, feeds commands and a monotonic clock into the
//! game, and redraws through the diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use blockfall::config::ShellConfig;
use blockfall::core::{Game, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging::init_log;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Config errors surface before raw mode so they print normally.
    let config = ShellConfig::from_env()?;
    if let Some(path) = &config.log_path {
        init_log(config.log_level, path)?;
    }
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game = Game::new(seed);
    game.new_game();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let started = Instant::now();
    let now_ms = || started.elapsed().as_millis() as u64;

    loop {
        game.tick(now_ms());

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(FRAME)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if should_quit(key) {
                    info!("quit at score {}", game.score());
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key) {
                    game.apply(command);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
