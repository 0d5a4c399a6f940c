//! climate-tui - ClimateAI Predictor in the terminal
//!
//! Entry point. Uses the ratatui component architecture: events become
//! Actions, Actions update state, state is drawn.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{error, info};

fn main() -> Result<()> {
    let (config, origin) = Config::load_or_init();
    let log_file = logging::init(&config.log_level)?;
    info!(log_file = ?log_file, "starting climate-tui");
    origin.log();
    info!(config = ?config, "config resolved");

    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    let mut app = App::new(&config);
    let result = app.init().and_then(|_| run_app(&mut tui, &mut app));

    tui.exit()?;

    if let Err(err) = result {
        error!(error = ?err, "exited with error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exited cleanly");
    Ok(())
}

/// Draw, wait for one event, apply the resulting action chain
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!(error = %e, "draw failed");
            }
        })?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => app.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // An update may produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
