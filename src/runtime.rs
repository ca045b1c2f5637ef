use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, Event};

use crate::app::App;
use crate::config::Config;
use crate::error::AppError;
use crate::tui::{Tui, restore_terminal, setup_terminal};
use crate::ui::render;

pub struct AppRuntime {
    cfg: Config,
    app: App,
    terminal: Tui,
    tick_rate: Duration,
    last_tick: Instant,
}

impl AppRuntime {
    pub fn new(cfg: Config) -> Result<Self, AppError> {
        let terminal = setup_terminal().map_err(AppError::TerminalSetup)?;
        let app = App::new(
            Local::now().date_naive(),
            cfg.api_base_url.clone(),
            cfg.supabase_configured(),
        );
        tracing::info!(
            api = %cfg.api_base_url,
            supabase = cfg.supabase_configured(),
            "starting matchday"
        );

        Ok(Self {
            tick_rate: cfg.tick_rate,
            last_tick: Instant::now(),
            cfg,
            app,
            terminal,
        })
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        while !self.app.should_quit {
            self.terminal
                .draw(|f| render(f, &mut self.app))
                .map_err(AppError::TerminalRender)?;

            let timeout = self
                .tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout).map_err(AppError::TerminalRender)? {
                match event::read().map_err(AppError::TerminalRender)? {
                    Event::Key(key) => crate::input::handle_key_event(&mut self.app, key),
                    Event::Mouse(me) => crate::input::handle_mouse_event(&mut self.app, me),
                    _ => {}
                }
            }

            if self.last_tick.elapsed() >= self.tick_rate {
                self.app.poll_refresh_job();
                self.app.start_refresh_if_due(&self.cfg);
                self.last_tick = Instant::now();
            }
        }

        Ok(())
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if let Some(handle) = self.app.refresh.job_handle.take()
            && handle.is_finished()
        {
            let _ = handle.join();
        }
        restore_terminal(&mut self.terminal).map_err(AppError::TerminalRestore)
    }
}
