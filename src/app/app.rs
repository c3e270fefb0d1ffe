//! Main application controller
//!
//! Manages the TUI and the screen loop: poll the workout timer, draw the
//! active screen, then wait briefly for a key.

use crate::{
    activity::ActivityProvider,
    app::{controller::Controller, tui::Tui},
    config::AppConfig,
    store::CredentialStore,
    Result,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// TUI application
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Screens and navigation state
    controller: Controller,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &AppConfig, activity: Arc<dyn ActivityProvider>) -> Result<Self> {
        config.validate()?;
        let store = CredentialStore::new(&config.store_path).with_policy(config.secret_policy);

        // Fail before taking over the terminal if the store is unusable.
        let accounts = store.load()?;
        info!(
            accounts = accounts.len(),
            policy = config.secret_policy.description(),
            "Credential store ready"
        );

        Ok(Self {
            tui: Tui::new()?,
            controller: Controller::new(store, activity),
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Give the terminal back
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.controller.should_quit() {
            self.controller.tick(Instant::now());
            self.draw()?;
            if let Some(key) = self.tui.next_key()? {
                // Failures are already shown on the screen that caused them.
                let _ = self.controller.handle_key(key).await;
            }
        }
        info!("Exiting");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let controller = &mut self.controller;
        self.tui.draw(|f| controller.draw(f))?;
        Ok(())
    }
}
