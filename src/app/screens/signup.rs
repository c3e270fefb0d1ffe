//! Signup screen implementation
//!
//! Username, email and password entry. The email is collected but not
//! stored.

use super::chrome::{centered_top, render_header, render_help, render_status, screen_layout};
use super::form::{Form, TextField};
use crate::app::state::{NavigationAction, Trigger};
use ratatui::Frame;

const USERNAME: usize = 0;
const PASSWORD: usize = 2;

const SIGN_UP: usize = 0;
const LOG_IN: usize = 1;

/// Signup screen component
#[derive(Debug, Clone)]
pub struct SignupScreen {
    form: Form,
    error: Option<String>,
}

impl SignupScreen {
    /// Create a new signup screen
    pub fn new() -> Self {
        Self {
            form: Form::new(
                vec![
                    TextField::new("Username"),
                    TextField::new("Email"),
                    TextField::new("Password").secret(),
                ],
                vec!["Sign Up", "Log In"],
            ),
            error: None,
        }
    }

    /// Handle a navigation action, returning the trigger it produces
    pub fn handle(&mut self, action: NavigationAction) -> Option<Trigger> {
        if action == NavigationAction::Back {
            return Some(Trigger::GoToLogin);
        }
        if matches!(action, NavigationAction::Input(_) | NavigationAction::Delete) {
            self.error = None;
        }

        match self.form.handle(action)? {
            SIGN_UP => Some(Trigger::SubmitSignup {
                identifier: self.form.trimmed(USERNAME),
                secret: self.form.trimmed(PASSWORD),
            }),
            LOG_IN => Some(Trigger::GoToLogin),
            _ => None,
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear all fields and any error
    pub fn reset(&mut self) {
        self.form.clear();
        self.error = None;
    }

    /// Render the signup screen
    pub fn render(&self, f: &mut Frame) {
        let (header, body, status, help) = screen_layout(f.size());

        render_header(f, header, "Sign Up");
        self.form
            .render(f, centered_top(body, 44, self.form.height()));
        render_status(f, status, self.error.as_deref());
        render_help(
            f,
            help,
            &[("Tab", "Next field"), ("Enter", "Select"), ("Esc", "Back to login")],
        );
    }
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}
