//! Login screen implementation
//!
//! Identifier and secret entry with Log In and Sign Up buttons.

use super::chrome::{centered_top, render_header, render_help, render_status, screen_layout};
use super::form::{Form, TextField};
use crate::app::state::{NavigationAction, Trigger};
use ratatui::Frame;

const IDENTIFIER: usize = 0;
const SECRET: usize = 1;

const LOG_IN: usize = 0;
const SIGN_UP: usize = 1;

/// Login screen component
#[derive(Debug, Clone)]
pub struct LoginScreen {
    form: Form,
    error: Option<String>,
}

impl LoginScreen {
    /// Create a new login screen
    pub fn new() -> Self {
        Self {
            form: Form::new(
                vec![
                    TextField::new("Username or Email"),
                    TextField::new("Password").secret(),
                ],
                vec!["Log In", "Sign Up"],
            ),
            error: None,
        }
    }

    /// Handle a navigation action, returning the trigger it produces
    ///
    /// Surrounding whitespace is trimmed from both fields before submitting.
    pub fn handle(&mut self, action: NavigationAction) -> Option<Trigger> {
        if matches!(action, NavigationAction::Input(_) | NavigationAction::Delete) {
            self.error = None;
        }

        match self.form.handle(action)? {
            LOG_IN => Some(Trigger::SubmitLogin {
                identifier: self.form.trimmed(IDENTIFIER),
                secret: self.form.trimmed(SECRET),
            }),
            SIGN_UP => Some(Trigger::GoToSignup),
            _ => None,
        }
    }

    /// Show a failed login; the password is cleared, the identifier kept
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.form.clear_secrets();
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear all fields and any error
    pub fn reset(&mut self) {
        self.form.clear();
        self.error = None;
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Render the login screen
    pub fn render(&self, f: &mut Frame) {
        let (header, body, status, help) = screen_layout(f.size());

        render_header(f, header, "Login");
        self.form
            .render(f, centered_top(body, 44, self.form.height()));
        render_status(f, status, self.error.as_deref());
        render_help(
            f,
            help,
            &[("Tab", "Next field"), ("Enter", "Select"), ("Ctrl+C", "Quit")],
        );
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle(NavigationAction::Input(c));
        }
    }

    #[test]
    fn test_submit_trims_fields() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, " alice ");
        screen.handle(NavigationAction::Next);
        type_text(&mut screen, "pw1 ");

        assert_eq!(
            screen.handle(NavigationAction::Select),
            Some(Trigger::SubmitLogin {
                identifier: "alice".to_string(),
                secret: "pw1".to_string(),
            })
        );
    }

    #[test]
    fn test_sign_up_button() {
        let mut screen = LoginScreen::new();
        screen.handle(NavigationAction::Previous);
        assert_eq!(screen.handle(NavigationAction::Select), Some(Trigger::GoToSignup));
    }

    #[test]
    fn test_error_clears_password_and_typing_clears_error() {
        let mut screen = LoginScreen::new();
        screen.form.set_value(IDENTIFIER, "alice");
        screen.form.set_value(SECRET, "wrong");

        screen.set_error("Invalid login");
        assert_eq!(screen.error_message(), Some("Invalid login"));
        assert_eq!(screen.form().value(IDENTIFIER), "alice");
        assert_eq!(screen.form().value(SECRET), "");

        screen.handle(NavigationAction::Input('x'));
        assert!(screen.error_message().is_none());
    }

    #[test]
    fn test_reset() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "alice");
        screen.set_error("Invalid login");
        screen.reset();
        assert_eq!(screen.form().value(IDENTIFIER), "");
        assert!(screen.error_message().is_none());
    }
}
