//! Profile intake screen, shown once after signup

use super::chrome::{centered_top, render_header, render_help, screen_layout};
use super::form::{Form, TextField};
use crate::app::state::{NavigationAction, ProfileForm, Trigger};
use ratatui::Frame;

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    form: Form,
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            form: Form::new(
                vec![
                    TextField::new("Full Name"),
                    TextField::new("Age"),
                    TextField::new("Height"),
                    TextField::new("Weight"),
                    TextField::new("Primary Sport"),
                ],
                vec!["Continue"],
            ),
        }
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<Trigger> {
        self.form.handle(action)?;
        Some(Trigger::SubmitProfile(ProfileForm {
            full_name: self.form.value(0).to_string(),
            age: self.form.value(1).to_string(),
            height: self.form.value(2).to_string(),
            weight: self.form.value(3).to_string(),
            primary_sport: self.form.value(4).to_string(),
        }))
    }

    pub fn reset(&mut self) {
        self.form.clear();
    }

    pub fn render(&self, f: &mut Frame) {
        let (header, body, _status, help) = screen_layout(f.size());

        render_header(f, header, "Tell us about yourself");
        self.form
            .render(f, centered_top(body, 44, self.form.height()));
        render_help(f, help, &[("Tab", "Next field"), ("Enter", "Continue")]);
    }
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}
