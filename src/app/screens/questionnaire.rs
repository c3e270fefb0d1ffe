//! Post-workout questionnaire screen

use super::chrome::{centered_top, render_header, render_help, screen_layout};
use super::form::{Form, TextField};
use crate::app::state::{NavigationAction, QuestionnaireForm, Trigger};
use crate::util::units::format_clock;
use ratatui::Frame;

#[derive(Debug, Clone)]
pub struct QuestionnaireScreen {
    form: Form,
}

impl QuestionnaireScreen {
    pub fn new() -> Self {
        Self {
            form: Form::new(
                vec![
                    TextField::new("Intensity (1-10)"),
                    TextField::new("How do you feel?"),
                    TextField::new("Notes"),
                ],
                vec!["Submit"],
            ),
        }
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<Trigger> {
        self.form.handle(action)?;
        Some(Trigger::SubmitQuestionnaire(QuestionnaireForm {
            intensity: self.form.value(0).to_string(),
            feeling: self.form.value(1).to_string(),
            notes: self.form.value(2).to_string(),
        }))
    }

    pub fn reset(&mut self) {
        self.form.clear();
    }

    /// Render with the duration of the workout just finished
    pub fn render(&self, f: &mut Frame, elapsed_seconds: u64) {
        let (header, body, _status, help) = screen_layout(f.size());

        let title = format!("Workout complete – {}", format_clock(elapsed_seconds));
        render_header(f, header, &title);
        self.form
            .render(f, centered_top(body, 44, self.form.height()));
        render_help(f, help, &[("Tab", "Next field"), ("Enter", "Submit")]);
    }
}

impl Default for QuestionnaireScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_carries_feedback() {
        let mut screen = QuestionnaireScreen::new();
        for c in "11".chars() {
            screen.handle(NavigationAction::Input(c));
        }
        screen.handle(NavigationAction::Next);
        screen.handle(NavigationAction::Next);
        screen.handle(NavigationAction::Next);

        assert_eq!(
            screen.handle(NavigationAction::Select),
            Some(Trigger::SubmitQuestionnaire(QuestionnaireForm {
                intensity: "11".to_string(),
                ..QuestionnaireForm::default()
            }))
        );
    }
}
