//! Text-entry form shared by the login, signup, profile and questionnaire
//! screens.
//!
//! A form is a column of text fields followed by a row of buttons. Focus
//! moves over both; Enter on the last field presses the first button.

use crate::app::state::NavigationAction;
use crate::util::units::mask;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Single-line text input
#[derive(Debug, Clone)]
pub struct TextField {
    label: &'static str,
    value: String,
    secret: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            secret: false,
        }
    }

    /// Render the value masked
    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn display_value(&self) -> String {
        if self.secret {
            mask(&self.value)
        } else {
            self.value.clone()
        }
    }
}

/// Fields plus buttons with a single focus cursor
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<TextField>,
    buttons: Vec<&'static str>,
    focus: usize,
}

impl Form {
    pub fn new(fields: Vec<TextField>, buttons: Vec<&'static str>) -> Self {
        Self {
            fields,
            buttons,
            focus: 0,
        }
    }

    fn len(&self) -> usize {
        self.fields.len() + self.buttons.len()
    }

    /// Index of the focused element; fields come first, then buttons
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Value of the field at `index`
    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(TextField::value).unwrap_or_default()
    }

    /// Trimmed value of the field at `index`
    pub fn trimmed(&self, index: usize) -> String {
        self.value(index).trim().to_string()
    }

    /// Set the value of the field at `index`
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
    }

    /// Empty every field and focus the first one
    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focus = 0;
    }

    /// Empty only the secret fields
    pub fn clear_secrets(&mut self) {
        for field in self.fields.iter_mut().filter(|field| field.secret) {
            field.value.clear();
        }
    }

    /// Apply a navigation action; returns the index of a pressed button
    pub fn handle(&mut self, action: NavigationAction) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }

        match action {
            NavigationAction::Up | NavigationAction::Previous => {
                self.focus = (self.focus + len - 1) % len;
            }
            NavigationAction::Down | NavigationAction::Next => {
                self.focus = (self.focus + 1) % len;
            }
            NavigationAction::Select => {
                if self.focus >= self.fields.len() {
                    return Some(self.focus - self.fields.len());
                }
                if self.focus + 1 == self.fields.len() && !self.buttons.is_empty() {
                    return Some(0);
                }
                self.focus += 1;
            }
            NavigationAction::Input(c) => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.push(c);
                }
            }
            NavigationAction::Delete => {
                if let Some(field) = self.fields.get_mut(self.focus) {
                    field.value.pop();
                }
            }
            _ => {}
        }
        None
    }

    /// Rows needed to render the form
    pub fn height(&self) -> u16 {
        (self.fields.len() as u16) * 3 + 3
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let mut constraints: Vec<Constraint> =
            self.fields.iter().map(|_| Constraint::Length(3)).collect();
        constraints.push(Constraint::Length(3)); // Buttons
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (index, field) in self.fields.iter().enumerate() {
            let focused = index == self.focus;
            let border = if focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let mut text = field.display_value();
            if focused {
                text.push('▏');
            }

            let input = Paragraph::new(text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(field.label),
            );
            f.render_widget(input, chunks[index]);
        }

        self.render_buttons(f, chunks[self.fields.len()]);
    }

    fn render_buttons(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (index, label) in self.buttons.iter().enumerate() {
            let focused = self.fields.len() + index == self.focus;
            let style = if focused {
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            if index > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("[ {} ]", label), style));
        }

        let buttons = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(buttons, area);
    }
}
