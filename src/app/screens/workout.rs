//! Workout selection screen implementation
//!
//! Choose a workout type, then start and stop the timer. The start button
//! is relabeled "Stop" while the timer runs.

use super::chrome::{centered_top, render_header, render_help, render_status, screen_layout};
use crate::app::state::{NavigationAction, Trigger};
use crate::workout::{WorkoutSession, WorkoutType};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Workout selection screen component
#[derive(Debug, Clone, Default)]
pub struct WorkoutScreen {
    /// Highlighted row; distinct from the selected workout type
    cursor: Option<usize>,
    list_state: ListState,
    error: Option<String>,
}

impl WorkoutScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Move the cursor up
    pub fn select_previous(&mut self) {
        let count = WorkoutType::all().len();
        let index = match self.cursor {
            Some(index) => (index + count - 1) % count,
            None => count - 1,
        };
        self.cursor = Some(index);
        self.list_state.select(self.cursor);
    }

    /// Move the cursor down
    pub fn select_next(&mut self) {
        let count = WorkoutType::all().len();
        let index = match self.cursor {
            Some(index) => (index + 1) % count,
            None => 0,
        };
        self.cursor = Some(index);
        self.list_state.select(self.cursor);
    }

    /// Handle a navigation action given whether the timer is running
    ///
    /// Space picks the highlighted workout type; Enter is the start/stop
    /// button.
    pub fn handle(&mut self, action: NavigationAction, running: bool) -> Option<Trigger> {
        match action {
            NavigationAction::Up | NavigationAction::Previous => self.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.select_next(),
            NavigationAction::Input(' ') => {
                let workout = WorkoutType::all()[self.cursor?];
                return Some(Trigger::SelectWorkout(workout));
            }
            NavigationAction::Select => {
                return Some(if running { Trigger::Stop } else { Trigger::Start });
            }
            _ => {}
        }
        None
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Render the workout screen for the current workout session
    pub fn render(&mut self, f: &mut Frame, workout: &WorkoutSession) {
        let (header, body, status, help) = screen_layout(f.size());
        render_header(f, header, "Start a Workout");

        let body = centered_top(body, 44, body.height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(WorkoutType::all().len() as u16 + 2), // Types
                Constraint::Length(3),                                   // Timer
                Constraint::Length(3),                                   // Button
                Constraint::Min(0),
            ])
            .split(body);

        let items: Vec<ListItem> = WorkoutType::all()
            .iter()
            .map(|workout_type| {
                let marker = if workout.selected() == Some(*workout_type) {
                    "(•)"
                } else {
                    "( )"
                };
                ListItem::new(format!("{} {}", marker, workout_type))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Workout Type"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let running = workout.timer().is_running();
        let timer_color = if running { Color::Green } else { Color::White };
        let timer = Paragraph::new(workout.timer().label())
            .style(Style::default().fg(timer_color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Elapsed"));
        f.render_widget(timer, chunks[1]);

        let label = if running { "Stop" } else { "Start" };
        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", label),
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(button, chunks[2]);

        render_status(f, status, self.error.as_deref());
        render_help(
            f,
            help,
            &[("↑↓", "Navigate"), ("Space", "Choose type"), ("Enter", label)],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_unset() {
        let mut screen = WorkoutScreen::new();
        assert!(screen.cursor().is_none());
        // Nothing highlighted, so nothing to choose
        assert_eq!(screen.handle(NavigationAction::Input(' '), false), None);
    }

    #[test]
    fn test_cursor_navigation() {
        let mut screen = WorkoutScreen::new();
        screen.select_next();
        assert_eq!(screen.cursor(), Some(0));
        screen.select_previous();
        assert_eq!(screen.cursor(), Some(WorkoutType::all().len() - 1));
        screen.select_next();
        assert_eq!(screen.cursor(), Some(0));

        let mut screen = WorkoutScreen::new();
        screen.select_previous();
        assert_eq!(screen.cursor(), Some(WorkoutType::all().len() - 1));
    }

    #[test]
    fn test_space_chooses_highlighted_type() {
        let mut screen = WorkoutScreen::new();
        screen.handle(NavigationAction::Down, false);
        screen.handle(NavigationAction::Down, false);
        assert_eq!(
            screen.handle(NavigationAction::Input(' '), false),
            Some(Trigger::SelectWorkout(WorkoutType::Strength))
        );
    }

    #[test]
    fn test_enter_is_start_or_stop() {
        let mut screen = WorkoutScreen::new();
        assert_eq!(screen.handle(NavigationAction::Select, false), Some(Trigger::Start));
        assert_eq!(screen.handle(NavigationAction::Select, true), Some(Trigger::Stop));
    }
}
