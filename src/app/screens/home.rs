//! Home screen implementation
//!
//! Dashboard with a greeting, the quick actions (start workout, logout) and
//! the recent activity feed.

use super::chrome::{render_header, render_help, render_status, screen_layout};
use crate::activity::ActivityRecord;
use crate::app::state::{NavigationAction, Trigger};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Quick actions in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    StartWorkout,
    Logout,
}

impl HomeAction {
    fn all() -> &'static [HomeAction] {
        &[HomeAction::StartWorkout, HomeAction::Logout]
    }

    fn label(&self) -> &'static str {
        match self {
            HomeAction::StartWorkout => "Start Workout",
            HomeAction::Logout => "Logout",
        }
    }

    fn trigger(&self) -> Trigger {
        match self {
            HomeAction::StartWorkout => Trigger::StartWorkout,
            HomeAction::Logout => Trigger::Logout,
        }
    }
}

/// State of the recent activity panel
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActivityFeed {
    #[default]
    Loading,
    Ready(Vec<ActivityRecord>),
    Unavailable,
}

/// Home screen component
#[derive(Debug, Clone)]
pub struct HomeScreen {
    user: Option<String>,
    feed: ActivityFeed,
    selected_index: usize,
    list_state: ListState,
    error: Option<String>,
}

impl HomeScreen {
    /// Create a new home screen
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            user: None,
            feed: ActivityFeed::Loading,
            selected_index: 0,
            list_state,
            error: None,
        }
    }

    pub fn set_user(&mut self, user: Option<&str>) {
        self.user = user.map(str::to_string);
    }

    pub fn set_feed(&mut self, feed: ActivityFeed) {
        self.feed = feed;
    }

    pub fn feed(&self) -> &ActivityFeed {
        &self.feed
    }

    pub fn selected_action(&self) -> HomeAction {
        HomeAction::all()[self.selected_index]
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        let count = HomeAction::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
        self.list_state.select(Some(self.selected_index));
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % HomeAction::all().len();
        self.list_state.select(Some(self.selected_index));
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<Trigger> {
        match action {
            NavigationAction::Up | NavigationAction::Previous => self.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.select_next(),
            NavigationAction::Select => return Some(self.selected_action().trigger()),
            _ => {}
        }
        None
    }

    /// Back to the first action with no user and a loading feed
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Render the home screen
    pub fn render(&mut self, f: &mut Frame) {
        let (header, body, status, help) = screen_layout(f.size());

        render_header(f, header, "Your daily performance hub");

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Greeting
                Constraint::Length(HomeAction::all().len() as u16 + 2),
                Constraint::Min(3), // Recent activity
            ])
            .split(body);

        let greeting = match &self.user {
            Some(user) => format!("Welcome back, {}!", user),
            None => "Welcome to Stathlete!".to_string(),
        };
        f.render_widget(
            Paragraph::new(greeting).style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[0],
        );

        self.render_actions(f, chunks[1]);
        self.render_feed(f, chunks[2]);
        render_status(f, status, self.error.as_deref());
        render_help(f, help, &[("↑↓", "Navigate"), ("Enter", "Select"), ("Ctrl+C", "Quit")]);
    }

    fn render_actions(&mut self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = HomeAction::all()
            .iter()
            .map(|action| ListItem::new(action.label()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Quick Actions"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_feed(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = match &self.feed {
            ActivityFeed::Loading => vec![Line::from("Loading...")],
            ActivityFeed::Ready(records) if records.is_empty() => {
                vec![Line::from("No recent activity")]
            }
            ActivityFeed::Ready(records) => records
                .iter()
                .map(|record| Line::from(record.summary()))
                .collect(),
            ActivityFeed::Unavailable => vec![Line::from("Activity unavailable")],
        };

        let feed = Paragraph::new(lines)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Recent Activity"));
        f.render_widget(feed, area);
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_screen_creation() {
        let screen = HomeScreen::new();
        assert_eq!(screen.selected_action(), HomeAction::StartWorkout);
        assert_eq!(screen.feed(), &ActivityFeed::Loading);
    }

    #[test]
    fn test_action_navigation_wraps() {
        let mut screen = HomeScreen::new();
        screen.select_next();
        assert_eq!(screen.selected_action(), HomeAction::Logout);
        screen.select_next();
        assert_eq!(screen.selected_action(), HomeAction::StartWorkout);
        screen.select_previous();
        assert_eq!(screen.selected_action(), HomeAction::Logout);
    }

    #[test]
    fn test_select_produces_triggers() {
        let mut screen = HomeScreen::new();
        assert_eq!(screen.handle(NavigationAction::Select), Some(Trigger::StartWorkout));
        screen.handle(NavigationAction::Down);
        assert_eq!(screen.handle(NavigationAction::Select), Some(Trigger::Logout));
        assert_eq!(screen.handle(NavigationAction::Input('x')), None);
    }
}
