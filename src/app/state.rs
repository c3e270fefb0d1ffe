//! Application state management
//!
//! The navigation state machine: which screen is active, the session it
//! carries, and the legal transitions between screens. Screens never change
//! the current screen themselves; they emit a [`Trigger`] which the
//! [`StateManager`] accepts or rejects.

use crate::store::CredentialStore;
use crate::workout::{WorkoutSession, WorkoutType};
use crate::{Result, StathleteError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Application screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Identifier and secret entry, initial screen
    #[default]
    Login,
    /// Account creation
    Signup,
    /// Profile intake after signup
    Profile,
    /// Dashboard with recent activity
    Home,
    /// Workout type choice and running timer
    WorkoutSelection,
    /// Post-workout feedback
    WorkoutQuestionnaire,
}

impl Screen {
    /// Get a human-readable name of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Signup => "Sign Up",
            Screen::Profile => "Profile",
            Screen::Home => "Home",
            Screen::WorkoutSelection => "Workout",
            Screen::WorkoutQuestionnaire => "Workout Questionnaire",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Profile intake fields; accepted as typed and discarded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub primary_sport: String,
}

/// Post-workout feedback fields; accepted as typed and discarded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionnaireForm {
    pub intensity: String,
    pub feeling: String,
    pub notes: String,
}

/// Messages from the screens into the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    SubmitLogin { identifier: String, secret: String },
    GoToSignup,
    SubmitSignup { identifier: String, secret: String },
    GoToLogin,
    SubmitProfile(ProfileForm),
    StartWorkout,
    Logout,
    SelectWorkout(WorkoutType),
    Start,
    Stop,
    SubmitQuestionnaire(QuestionnaireForm),
}

impl Trigger {
    /// Stable name used in logs and errors; never includes field values
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::SubmitLogin { .. } => "log in",
            Trigger::GoToSignup => "go to signup",
            Trigger::SubmitSignup { .. } => "sign up",
            Trigger::GoToLogin => "go to login",
            Trigger::SubmitProfile(_) => "submit profile",
            Trigger::StartWorkout => "start workout",
            Trigger::Logout => "logout",
            Trigger::SelectWorkout(_) => "select workout",
            Trigger::Start => "start",
            Trigger::Stop => "stop",
            Trigger::SubmitQuestionnaire(_) => "submit questionnaire",
        }
    }
}

/// Process-lifetime session data
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<String>,
    workout: WorkoutSession,
}

impl Session {
    /// Identifier of the logged-in account
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn workout(&self) -> &WorkoutSession {
        &self.workout
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move focus up (arrow up)
    Up,
    /// Move focus down (arrow down)
    Down,
    /// Next field (Tab)
    Next,
    /// Previous field (Shift+Tab)
    Previous,
    /// Confirm (Enter)
    Select,
    /// Cancel (Esc)
    Back,
    /// Typed character
    Input(char),
    /// Delete the last character (Backspace)
    Delete,
    /// Quit application (Ctrl+C, Ctrl+Q)
    Quit,
    /// No action
    None,
}

/// Navigation state machine
#[derive(Debug, Default)]
pub struct StateManager {
    current: Screen,
    previous: Option<Screen>,
    session: Session,
    should_quit: bool,
}

impl StateManager {
    /// Create a new state manager starting at the login screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current screen
    pub fn current_screen(&self) -> Screen {
        self.current
    }

    /// Get the screen before the last transition, if any
    pub fn previous_screen(&self) -> Option<Screen> {
        self.previous
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Elapsed time label of the current workout
    pub fn timer_label(&self) -> String {
        self.session.workout.timer().label()
    }

    /// Fire every due workout tick; returns how many fired
    pub fn poll_timer(&mut self, now: Instant) -> u64 {
        self.session.workout.timer_mut().poll(now)
    }

    /// Dispatch a trigger, returning the screen that is current afterwards
    pub fn handle(&mut self, trigger: Trigger, store: &CredentialStore) -> Result<Screen> {
        self.handle_at(trigger, store, Instant::now())
    }

    /// Dispatch a trigger with an explicit clock reading for the timer
    ///
    /// On error the screen and session are left exactly as they were.
    pub fn handle_at(
        &mut self,
        trigger: Trigger,
        store: &CredentialStore,
        now: Instant,
    ) -> Result<Screen> {
        let name = trigger.name();
        let from = self.current;
        let result = self.apply(trigger, store, now);

        match &result {
            Ok(to) => info!(trigger = name, from = %from, to = %to, "Navigation"),
            Err(e) => warn!(trigger = name, screen = %from, error = %e, "Trigger rejected"),
        }
        result
    }

    fn apply(&mut self, trigger: Trigger, store: &CredentialStore, now: Instant) -> Result<Screen> {
        let running = self.session.workout.timer().is_running();

        match (self.current, trigger) {
            (Screen::Login, Trigger::SubmitLogin { identifier, secret }) => {
                if !store.authenticate(&identifier, &secret)? {
                    return Err(StathleteError::AuthenticationFailed);
                }
                self.session.user = Some(identifier);
                self.transition_to(Screen::Home);
            }
            (Screen::Login, Trigger::GoToSignup) => self.transition_to(Screen::Signup),

            (Screen::Signup, Trigger::SubmitSignup { identifier, secret }) => {
                store.register(&identifier, &secret)?;
                self.session.user = Some(identifier);
                self.transition_to(Screen::Profile);
            }
            (Screen::Signup, Trigger::GoToLogin) => self.transition_to(Screen::Login),

            (Screen::Profile, Trigger::SubmitProfile(_)) => {
                debug!("Profile fields discarded");
                self.transition_to(Screen::Home);
            }

            (Screen::Home, Trigger::StartWorkout) => {
                self.session.workout = WorkoutSession::new();
                self.transition_to(Screen::WorkoutSelection);
            }
            (Screen::Home, Trigger::Logout) => {
                self.session = Session::default();
                self.transition_to(Screen::Login);
            }

            (Screen::WorkoutSelection, Trigger::SelectWorkout(workout)) if !running => {
                self.session.workout.select(workout);
            }
            (Screen::WorkoutSelection, Trigger::Start) if !running => {
                let Some(workout) = self.session.workout.selected() else {
                    return Err(StathleteError::InvalidSelection);
                };
                self.session.workout.timer_mut().start(now);
                info!(workout = %workout, "Workout started");
            }
            (Screen::WorkoutSelection, Trigger::Stop) if running => {
                self.session.workout.timer_mut().stop();
                self.transition_to(Screen::WorkoutQuestionnaire);
            }

            (Screen::WorkoutQuestionnaire, Trigger::SubmitQuestionnaire(_)) => {
                debug!("Questionnaire fields discarded");
                self.transition_to(Screen::Home);
            }

            (screen, trigger) => {
                return Err(StathleteError::InvalidTransition {
                    screen,
                    trigger: trigger.name(),
                });
            }
        }

        Ok(self.current)
    }

    fn transition_to(&mut self, new_screen: Screen) {
        if new_screen != self.current {
            self.previous = Some(self.current);
            self.current = new_screen;
        }
    }

    /// Convert keyboard event to navigation action
    ///
    /// Control+Alt is how AltGr arrives on Windows, so those characters are
    /// text rather than shortcuts.
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        let shortcut = key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            // Quit keys
            KeyCode::Char('c') | KeyCode::Char('q') if shortcut => NavigationAction::Quit,

            // Focus movement
            KeyCode::Up => NavigationAction::Up,
            KeyCode::Down => NavigationAction::Down,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }
            KeyCode::BackTab => NavigationAction::Previous,

            // Confirmation and cancel
            KeyCode::Enter => NavigationAction::Select,
            KeyCode::Esc => NavigationAction::Back,

            // Text entry
            KeyCode::Backspace => NavigationAction::Delete,
            KeyCode::Char(c) if !shortcut => NavigationAction::Input(c),

            _ => NavigationAction::None,
        }
    }
}
