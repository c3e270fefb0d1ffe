//! Screen controller
//!
//! Owns the state machine, the credential store and one component per
//! screen. Key events go to the active screen; the trigger it emits is
//! dispatched into the [`StateManager`], and the outcome is reflected back
//! onto the screens. Nothing here touches the terminal, so the whole flow
//! runs headless in tests.

use crate::activity::ActivityProvider;
use crate::app::screens::{
    ActivityFeed, HomeScreen, LoginScreen, ProfileScreen, QuestionnaireScreen, SignupScreen,
    WorkoutScreen,
};
use crate::app::state::{NavigationAction, Screen, StateManager};
use crate::error::user_friendly_message;
use crate::store::CredentialStore;
use crate::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

pub struct Controller {
    state_manager: StateManager,
    store: CredentialStore,
    activity: Arc<dyn ActivityProvider>,
    login_screen: LoginScreen,
    signup_screen: SignupScreen,
    profile_screen: ProfileScreen,
    home_screen: HomeScreen,
    workout_screen: WorkoutScreen,
    questionnaire_screen: QuestionnaireScreen,
}

impl Controller {
    pub fn new(store: CredentialStore, activity: Arc<dyn ActivityProvider>) -> Self {
        Self {
            state_manager: StateManager::new(),
            store,
            activity,
            login_screen: LoginScreen::new(),
            signup_screen: SignupScreen::new(),
            profile_screen: ProfileScreen::new(),
            home_screen: HomeScreen::new(),
            workout_screen: WorkoutScreen::new(),
            questionnaire_screen: QuestionnaireScreen::new(),
        }
    }

    pub fn state(&self) -> &StateManager {
        &self.state_manager
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn current_screen(&self) -> Screen {
        self.state_manager.current_screen()
    }

    pub fn should_quit(&self) -> bool {
        self.state_manager.should_quit()
    }

    pub fn login_screen(&self) -> &LoginScreen {
        &self.login_screen
    }

    pub fn signup_screen(&self) -> &SignupScreen {
        &self.signup_screen
    }

    pub fn home_screen(&self) -> &HomeScreen {
        &self.home_screen
    }

    pub fn workout_screen(&self) -> &WorkoutScreen {
        &self.workout_screen
    }

    /// Fire due workout ticks
    pub fn tick(&mut self, now: Instant) -> u64 {
        self.state_manager.poll_timer(now)
    }

    /// Handle a raw key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Option<Result<Screen>> {
        self.handle_action(StateManager::key_to_navigation(key)).await
    }

    /// Route an action to the active screen and dispatch any trigger
    ///
    /// Returns the dispatch outcome when the screen emitted a trigger. Errors
    /// are also shown on the screen that caused them.
    pub async fn handle_action(&mut self, action: NavigationAction) -> Option<Result<Screen>> {
        if action == NavigationAction::Quit {
            self.state_manager.quit();
            return None;
        }

        let from = self.state_manager.current_screen();
        let running = self
            .state_manager
            .session()
            .workout()
            .timer()
            .is_running();

        let trigger = match from {
            Screen::Login => self.login_screen.handle(action),
            Screen::Signup => self.signup_screen.handle(action),
            Screen::Profile => self.profile_screen.handle(action),
            Screen::Home => self.home_screen.handle(action),
            Screen::WorkoutSelection => self.workout_screen.handle(action, running),
            Screen::WorkoutQuestionnaire => self.questionnaire_screen.handle(action),
        }?;

        let outcome = self.state_manager.handle(trigger, &self.store);
        match &outcome {
            Ok(to) if *to != from => {
                self.leave(from);
                self.enter(*to).await;
            }
            Ok(_) => {
                if from == Screen::WorkoutSelection {
                    self.workout_screen.clear_error();
                }
            }
            Err(e) => self.report(from, user_friendly_message(e)),
        }
        Some(outcome)
    }

    fn report(&mut self, screen: Screen, message: String) {
        match screen {
            Screen::Login => self.login_screen.set_error(message),
            Screen::Signup => self.signup_screen.set_error(message),
            Screen::Home => self.home_screen.set_error(message),
            Screen::WorkoutSelection => self.workout_screen.set_error(message),
            // Profile and questionnaire submissions cannot fail.
            Screen::Profile | Screen::WorkoutQuestionnaire => {}
        }
    }

    /// Drop whatever the screen being left still holds
    fn leave(&mut self, screen: Screen) {
        match screen {
            Screen::Login => self.login_screen.reset(),
            Screen::Signup => self.signup_screen.reset(),
            Screen::Profile => self.profile_screen.reset(),
            Screen::Home => self.home_screen.reset(),
            Screen::WorkoutSelection => self.workout_screen.reset(),
            Screen::WorkoutQuestionnaire => self.questionnaire_screen.reset(),
        }
    }

    async fn enter(&mut self, screen: Screen) {
        if screen == Screen::Home {
            self.refresh_home().await;
        }
    }

    async fn refresh_home(&mut self) {
        self.home_screen.set_user(self.state_manager.session().user());
        self.home_screen.set_feed(ActivityFeed::Loading);

        let feed = match self.activity.fetch_recent_activity().await {
            Ok(records) => ActivityFeed::Ready(records),
            Err(e) => {
                warn!(error = %e, "Failed to fetch recent activity");
                ActivityFeed::Unavailable
            }
        };
        self.home_screen.set_feed(feed);
    }

    /// Render the active screen
    pub fn draw(&mut self, f: &mut Frame) {
        match self.state_manager.current_screen() {
            Screen::Login => self.login_screen.render(f),
            Screen::Signup => self.signup_screen.render(f),
            Screen::Profile => self.profile_screen.render(f),
            Screen::Home => self.home_screen.render(f),
            Screen::WorkoutSelection => self
                .workout_screen
                .render(f, self.state_manager.session().workout()),
            Screen::WorkoutQuestionnaire => self.questionnaire_screen.render(
                f,
                self.state_manager.session().workout().timer().elapsed_seconds(),
            ),
        }
    }
}
