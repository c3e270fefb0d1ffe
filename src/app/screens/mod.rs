//! TUI screen components
//!
//! One component per navigation screen. Screens keep their own input state
//! and turn navigation actions into triggers for the state machine.

pub mod chrome;
pub mod form;
pub mod home;
pub mod login;
pub mod profile;
pub mod questionnaire;
pub mod signup;
pub mod workout;

pub use form::{Form, TextField};
pub use home::{ActivityFeed, HomeAction, HomeScreen};
pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use questionnaire::QuestionnaireScreen;
pub use signup::SignupScreen;
pub use workout::WorkoutScreen;
