//! Login feature: the logged-out view.
//!
//! A username field with a submit action. Submission performs no
//! validation; any string, including the empty one, logs in.

mod render;
mod state;
mod update;

pub use render::render_login_view;
pub use state::LoginFormState;
pub use update::{LoginAction, handle_key};
