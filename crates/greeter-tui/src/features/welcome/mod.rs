//! Welcome feature: the logged-in view.
//!
//! Shows the greeting for the current user and a single logout
//! control. The feature has no state of its own; the username comes
//! from the session.

mod render;
mod update;

pub use render::render_welcome_view;
pub use update::handle_key;
