//! Web server module
//!
//! Provides the form page, search submission, and CSV download routes.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
