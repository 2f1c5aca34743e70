//! Quiz and maze HTTP server.
//!
//! Serves the quiz page, the quiz questions and freshly generated mazes.

mod handlers;
mod server;
mod state;

pub use server::{router, run};
pub use state::{AppState, SharedState};
