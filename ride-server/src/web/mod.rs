//! Web layer: HTTP routes, state, and DTOs.

mod dto;
mod routes;
mod state;

pub use routes::{AppError, create_router};
pub use state::AppState;
