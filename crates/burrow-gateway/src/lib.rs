//! HTTP gateway for the Burrow shortener.
//!
//! Exposes `POST /api/shorten`, `GET /api/{shortcode}` and `GET /health`
//! on top of any [`Shortener`](burrow_shortener::Shortener).

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
