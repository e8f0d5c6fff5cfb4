mod health;
mod url;

pub use health::health_handler;
pub use url::{create_url_handler, resolve_shorten_handler, resolve_url_handler};
