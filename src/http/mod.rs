// HTTP server module

pub mod routes;

pub use routes::{router, today_key, AppState, QUOTE_TTL};
