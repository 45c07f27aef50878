pub mod routes;
mod server;
pub use server::{app, serve};
pub mod public;
mod state;
pub use state::{AppState, calendar_client};
