pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod services;
pub mod session;
pub mod version;

pub use api::ApiClient;
pub use config::Config;
pub use error::{AppError, ClientError, Result};
pub use session::SessionStore;
