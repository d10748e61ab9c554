/// Sample settings loading from config.toml
pub mod settings;

pub use settings::{Config, NotificationConfig, RegistrationConfig};
