pub mod config;
pub mod logging;
pub mod timing;

pub use config::{AwsEnvCredentials, Config, MissingEnvVar};
pub use timing::StageTimer;
