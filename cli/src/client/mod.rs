pub mod http;
pub mod koi_client;
pub mod koi_client_models;
pub mod loader;

pub use koi_client::KoiClient;
pub use koi_client_models::{CallResult, RunOptions};
