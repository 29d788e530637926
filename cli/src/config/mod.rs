pub mod error;
pub mod http_method;
pub mod loader;
pub mod mode;
pub mod model;
pub mod template;

pub use http_method::HttpMethod;
pub use loader::load_config;
pub use mode::Mode;
pub use model::{Config, Endpoint, ParamType, Parameter, Placement, Rules};
