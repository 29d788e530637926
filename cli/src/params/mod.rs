pub mod build;
pub mod flags;
pub mod resolve;

pub use build::{build_request, RequestPlan};
pub use flags::{parse_flags, FlagMap};
pub use resolve::Resolver;
