pub mod extract;
pub mod store;

pub use extract::extract_bindings;
pub use store::{VariableMap, VariableStore};
