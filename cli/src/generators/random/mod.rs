pub mod guid;
pub mod string;
