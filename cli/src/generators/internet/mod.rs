pub mod email;
pub mod password;
pub mod url;
pub mod username;
