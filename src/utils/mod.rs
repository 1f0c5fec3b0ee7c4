pub mod auth;
pub mod logos;
pub mod password;
pub mod time;
