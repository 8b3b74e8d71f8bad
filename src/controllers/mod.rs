//! Demonstration controllers wired into the binary.

pub mod user;

pub use user::User;
