//! # Backend data models mirrored into the client

pub mod user;

pub use user::{AvatarChoice, User};
