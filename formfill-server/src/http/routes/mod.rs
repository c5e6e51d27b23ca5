//! Route handlers organized by resource

pub mod assets;
pub mod download;
pub mod health;
pub mod page;
pub mod submit;
