//! Non-interactive and single-purpose commands

pub mod config;
pub mod contact;
pub mod health;
