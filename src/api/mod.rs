pub mod audit;
pub mod auth;
pub mod checks;
pub mod client;
pub mod invites;
pub mod members;

pub use client::*;
