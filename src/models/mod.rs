pub mod audit;
pub mod auth;
pub mod check;
pub mod invite;
pub mod member;

pub use audit::*;
pub use auth::*;
pub use check::*;
pub use invite::*;
pub use member::*;
