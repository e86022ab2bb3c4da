//! Invite-token redemption: resolving an opaque invite token to its
//! snapshot, validating the chosen credentials, and driving the
//! one-shot join action against the server.
//!
//! The state machine in [`flow`] is pure and owns all mutation paths;
//! the page component in `components::invite` is a thin view over it.

pub mod authority;
pub mod credentials;
pub mod flow;

pub use authority::{ApiAuthority, Authority};
pub use credentials::{CredentialInput, MIN_PASSWORD_LEN};
pub use flow::{run_submit, RedemptionFlow, RedemptionState, SubmitOutcome};
