/// Minimum password length enforced client-side; the server applies the
/// same rule at accept time.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Transient password + confirmation pair. Lives only in the flow's
/// memory for the lifetime of the invite page; never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialInput {
    pub password: String,
    pub confirm: String,
}

impl CredentialInput {
    pub fn length_ok(&self) -> bool {
        self.password.len() >= MIN_PASSWORD_LEN
    }

    pub fn match_ok(&self) -> bool {
        self.password == self.confirm
    }

    /// Display-only: flag a mismatch once the user has typed into the
    /// confirmation field. An empty confirmation is not flagged, to
    /// avoid error noise before the user gets there.
    pub fn show_mismatch(&self) -> bool {
        !self.confirm.is_empty() && !self.match_ok()
    }

    /// Gate for the submit action. Empty fields are never submittable,
    /// and nothing is submittable while a submission is pending.
    pub fn submittable(&self, is_submitting: bool) -> bool {
        !is_submitting
            && !self.password.is_empty()
            && !self.confirm.is_empty()
            && self.length_ok()
            && self.match_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(password: &str, confirm: &str) -> CredentialInput {
        CredentialInput {
            password: password.to_string(),
            confirm: confirm.to_string(),
        }
    }

    #[test]
    fn submittable_requires_length_and_match() {
        assert!(input("longpass1", "longpass1").submittable(false));
        assert!(!input("longpass1", "longpass2").submittable(false));
        assert!(!input("short", "short").submittable(false));
    }

    #[test]
    fn short_password_never_submittable() {
        // len 5 - fails regardless of what the confirmation holds
        assert!(!input("short", "short").submittable(false));
        assert!(!input("short", "").submittable(false));
        assert!(!input("short", "different").submittable(false));
    }

    #[test]
    fn empty_fields_not_submittable() {
        assert!(!input("", "").submittable(false));
        assert!(!input("longpass1", "").submittable(false));
        assert!(!input("", "longpass1").submittable(false));
    }

    #[test]
    fn pending_submission_blocks_resubmit() {
        assert!(!input("longpass1", "longpass1").submittable(true));
    }

    #[test]
    fn exactly_eight_chars_is_enough() {
        assert!(input("12345678", "12345678").submittable(false));
        assert!(!input("1234567", "1234567").submittable(false));
    }

    #[test]
    fn mismatch_hint_waits_for_confirmation_input() {
        // Nothing typed in confirm yet - no hint even though they differ
        assert!(!input("longpass1", "").show_mismatch());
        assert!(input("longpass1", "longpa").show_mismatch());
        assert!(!input("longpass1", "longpass1").show_mismatch());
    }
}
