//! Transient toast notifications.

use std::time::Duration;

/// How long a toast stays on screen without an explicit dismissal.
pub const TOAST_AUTOHIDE: Duration = Duration::from_millis(5000);

/// A toast that is currently on screen.
///
/// Visibility is encoded by ownership: the page holds `Option<Toast>`, and
/// both dismissal paths (timer expiry, explicit dismiss) drop the value, so
/// they cannot race or double-fire. Age is plain data advanced by the event
/// loop; nothing is scheduled, so dropping the toast cancels the auto-hide
/// structurally and tests can drive it with synthetic durations.
#[derive(Debug, Clone)]
pub struct Toast {
    header: &'static str,
    body: &'static str,
    age: Duration,
}

impl Toast {
    /// Shown when the submission form reports success.
    #[must_use]
    pub fn submission_success() -> Self {
        Self {
            header: "eosc-perf",
            body: "Submission successful.",
            age: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.age = self.age.saturating_add(delta);
    }

    /// True once the auto-hide delay has fully elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= TOAST_AUTOHIDE
    }

    /// Remaining lifetime as a 1.0 (fresh) to 0.0 (expired) fraction, for
    /// rendering the countdown.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        let left = TOAST_AUTOHIDE.saturating_sub(self.age);
        left.as_secs_f32() / TOAST_AUTOHIDE.as_secs_f32()
    }

    #[must_use]
    pub const fn header(&self) -> &'static str {
        self.header
    }

    #[must_use]
    pub const fn body(&self) -> &'static str {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_toast_text() {
        let toast = Toast::submission_success();
        assert_eq!(toast.header(), "eosc-perf");
        assert_eq!(toast.body(), "Submission successful.");
    }

    #[test]
    fn not_expired_before_autohide_delay() {
        let mut toast = Toast::submission_success();
        toast.advance(TOAST_AUTOHIDE - Duration::from_millis(1));
        assert!(!toast.is_expired());
    }

    #[test]
    fn expired_at_autohide_delay() {
        let mut toast = Toast::submission_success();
        toast.advance(TOAST_AUTOHIDE);
        assert!(toast.is_expired());
    }

    #[test]
    fn expiry_survives_split_advances() {
        let mut toast = Toast::submission_success();
        toast.advance(Duration::from_millis(3000));
        assert!(!toast.is_expired());
        toast.advance(Duration::from_millis(2000));
        assert!(toast.is_expired());
    }

    #[test]
    fn remaining_runs_from_one_to_zero() {
        let mut toast = Toast::submission_success();
        assert!((toast.remaining() - 1.0).abs() < f32::EPSILON);

        toast.advance(Duration::from_millis(2500));
        let halfway = toast.remaining();
        assert!(halfway > 0.0 && halfway < 1.0);

        // Ages past the delay without overflowing, and the fraction bottoms
        // out at zero instead of going negative.
        toast.advance(TOAST_AUTOHIDE);
        assert!(toast.remaining() <= f32::EPSILON);
    }
}
