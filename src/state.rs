use std::time::Duration;

/// Fixed response settings for the mock. Every matched request is answered
/// with the same status and accrual after the same delay.
#[derive(Clone)]
pub struct AppState {
    pub delay: Duration,
    pub accrual: i64,
    pub status: &'static str,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1000),
            accrual: 1000,
            status: "PROCESSED",
        }
    }
}
