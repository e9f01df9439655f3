use std::time::Duration;

/// How long the daemon should keep a notification on screen.
///
/// Daemons are free to override whatever is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timeout {
    /// Leave it to the daemon. Sent as -1.
    #[default]
    Default,
    /// Never expire. Sent as 0.
    Never,
    /// Expire after the given time. A duration that truncates to 0ms is sent as 0, so it means
    /// [`Timeout::Never`] to the daemon.
    After(Duration),
}

impl Timeout {
    /// The value of the `expire_timeout` argument.
    pub fn as_ms(self) -> i32 {
        match self {
            Timeout::Default => -1,
            Timeout::Never => 0,
            Timeout::After(timeout) => timeout_in_ms(timeout),
        }
    }
}

/// A zero duration is [`Timeout::Never`], anything else [`Timeout::After`].
impl From<Duration> for Timeout {
    fn from(timeout: Duration) -> Self {
        if timeout.is_zero() {
            Timeout::Never
        } else {
            Timeout::After(timeout)
        }
    }
}

/// Convert a timeout to the whole milliseconds `Notify` expects.
///
/// Truncates, so 1.9ms becomes 1. A zero duration stays 0, which the protocol reads as "never
/// expire". Anything past `i32::MAX` milliseconds saturates.
pub fn timeout_in_ms(timeout: Duration) -> i32 {
    i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX)
}
