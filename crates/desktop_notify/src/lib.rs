//! Client for the [Desktop Notifications] protocol.
//!
//! [Desktop Notifications]: https://specifications.freedesktop.org/notification-spec/latest/

pub mod dbus;

mod error;
pub use error::*;

mod notification;
pub use notification::*;

mod notifier;
pub use notifier::*;

mod timeout;
pub use timeout::*;

mod urgency;
pub use urgency::*;

#[cfg(test)]
mod test_transport;
