use crate::*;

use std::collections::HashMap;

use zbus::zvariant::{OwnedValue, Value};

/// Key of the urgency entry in the `Notify` hint table.
pub const URGENCY_HINT: &str = "urgency";

/// Recognised values of the [`urgency` hint].
///
/// Some daemons make no distinction between these, but enough do that it's worth setting.
///
/// [`urgency` hint]: https://specifications.freedesktop.org/notification-spec/latest/urgency-levels.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(u8)]
pub enum Urgency {
    Low = 0,
    /// Information that is interesting, but not pressing.
    #[default]
    Normal = 1,
    /// Errors or severe events. Daemons usually won't let these expire on their own.
    Critical = 2,
}

impl Urgency {
    /// The urgency as a `Notify` hint table, `{"urgency": <byte>}`.
    pub fn as_hint(self) -> HashMap<String, OwnedValue> {
        HashMap::from([(URGENCY_HINT.to_owned(), self.into())])
    }
}

impl From<Urgency> for u8 {
    fn from(urgency: Urgency) -> u8 {
        urgency as u8
    }
}

impl TryFrom<u8> for Urgency {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        match byte {
            0 => Ok(Urgency::Low),
            1 => Ok(Urgency::Normal),
            2 => Ok(Urgency::Critical),
            _ => Err(Error::InvalidUrgency(byte)),
        }
    }
}

impl From<Urgency> for OwnedValue {
    fn from(urgency: Urgency) -> OwnedValue {
        OwnedValue::from(Value::U8(urgency.into()))
    }
}
