use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not connect to the session bus")]
    Connection(#[source] zbus::Error),
    #[error("Call to the notification daemon failed")]
    Call(#[source] zbus::Error),
    #[error("Unrecognized response from notification daemon: {0}")]
    MalformedResponse(String),
    #[error("Urgency {0} is not valid")]
    InvalidUrgency(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
