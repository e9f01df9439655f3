//! # The `org.freedesktop.Notifications` wire contract
//!
//! Only the `Notify` method is used. The argument order and types follow the
//! [protocol description](https://specifications.freedesktop.org/notification-spec/latest/protocol.html).
//!
//! The bus itself is reached through a [`Transport`], so the rest of the crate never talks to
//! zbus directly. [`SessionBus`] is the real implementation.

use std::{collections::HashMap, future::Future};

use zbus::zvariant::{OwnedValue, Structure};

/// Well-known bus name of the notification daemon.
pub const SERVICE: &str = "org.freedesktop.Notifications";
/// Object path the daemon serves the interface on.
pub const PATH: &str = "/org/freedesktop/Notifications";
pub const INTERFACE: &str = "org.freedesktop.Notifications";
pub const NOTIFY: &str = "Notify";

/// The eight positional arguments of `org.freedesktop.Notifications.Notify`, in wire order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotifyCall {
    pub app_name: String,
    /// 0 asks the daemon for a new notification, anything else replaces that notification.
    pub replaces_id: u32,
    pub app_icon: String,
    pub summary: String,
    pub body: String,
    pub actions: Vec<String>,
    pub hints: HashMap<String, OwnedValue>,
    /// Milliseconds. 0 means the notification never expires, -1 leaves it to the daemon.
    pub expire_timeout: i32,
}

impl NotifyCall {
    /// The message body, signature `susssasa{sv}i`.
    #[allow(clippy::type_complexity)]
    pub fn body(&self) -> (&str, u32, &str, &str, &str, &Vec<String>, &HashMap<String, OwnedValue>, i32) {
        (
            &self.app_name,
            self.replaces_id,
            &self.app_icon,
            &self.summary,
            &self.body,
            &self.actions,
            &self.hints,
            self.expire_timeout,
        )
    }
}

/// Something that can reach a notification daemon.
///
/// `connect` is called lazily by [`Notifier`][crate::Notifier] and its result is cached and
/// cloned for every call, so `Connection` should be a cheap handle.
pub trait Transport: Send + Sync {
    type Connection: Clone + Send + Sync;

    fn connect(&self) -> impl Future<Output = zbus::Result<Self::Connection>> + Send;

    /// Issue one `Notify` call and return the values of the reply body, undecoded.
    fn call(
        &self,
        con: &Self::Connection,
        call: &NotifyCall,
    ) -> impl Future<Output = zbus::Result<Vec<OwnedValue>>> + Send;
}

/// The per-user session bus, via zbus.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionBus;

impl Transport for SessionBus {
    type Connection = zbus::Connection;

    async fn connect(&self) -> zbus::Result<zbus::Connection> {
        zbus::Connection::session().await
    }

    async fn call(&self, con: &zbus::Connection, call: &NotifyCall) -> zbus::Result<Vec<OwnedValue>> {
        let reply = con.call_method(Some(SERVICE), PATH, Some(INTERFACE), NOTIFY, &call.body()).await?;
        reply_values(&reply)
    }
}

/// The values of a reply body, whatever its signature.
fn reply_values(reply: &zbus::Message) -> zbus::Result<Vec<OwnedValue>> {
    // an empty body carries no signature header at all
    match reply.body_signature() {
        Ok(signature) if !signature.as_str().is_empty() => {}
        _ => return Ok(Vec::new()),
    }
    // a Structure takes whatever signature the daemon sent, decoding is the caller's job
    let body: Structure<'_> = reply.body()?;
    Ok(body.into_fields().into_iter().map(OwnedValue::from).collect())
}
