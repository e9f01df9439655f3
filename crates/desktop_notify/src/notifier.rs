use crate::{dbus::*, *};

use once_cell::sync::Lazy;
use zbus::zvariant::OwnedValue;

static SESSION: Lazy<Notifier<SessionBus>> = Lazy::new(|| Notifier::new(SessionBus));

/// Send a raw `Notify` call over the process-wide session bus connection.
pub async fn notify(call: &NotifyCall) -> Result<u32> {
    Notifier::session().notify(call).await
}

/// Issues `Notify` calls over a lazily established, shared connection.
///
/// The connection is created by the first call that needs it and reused afterwards. If a call
/// fails, the cached connection is dropped and the next call connects again. Calls themselves
/// are not serialized; the lock only guards establishing the connection.
pub struct Notifier<T: Transport> {
    transport: T,
    // tokio's mutex, since we hold it across `connect().await`
    connection: tokio::sync::Mutex<Slot<T::Connection>>,
}

/// The cached connection, tagged with a generation that changes on every connect.
struct Slot<C> {
    generation: u64,
    con: Option<C>,
}

impl Notifier<SessionBus> {
    /// The process-wide notifier talking to the session bus.
    pub fn session() -> &'static Notifier<SessionBus> {
        &SESSION
    }
}

impl<T: Transport> Notifier<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, connection: tokio::sync::Mutex::new(Slot { generation: 0, con: None }) }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Forget the cached connection, if any.
    pub async fn reset(&self) {
        self.connection.lock().await.con.take();
    }

    async fn connection(&self) -> Result<(u64, T::Connection)> {
        let mut slot = self.connection.lock().await;
        if let Some(con) = slot.con.as_ref() {
            return Ok((slot.generation, con.clone()));
        }

        log::debug!("connecting to notification daemon at {}", SERVICE);
        let con = self.transport.connect().await.map_err(Error::Connection)?;
        slot.generation += 1;
        slot.con = Some(con.clone());
        Ok((slot.generation, con))
    }

    /// Drop the cached connection, unless someone already replaced it since `generation`.
    async fn drop_connection(&self, generation: u64) {
        let mut slot = self.connection.lock().await;
        if slot.generation == generation {
            slot.con = None;
        }
    }

    /// Perform exactly one `Notify` call and return the id the daemon assigned.
    ///
    /// Nothing is retried. Transport and method errors come back as [`Error::Call`], a reply that
    /// isn't a single `u32` as [`Error::MalformedResponse`].
    pub async fn notify(&self, call: &NotifyCall) -> Result<u32> {
        let (generation, con) = self.connection().await?;

        log::debug!("calling {}.{} (replaces_id: {}, summary: {:?})", INTERFACE, NOTIFY, call.replaces_id, call.summary);
        let reply = match self.transport.call(&con, call).await {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("{} call failed, dropping connection: {}", NOTIFY, e);
                self.drop_connection(generation).await;
                return Err(Error::Call(e));
            }
        };

        decode_id(reply)
    }
}

fn decode_id(reply: Vec<OwnedValue>) -> Result<u32> {
    let [value] = <[OwnedValue; 1]>::try_from(reply)
        .map_err(|reply| Error::MalformedResponse(format!("expected a single value, got {}", reply.len())))?;

    let signature = value.value_signature().as_str().to_owned();
    u32::try_from(value).map_err(|_| Error::MalformedResponse(format!("expected an id of type u, got {}", signature)))
}
