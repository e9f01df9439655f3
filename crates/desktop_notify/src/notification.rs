use crate::{dbus::*, *};

use std::collections::HashMap;

use zbus::zvariant::OwnedValue;

/// One notification's content, plus the id the daemon gave it the last time it was sent.
///
/// A single record can be used as a template for many messages:
///
/// ```no_run
/// # use std::time::Duration;
/// # use desktop_notify::*;
/// # async fn run() -> Result<()> {
/// let notifier = Notifier::session();
/// let mut critical = Notification::new("prog", "", "", "critical-icon.png", Duration::ZERO, Urgency::Critical);
/// let mut boring = Notification::new("prog", "", "", "low-icon.png", Duration::from_secs(1), Urgency::Low);
/// boring.send_msg(notifier, "Nothing is happening... boring!", "").await?;
/// critical.send_msg(notifier, "Your computer is on fire!", "Here is what you should do:\n ...").await?;
/// # Ok(())
/// # }
/// ```
///
/// Every operation issues exactly one `Notify` call. On success the returned id is stored in the
/// record, so [`Notification::update`] can replace whatever was shown last. A failed call leaves
/// the id alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    /// Name of the sending application. May be empty.
    pub name: String,
    pub summary: String,
    /// Extra details. Some daemons ignore the body.
    pub body: String,
    /// Path to an icon. Some daemons ignore this too.
    pub icon_path: String,
    /// Requested display time. Defaults to whatever the daemon picks.
    pub timeout: Timeout,
    pub urgency: Urgency,
    /// Additional hints, sent as-is. An `urgency` entry in here is overwritten by `urgency`.
    pub hints: HashMap<String, OwnedValue>,
    id: u32,
}

impl Notification {
    pub fn new(
        name: impl Into<String>,
        summary: impl Into<String>,
        body: impl Into<String>,
        icon_path: impl Into<String>,
        timeout: impl Into<Timeout>,
        urgency: Urgency,
    ) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            body: body.into(),
            icon_path: icon_path.into(),
            timeout: timeout.into(),
            urgency,
            hints: HashMap::new(),
            id: 0,
        }
    }

    /// Id assigned by the daemon on the last successful call, or 0 if never sent.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Send the notification as it is. Always creates a new notification.
    pub async fn send<T: Transport>(&mut self, notifier: &Notifier<T>) -> Result<u32> {
        let call = self.to_call(0, &self.summary, &self.body, self.urgency);
        self.dispatch(notifier, call).await
    }

    /// Send a new notification with the given summary and body, everything else taken from `self`.
    pub async fn send_msg<T: Transport>(&mut self, notifier: &Notifier<T>, summary: &str, body: &str) -> Result<u32> {
        let call = self.to_call(0, summary, body, self.urgency);
        self.dispatch(notifier, call).await
    }

    pub async fn send_urgent_msg<T: Transport>(
        &mut self,
        notifier: &Notifier<T>,
        summary: &str,
        body: &str,
        urgency: Urgency,
    ) -> Result<u32> {
        let call = self.to_call(0, summary, body, urgency);
        self.dispatch(notifier, call).await
    }

    /// Replace the notification with the given id by this one as it is.
    ///
    /// Returns the id the daemon now uses, which is not necessarily `id`.
    pub async fn replace<T: Transport>(&mut self, notifier: &Notifier<T>, id: u32) -> Result<u32> {
        let call = self.to_call(id, &self.summary, &self.body, self.urgency);
        self.dispatch(notifier, call).await
    }

    pub async fn replace_msg<T: Transport>(
        &mut self,
        notifier: &Notifier<T>,
        id: u32,
        summary: &str,
        body: &str,
    ) -> Result<u32> {
        let call = self.to_call(id, summary, body, self.urgency);
        self.dispatch(notifier, call).await
    }

    pub async fn replace_urgent_msg<T: Transport>(
        &mut self,
        notifier: &Notifier<T>,
        id: u32,
        summary: &str,
        body: &str,
        urgency: Urgency,
    ) -> Result<u32> {
        let call = self.to_call(id, summary, body, urgency);
        self.dispatch(notifier, call).await
    }

    /// Replace whatever this record showed last. Creates a new notification if it was never sent.
    pub async fn update<T: Transport>(&mut self, notifier: &Notifier<T>) -> Result<u32> {
        self.replace(notifier, self.id).await
    }

    fn to_call(&self, replaces_id: u32, summary: &str, body: &str, urgency: Urgency) -> NotifyCall {
        let mut hints = self.hints.clone();
        hints.extend(urgency.as_hint());
        NotifyCall {
            app_name: self.name.clone(),
            replaces_id,
            app_icon: self.icon_path.clone(),
            summary: summary.to_owned(),
            body: body.to_owned(),
            actions: Vec::new(),
            hints,
            expire_timeout: self.timeout.as_ms(),
        }
    }

    async fn dispatch<T: Transport>(&mut self, notifier: &Notifier<T>, call: NotifyCall) -> Result<u32> {
        let id = notifier.notify(&call).await?;
        self.id = id;
        Ok(id)
    }
}
