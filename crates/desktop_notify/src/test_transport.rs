//! A scriptable [`Transport`] that records every call instead of talking to a bus.

use crate::dbus::*;

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use zbus::zvariant::{OwnedValue, Value};

#[derive(Debug, Default)]
pub struct FakeTransport {
    connect_attempts: AtomicUsize,
    connects: AtomicUsize,
    failing_connects: AtomicUsize,
    replies: Mutex<VecDeque<zbus::Result<Vec<OwnedValue>>>>,
    /// Every call received, with the number of the connection it came in on.
    calls: Mutex<Vec<(usize, NotifyCall)>>,
}

impl FakeTransport {
    /// Id replied with when no reply was queued.
    pub const DEFAULT_ID: u32 = 1;

    pub fn fail_next_connects(&self, n: usize) {
        self.failing_connects.store(n, Ordering::SeqCst);
    }

    pub fn push_reply(&self, reply: zbus::Result<Vec<OwnedValue>>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Number of successful connects so far.
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Number of connects tried, including the ones made to fail.
    pub fn connect_attempts(&self) -> usize {
        self.connect_attempts.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<(usize, NotifyCall)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> NotifyCall {
        self.calls.lock().unwrap().last().map(|(_, call)| call.clone()).expect("no call was made")
    }

    /// Connection the most recent call came in on.
    pub fn last_connection(&self) -> usize {
        self.calls.lock().unwrap().last().map(|(con, _)| *con).expect("no call was made")
    }
}

impl Transport for FakeTransport {
    type Connection = usize;

    async fn connect(&self) -> zbus::Result<usize> {
        self.connect_attempts.fetch_add(1, Ordering::SeqCst);
        let failing = self.failing_connects.load(Ordering::SeqCst);
        if failing > 0 {
            self.failing_connects.store(failing - 1, Ordering::SeqCst);
            return Err(zbus::Error::Address("no session bus".to_string()));
        }
        Ok(self.connects.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn call(&self, con: &usize, call: &NotifyCall) -> zbus::Result<Vec<OwnedValue>> {
        self.calls.lock().unwrap().push((*con, call.clone()));
        let reply = self.replies.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Ok(vec![Value::U32(Self::DEFAULT_ID).into()]))
    }
}
