use crate::error;
use dashmap::DashMap;
use model::ChatId;
use std::{future::Future, sync::Arc, time::Duration};
use tokio::{
    sync::{Mutex, OwnedMutexGuard},
    time,
};

type Registry = DashMap<ChatId, Arc<Mutex<()>>>;

/// Per-chat lock table. Events of the same chat run one at a time while
/// different chats only ever share a map shard for the brief lookup.
#[derive(Debug)]
pub struct Serializer {
    locks: Registry,
    timeout: Duration,
}

/// Releases the chat's lock and prunes its table entry on every exit path,
/// including panics and dropped futures.
struct Guard<'r> {
    registry: &'r Registry,
    chat: ChatId,
    held: Option<OwnedMutexGuard<()>>,
}

impl Drop for Guard<'_> {
    fn drop(&mut self) {
        drop(self.held.take());
        // Every waiter owns a clone, so a lone reference means nobody needs the entry anymore.
        self.registry.remove_if(&self.chat, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl Serializer {
    pub fn new(timeout: Duration) -> Self {
        Self { locks: Registry::default(), timeout }
    }

    /// Runs `op` while holding the chat's exclusive lock. The lock is not
    /// reentrant: calling this again for the same chat from within `op` waits
    /// until the timeout and fails with [`Busy`](error::Error::Busy).
    pub async fn with_session_lock<F, Fut, T>(&self, chat: ChatId, op: F) -> error::Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let lock = self.locks.entry(chat).or_default().clone();
        let mut guard = Guard { registry: &self.locks, chat, held: None };

        let acquired = time::timeout(self.timeout, lock.lock_owned()).await;
        let Ok(held) = acquired else {
            log::warn!("Timed out after {:?} waiting for the lock of chat {chat}.", self.timeout);
            return Err(error::Error::Busy);
        };

        guard.held = Some(held);
        Ok(op().await)
    }

    /// Number of chats with an event in flight or waiting.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
