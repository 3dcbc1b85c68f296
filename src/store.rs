//! Per-chat message buffer
//!
//! Keeps the most recent messages of every chat in memory, bounded to a fixed
//! capacity. Overflow silently drops the oldest records.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::models::MessageRecord;

pub struct MessageStore {
    capacity: usize,
    chats: Mutex<HashMap<i64, VecDeque<MessageRecord>>>,
}

impl MessageStore {
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            chats: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a record, evicting from the head until the chat is back within capacity.
    pub fn append(&self, chat_id: i64, record: MessageRecord) {
        let mut chats = self.lock();
        let history = chats
            .entry(chat_id)
            .or_insert_with(|| VecDeque::with_capacity(self.capacity.min(128)));
        history.push_back(record);

        let overflow = history.len().saturating_sub(self.capacity);
        if overflow > 0 {
            history.drain(..overflow);
        }
    }

    #[must_use]
    pub fn snapshot(&self, chat_id: i64) -> Vec<MessageRecord> {
        self.lock()
            .get(&chat_id)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Remove every record of the chat and return how many were dropped.
    pub fn clear(&self, chat_id: i64) -> usize {
        self.lock()
            .remove(&chat_id)
            .map_or(0, |history| history.len())
    }

    #[must_use]
    pub fn count(&self, chat_id: i64) -> usize {
        self.lock().get(&chat_id).map_or(0, VecDeque::len)
    }

    // Critical sections never panic mid-update, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<i64, VecDeque<MessageRecord>>> {
        self.chats.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new(crate::core::config::DEFAULT_HISTORY_CAPACITY)
    }
}
