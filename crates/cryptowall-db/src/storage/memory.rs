//! MemoryStore — a MessageStore that keeps everything in a Vec.
//!
//! Insertion order is the Vec order. Interior mutability via
//! `parking_lot::Mutex`, so the store can be shared across threads.

use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::error::Result;
use crate::types::{Message, NewMessage};

use super::traits::MessageStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    messages: Mutex<Vec<Message>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MessageStore for MemoryStore {
    fn insert(&self, message: NewMessage) -> Result<Message> {
        let message = message.into_message(Uuid::new_v4().to_string(), Utc::now());
        self.messages.lock().push(message.clone());
        Ok(message)
    }

    fn get(&self, id: &str) -> Result<Option<Message>> {
        Ok(self.messages.lock().iter().find(|m| m.id == id).cloned())
    }

    fn latest(&self, limit: usize) -> Result<Vec<Message>> {
        let mut newest: Vec<Message> = self.messages.lock().iter().rev().cloned().collect();
        // Stable sort keeps later inserts first among equal timestamps.
        newest.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        newest.truncate(limit);
        Ok(newest)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.messages.lock().len())
    }

    fn nth(&self, offset: usize) -> Result<Option<Message>> {
        Ok(self.messages.lock().get(offset).cloned())
    }
}
