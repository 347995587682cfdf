use crate::error::Result;
use crate::types::{Message, NewMessage};

/// Record store backing the wall.
///
/// Implementations assign ids and timestamps on insert and never modify a
/// stored message afterwards.
pub trait MessageStore: Send + Sync {
    /// Persist a new message and return it with id and `created_at` filled in.
    fn insert(&self, message: NewMessage) -> Result<Message>;

    /// Fetch a message by id.
    fn get(&self, id: &str) -> Result<Option<Message>>;

    /// Up to `limit` messages, newest first. Ties go to the later insert.
    fn latest(&self, limit: usize) -> Result<Vec<Message>>;

    /// Number of stored messages.
    fn count(&self) -> Result<usize>;

    /// Message at `offset` in insertion order.
    fn nth(&self, offset: usize) -> Result<Option<Message>>;
}

impl<S: MessageStore + ?Sized> MessageStore for Box<S> {
    fn insert(&self, message: NewMessage) -> Result<Message> {
        (**self).insert(message)
    }

    fn get(&self, id: &str) -> Result<Option<Message>> {
        (**self).get(id)
    }

    fn latest(&self, limit: usize) -> Result<Vec<Message>> {
        (**self).latest(limit)
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn nth(&self, offset: usize) -> Result<Option<Message>> {
        (**self).nth(offset)
    }
}
