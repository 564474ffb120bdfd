//! Time and identity sources used when creating and mutating todo items.

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;
use uuid::Uuid;

use super::item::TodoId;

/// Source of "now" timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of identifiers that are unique for the lifetime of a collection.
pub trait IdGenerator {
    fn next_id(&self) -> TodoId;
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> TodoId {
        Uuid::new_v4()
    }
}

/// A clock that only moves when told to. Useful for deterministic tests.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { now: Cell::new(start) }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Hands out `00000000-0000-0000-0000-000000000001`, `...02` and so on.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u128>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> TodoId {
        let n = self.next.get() + 1;
        self.next.set(n);
        Uuid::from_u128(n)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Rc<G> {
    fn next_id(&self) -> TodoId {
        (**self).next_id()
    }
}
