//! Document-level key listener registry.
//!
//! The hub plays the role of the document: components register a listener to
//! receive global key presses, and the returned [`KeyListener`] guard removes
//! the registration when it is dropped. Dropping is the only way to detach,
//! so a listener can never outlive its owner, including on unwind.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

pub type ListenerId = u64;

#[derive(Debug, Default)]
struct HubInner {
    attached: BTreeSet<ListenerId>,
    next_id: ListenerId,
    attach_count: u64,
    detach_count: u64,
}

/// Shared, single-threaded registry of active key listeners.
#[derive(Debug, Clone, Default)]
pub struct KeyListenerHub {
    inner: Rc<RefCell<HubInner>>,
}

impl KeyListenerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener. It stays attached until the guard is dropped.
    pub fn attach(&self) -> KeyListener {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.attached.insert(id);
        inner.attach_count += 1;
        log::trace!("Key listener {} attached", id);

        KeyListener {
            id,
            hub: self.clone(),
        }
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.inner.borrow().attached.contains(&id)
    }

    /// Number of listeners currently attached.
    pub fn active_count(&self) -> usize {
        self.inner.borrow().attached.len()
    }

    /// Total number of attach operations since the hub was created.
    pub fn attach_count(&self) -> u64 {
        self.inner.borrow().attach_count
    }

    /// Total number of detach operations since the hub was created.
    pub fn detach_count(&self) -> u64 {
        self.inner.borrow().detach_count
    }

    fn detach(&self, id: ListenerId) {
        let mut inner = self.inner.borrow_mut();
        if inner.attached.remove(&id) {
            inner.detach_count += 1;
            log::trace!("Key listener {} detached", id);
        }
    }
}

/// Registration guard for a document-level key listener.
#[derive(Debug)]
pub struct KeyListener {
    id: ListenerId,
    hub: KeyListenerHub,
}

impl KeyListener {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_attached(&self) -> bool {
        self.hub.is_attached(self.id)
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.hub.detach(self.id);
    }
}
