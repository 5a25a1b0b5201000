//! Single-threaded push signals for host notifications (resize, scroll).

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

type Listener<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

impl<T> Registry<T> {
    fn is_live(&self, id: u64) -> bool {
        self.listeners.iter().any(|(l, _)| *l == id)
    }
}

/// A value stream the host pushes into and the engine listens to.
///
/// Listeners may subscribe or unsubscribe from inside a notification; a listener removed
/// during an emission is not called for the rest of it.
pub struct Signal<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Signal<T> {
    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl<T: 'static> Signal<T> {
    /// A signal with no listeners.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Register `listener`; it stays registered until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            let listener: Listener<T> = Rc::new(RefCell::new(listener));
            reg.listeners.push((id, listener));
            id
        };
        let weak: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(reg) = weak.upgrade() {
                    reg.borrow_mut().listeners.retain(|(l, _)| *l != id);
                }
            })),
        }
    }

    /// Notify every live listener; returns how many were called.
    pub fn emit(&self, value: T) -> usize {
        let snapshot: Vec<(u64, Listener<T>)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();
        let mut called = 0;
        for (id, listener) in snapshot {
            if !self.registry.borrow().is_live(id) {
                continue;
            }
            // A listener that re-emits into its own signal is skipped rather than re-entered.
            let Ok(mut f) = listener.try_borrow_mut() else {
                tracing::warn!(id, "skipping re-entrant signal listener");
                continue;
            };
            (*f)(&value);
            called += 1;
        }
        called
    }
}

/// Guard for one listener registration. Dropping it unsubscribes.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

impl Subscription {
    /// Unsubscribe now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/signal.rs"]
mod tests;
