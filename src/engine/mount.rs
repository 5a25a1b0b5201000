//! Mounting a container onto host signals with per-frame coalescing.

use std::{cell::RefCell, rc::Rc};

use crate::{
    engine::container::{ScrollSample, StackContainer},
    engine::render::StackFrame,
    engine::signal::{Signal, Subscription},
    foundation::core::Viewport,
};

#[derive(Debug, Default)]
struct Pending {
    viewport: Option<Viewport>,
    scroll: Option<ScrollSample>,
    notifications: u64,
}

/// What one [`MountedStack::on_frame`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameUpdate {
    /// Geometry was recomputed.
    pub relaid_out: bool,
    /// Row scales were resampled.
    pub resampled: bool,
    /// Host notifications folded into this frame.
    pub coalesced: u64,
}

/// A container subscribed to host viewport and scroll signals.
///
/// Notifications only record the latest value; [`MountedStack::on_frame`] applies them, so
/// any number of notifications between two frames costs at most one relayout and one resample.
/// Dropping or unmounting releases both subscriptions.
#[derive(Debug)]
pub struct MountedStack<T> {
    container: StackContainer<T>,
    pending: Rc<RefCell<Pending>>,
    subscriptions: Vec<Subscription>,
}

impl<T> MountedStack<T> {
    /// Subscribe `container` to `viewport` and `scroll`.
    pub fn mount(
        container: StackContainer<T>,
        viewport: &Signal<Viewport>,
        scroll: &Signal<ScrollSample>,
    ) -> Self {
        let pending = Rc::new(RefCell::new(Pending::default()));

        let on_resize = Rc::clone(&pending);
        let resize_sub = viewport.subscribe(move |v| {
            let mut p = on_resize.borrow_mut();
            p.viewport = Some(*v);
            p.notifications += 1;
        });

        let on_scroll = Rc::clone(&pending);
        let scroll_sub = scroll.subscribe(move |s| {
            let mut p = on_scroll.borrow_mut();
            p.scroll = Some(*s);
            p.notifications += 1;
        });

        tracing::debug!("stack mounted");
        Self {
            container,
            pending,
            subscriptions: vec![resize_sub, scroll_sub],
        }
    }

    /// Apply everything recorded since the previous frame.
    ///
    /// A resize re-runs layout, which re-derives progress from the last scroll sample since
    /// the container's height may have changed.
    pub fn on_frame(&mut self) -> FrameUpdate {
        let Pending {
            viewport,
            scroll,
            notifications,
        } = std::mem::take(&mut *self.pending.borrow_mut());

        let mut update = FrameUpdate {
            coalesced: notifications,
            ..FrameUpdate::default()
        };
        if let Some(v) = viewport {
            self.container.set_viewport(v);
            update.relaid_out = v.is_measured();
        }
        if let Some(s) = scroll {
            self.container.set_scroll_sample(s);
            update.resampled = true;
        } else if update.relaid_out && self.container.scroll_sample().is_some() {
            update.resampled = true;
        }
        update
    }

    /// The mounted container.
    pub fn container(&self) -> &StackContainer<T> {
        &self.container
    }

    /// Mutable access, e.g. to replace the item list. Item changes apply immediately and
    /// re-derive progress from the last scroll sample.
    pub fn container_mut(&mut self) -> &mut StackContainer<T> {
        &mut self.container
    }

    /// Render the current state.
    pub fn render<N>(&self, render: impl FnMut(&T, usize) -> N) -> StackFrame<N> {
        self.container.render(render)
    }

    /// Release both subscriptions and hand back the container.
    pub fn unmount(mut self) -> StackContainer<T> {
        self.subscriptions.clear();
        tracing::debug!("stack unmounted");
        self.container
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/mount.rs"]
mod tests;
