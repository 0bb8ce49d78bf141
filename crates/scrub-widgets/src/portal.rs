#![forbid(unsafe_code)]

//! Shared overlay surface for tooltip content.
//!
//! All tooltips render into one process-wide overlay layer regardless of
//! where they are declared, the way a web portal root hosts every floating
//! element. The surface is created lazily on first use and reused for the
//! lifetime of the process; creation is idempotent, so repeated lazy-init
//! calls converge on a single instance.

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::placement::Placement;

static SHARED: OnceLock<Portal> = OnceLock::new();

/// Identifier of a mounted overlay entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

/// A mounted overlay entry as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PortalEntry {
    /// Where the entry should render, once placed.
    pub placement: Option<Placement>,
    /// Whether the entry is currently shown. Hidden entries stay mounted so
    /// their boxes remain measurable.
    pub visible: bool,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(MountId, PortalEntry)>,
}

/// Process-wide overlay registry.
#[derive(Debug, Default)]
pub struct Portal {
    inner: Mutex<Registry>,
}

impl Portal {
    /// The shared surface.
    ///
    /// Lazily created on first call; every later call returns the same
    /// instance.
    pub fn shared() -> &'static Portal {
        SHARED.get_or_init(Portal::default)
    }

    /// Mount a new overlay entry, initially hidden and unplaced.
    pub fn mount(&self) -> MountId {
        let mut registry = self.lock();
        let id = MountId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, PortalEntry::default()));
        id
    }

    /// Update an entry's placement and visibility. Unknown ids are ignored.
    pub fn update(&self, id: MountId, placement: Option<Placement>, visible: bool) {
        let mut registry = self.lock();
        if let Some((_, entry)) = registry.entries.iter_mut().find(|(eid, _)| *eid == id) {
            entry.placement = placement;
            entry.visible = visible;
        }
    }

    /// Remove an entry. Unknown ids are ignored.
    pub fn unmount(&self, id: MountId) {
        self.lock().entries.retain(|(eid, _)| *eid != id);
    }

    /// Look up an entry.
    pub fn entry(&self, id: MountId) -> Option<PortalEntry> {
        self.lock()
            .entries
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, entry)| *entry)
    }

    /// Number of mounted entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Whether nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        // A poisoned registry is still structurally valid; keep serving it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Side;

    #[test]
    fn shared_surface_is_one_instance() {
        let first = Portal::shared();
        let second = Portal::shared();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn mount_update_unmount_cycle() {
        let portal = Portal::default();
        let id = portal.mount();
        assert_eq!(portal.len(), 1);

        let entry = portal.entry(id).unwrap();
        assert!(!entry.visible);
        assert!(entry.placement.is_none());

        let placement = Placement {
            top: 10.0,
            left: 20.0,
            side: Side::Bottom,
        };
        portal.update(id, Some(placement), true);
        let entry = portal.entry(id).unwrap();
        assert!(entry.visible);
        assert_eq!(entry.placement, Some(placement));

        portal.unmount(id);
        assert!(portal.is_empty());
        assert!(portal.entry(id).is_none());
    }

    #[test]
    fn updates_after_unmount_are_ignored() {
        let portal = Portal::default();
        let id = portal.mount();
        portal.unmount(id);
        portal.update(id, None, true);
        assert!(portal.is_empty());
    }

    #[test]
    fn mounts_get_distinct_ids() {
        let portal = Portal::default();
        let a = portal.mount();
        let b = portal.mount();
        assert_ne!(a, b);
        assert_eq!(portal.len(), 2);
    }
}
