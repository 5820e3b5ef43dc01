//! The set of surfaces one page view exposes.

use std::collections::{BTreeMap, BTreeSet};

use reqwest::Url;

use super::dom::Surface;
use crate::state::TargetId;

/// Page being populated: its origin, the targets it contains, and their surfaces.
#[derive(Clone, Debug)]
pub struct Page {
    /// Origin the page is served from; decides which links are external.
    origin: Url,
    /// Every target (surface or control) present on the page.
    present: BTreeSet<TargetId>,
    /// Rendered content per present surface target.
    surfaces: BTreeMap<TargetId, Surface>,
}

impl Page {
    /// What: Create a page containing exactly `targets`.
    ///
    /// Inputs:
    /// - `origin`: Page URL (only its origin matters).
    /// - `targets`: Targets present on the page.
    ///
    /// Output:
    /// - Page with an empty surface for every present surface target.
    #[must_use]
    pub fn new(origin: Url, targets: impl IntoIterator<Item = TargetId>) -> Self {
        let present: BTreeSet<TargetId> = targets.into_iter().collect();
        let surfaces = present
            .iter()
            .copied()
            .filter(|t| t.is_surface())
            .map(|t| (t, Surface::new(t)))
            .collect();
        Self {
            origin,
            present,
            surfaces,
        }
    }

    /// Page containing every known target.
    #[must_use]
    pub fn with_all_targets(origin: Url) -> Self {
        Self::new(origin, TargetId::ALL)
    }

    /// Page origin URL.
    #[must_use]
    pub const fn origin(&self) -> &Url {
        &self.origin
    }

    /// Whether `target` exists on the page.
    #[must_use]
    pub fn has(&self, target: TargetId) -> bool {
        self.present.contains(&target)
    }

    /// Surface of `target`, if present.
    #[must_use]
    pub fn surface(&self, target: TargetId) -> Option<&Surface> {
        self.surfaces.get(&target)
    }

    /// Mutable surface of `target`, if present.
    pub fn surface_mut(&mut self, target: TargetId) -> Option<&mut Surface> {
        self.surfaces.get_mut(&target)
    }

    /// Present surfaces in document order.
    pub fn surfaces(&self) -> impl Iterator<Item = &Surface> {
        self.surfaces.values()
    }

    /// Present surfaces in document order, mutably.
    pub fn surfaces_mut(&mut self) -> impl Iterator<Item = &mut Surface> {
        self.surfaces.values_mut()
    }
}
