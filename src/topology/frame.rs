//! Frames: visual grouping of slots into clusters.
//!
//! A cluster holds one main slot and up to two side slots. The frame order
//! differs from the topology order (clusters are grouped by unit), and the
//! rule engine never reads it.

use super::SlotId;

/// One visual cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cluster {
    pub main: SlotId,
    pub sides: &'static [SlotId],
}

impl Cluster {
    /// Every slot in the cluster, main first.
    pub fn slots(&self) -> impl Iterator<Item = SlotId> + '_ {
        std::iter::once(self.main).chain(self.sides.iter().copied())
    }

    #[must_use]
    pub fn contains(&self, slot: SlotId) -> bool {
        self.main == slot || self.sides.contains(&slot)
    }
}

/// Ordered clusters of one deck type.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    clusters: &'static [Cluster],
}

impl Frame {
    pub(super) const fn new(clusters: &'static [Cluster]) -> Self {
        Self { clusters }
    }

    #[must_use]
    pub fn clusters(&self) -> &'static [Cluster] {
        self.clusters
    }

    /// The cluster a slot belongs to.
    #[must_use]
    pub fn cluster_of(&self, slot: SlotId) -> Option<&'static Cluster> {
        self.clusters.iter().find(|c| c.contains(slot))
    }

    /// Slot ids in frame order.
    pub fn slot_order(&self) -> impl Iterator<Item = SlotId> {
        self.clusters.iter().flat_map(|c| c.slots())
    }
}
