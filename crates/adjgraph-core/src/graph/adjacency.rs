use std::collections::{BTreeMap, BTreeSet, btree_map};
use std::iter::Flatten;
use std::option;

/// Iterator over the neighbor set of one vertex.
pub type Neighbors<'a, V> = Flatten<option::IntoIter<&'a BTreeSet<V>>>;

/// Vertex → neighbor-set map shared by both graph flavours.
///
/// Knows nothing about edge direction or counts; the owning graph decides
/// how many links an edge needs and when a vertex may be pruned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AdjacencyList<V> {
    map: BTreeMap<V, BTreeSet<V>>,
}

impl<V> Default for AdjacencyList<V> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<V: Ord + Clone> AdjacencyList<V> {
    /// Register `v` with an empty neighbor set. `false` if already present.
    pub(crate) fn ensure(&mut self, v: V) -> bool {
        match self.map.entry(v) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(slot) => {
                slot.insert(BTreeSet::new());
                true
            }
        }
    }

    /// Add `w` to the neighbors of `v`, registering `v` if needed.
    pub(crate) fn link(&mut self, v: V, w: V) -> bool {
        self.map.entry(v).or_default().insert(w)
    }

    /// Remove `w` from the neighbors of `v`.
    pub(crate) fn unlink(&mut self, v: &V, w: &V) -> bool {
        self.map.get_mut(v).is_some_and(|set| set.remove(w))
    }

    /// Drop `v` from the map if it has no neighbors left.
    pub(crate) fn prune_if(&mut self, v: &V, keep: bool) {
        if !keep && self.map.get(v).is_some_and(BTreeSet::is_empty) {
            self.map.remove(v);
        }
    }

    pub(crate) fn neighbors(&self, v: &V) -> Neighbors<'_, V> {
        self.map.get(v).into_iter().flatten()
    }

    pub(crate) fn vertices(&self) -> btree_map::Keys<'_, V, BTreeSet<V>> {
        self.map.keys()
    }

    pub(crate) fn iter(&self) -> btree_map::Iter<'_, V, BTreeSet<V>> {
        self.map.iter()
    }

    pub(crate) fn contains_vertex(&self, v: &V) -> bool {
        self.map.contains_key(v)
    }

    pub(crate) fn contains(&self, v: &V, w: &V) -> bool {
        self.map.get(v).is_some_and(|set| set.contains(w))
    }

    pub(crate) fn degree(&self, v: &V) -> usize {
        self.map.get(v).map_or(0, BTreeSet::len)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}
