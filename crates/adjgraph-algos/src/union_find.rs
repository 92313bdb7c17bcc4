//! Union-Find (disjoint set) over arbitrary keys.
//!
//! Keys are mapped to dense indices on first sight. `find` compresses the
//! path it walks; `union` attaches the smaller tree under the larger one.

#![allow(clippy::must_use_candidate)]

use std::collections::BTreeMap;

/// Disjoint-set forest keyed by `T`.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    index: BTreeMap<T, usize>,
    keys: Vec<T>,
    /// `parent[i] == i` for roots.
    parent: Vec<usize>,
    /// Tree size, valid at roots only.
    size: Vec<usize>,
    num_components: usize,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            index: BTreeMap::new(),
            keys: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
            num_components: 0,
        }
    }
}

impl<T: Ord + Clone> UnionFind<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `v` as a singleton set if unseen. Returns its index.
    pub fn insert(&mut self, v: T) -> usize {
        if let Some(&i) = self.index.get(&v) {
            return i;
        }
        let i = self.keys.len();
        self.index.insert(v.clone(), i);
        self.keys.push(v);
        self.parent.push(i);
        self.size.push(1);
        self.num_components += 1;
        i
    }

    /// Index of the root of `v`'s set, or `None` if `v` was never inserted.
    pub fn find(&mut self, v: &T) -> Option<usize> {
        let i = *self.index.get(v)?;
        Some(self.root(i))
    }

    fn root(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = i;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `v` and `w`, inserting either if unseen.
    ///
    /// Returns `true` if two distinct sets were merged.
    pub fn union(&mut self, v: T, w: T) -> bool {
        let (iv, iw) = (self.insert(v), self.insert(w));
        let (mut rv, mut rw) = (self.root(iv), self.root(iw));
        if rv == rw {
            return false;
        }
        if self.size[rv] > self.size[rw] {
            std::mem::swap(&mut rv, &mut rw);
        }
        self.parent[rv] = rw;
        self.size[rw] += self.size[rv];
        self.num_components -= 1;
        true
    }

    /// `true` if both keys are known and share a set.
    pub fn is_connected(&mut self, v: &T, w: &T) -> bool {
        match (self.find(v), self.find(w)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// The key stored at `index`.
    pub fn key(&self, index: usize) -> Option<&T> {
        self.keys.get(index)
    }

    pub const fn num_components(&self) -> usize {
        self.num_components
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Point every element straight at its root and return the parent table.
    pub fn compress(&mut self) -> &[usize] {
        for i in 0..self.parent.len() {
            let root = self.root(i);
            self.parent[i] = root;
        }
        &self.parent
    }
}

impl<T: Ord + Clone> FromIterator<T> for UnionFind<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut uf = Self::new();
        for v in iter {
            uf.insert(v);
        }
        uf
    }
}
