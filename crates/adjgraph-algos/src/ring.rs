//! Fixed-size circular buffer of cells with named slots.
//!
//! # Overview
//!
//! A [`Ring`] holds `len` cells arranged in a circle with a cursor on one of
//! them. Every cell has the same slot schema, fixed when the ring is built;
//! each slot is empty or holds one `T`. Offsets address cells relative to the
//! cursor and wrap modulo `len`, so `at(-1)` is the previous cell and
//! `at(len)` is the cursor cell itself.
//!
//! ```rust,ignore
//! let mut ring = Ring::new(2, ["n", "fib"])?;
//! ring.at_mut(-1).set("fib", 1)?;
//! ring.advance();
//! assert_eq!(ring.at(-1).get("fib")?, Some(&1));
//! ```

#![allow(clippy::must_use_candidate)]

use std::collections::BTreeMap;

use adjgraph_core::error::ErrorCode;

/// Errors raised by [`Ring`] and [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    #[error("slot `{0}` is not part of the ring schema")]
    UnknownSlot(String),

    #[error("a ring needs at least one cell")]
    EmptyRing,
}

impl RingError {
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownSlot(_) => ErrorCode::UnknownSlot,
            Self::EmptyRing => ErrorCode::EmptyRing,
        }
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One position of a [`Ring`]: a fixed set of named, optional slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<T> {
    slots: BTreeMap<String, Option<T>>,
}

impl<T> Cell<T> {
    fn with_schema(names: &[String]) -> Self {
        Self {
            slots: names.iter().map(|name| (name.clone(), None)).collect(),
        }
    }

    /// Value of `name`, `None` if the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::UnknownSlot`] if `name` is not in the schema.
    pub fn get(&self, name: &str) -> Result<Option<&T>, RingError> {
        self.slots
            .get(name)
            .map(Option::as_ref)
            .ok_or_else(|| RingError::UnknownSlot(name.to_owned()))
    }

    /// Store `value` in `name`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::UnknownSlot`] if `name` is not in the schema.
    pub fn set(&mut self, name: &str, value: T) -> Result<Option<T>, RingError> {
        self.slot_mut(name).map(|slot| slot.replace(value))
    }

    /// Empty `name`, returning what it held.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::UnknownSlot`] if `name` is not in the schema.
    pub fn take(&mut self, name: &str) -> Result<Option<T>, RingError> {
        self.slot_mut(name).map(Option::take)
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Option<T>, RingError> {
        self.slots
            .get_mut(name)
            .ok_or_else(|| RingError::UnknownSlot(name.to_owned()))
    }

    /// Slot names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Ring
// ---------------------------------------------------------------------------

/// Circular sequence of [`Cell`]s with a cursor.
#[derive(Debug, Clone)]
pub struct Ring<T> {
    cells: Vec<Cell<T>>,
    cursor: usize,
}

impl<T> Ring<T> {
    /// `len` cells, each with one empty slot per name in `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`RingError::EmptyRing`] if `len` is zero.
    pub fn new<I, S>(len: usize, schema: I) -> Result<Self, RingError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if len == 0 {
            return Err(RingError::EmptyRing);
        }
        let names: Vec<String> = schema.into_iter().map(Into::into).collect();
        Ok(Self {
            cells: (0..len).map(|_| Cell::with_schema(&names)).collect(),
            cursor: 0,
        })
    }

    /// Number of cells. Never zero.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Absolute index of the cursor cell.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn position(&self, offset: isize) -> usize {
        let len = self.cells.len();
        let step = offset.unsigned_abs() % len;
        if offset >= 0 {
            (self.cursor + step) % len
        } else {
            (self.cursor + len - step) % len
        }
    }

    /// The cell `offset` steps from the cursor.
    pub fn at(&self, offset: isize) -> &Cell<T> {
        &self.cells[self.position(offset)]
    }

    pub fn at_mut(&mut self, offset: isize) -> &mut Cell<T> {
        let i = self.position(offset);
        &mut self.cells[i]
    }

    /// The cursor cell.
    pub fn current(&self) -> &Cell<T> {
        self.at(0)
    }

    pub fn current_mut(&mut self) -> &mut Cell<T> {
        self.at_mut(0)
    }

    /// Move the cursor one cell forward.
    pub fn advance(&mut self) {
        self.rotate(1);
    }

    /// Move the cursor `offset` cells (negative moves backwards).
    pub fn rotate(&mut self, offset: isize) {
        self.cursor = self.position(offset);
    }

    /// Cells starting at the cursor, going forward once around.
    pub fn iter(&self) -> impl Iterator<Item = &Cell<T>> {
        self.cells[self.cursor..]
            .iter()
            .chain(&self.cells[..self.cursor])
    }
}
