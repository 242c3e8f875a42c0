//! Reusable cell pool keyed by cell kind.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// Tag a cell factory is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellKind(&'static str);

impl CellKind {
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A cell that can be handed out again after use.
pub trait ReusableCell {
    /// Clear everything a previous binding left behind.
    fn prepare_for_reuse(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("no cell factory registered for kind '{0}'")]
    Unregistered(CellKind),
    #[error("cell of kind '{0}' returned but none is checked out")]
    NotCheckedOut(CellKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStats {
    /// Cells waiting in the pool.
    pub idle: usize,
    /// Cells currently handed out.
    pub checked_out: usize,
    /// Cells built by the factory so far.
    pub created: usize,
}

type Factory<C> = Box<dyn Fn() -> C + Send>;

struct Slot<C> {
    factory: Factory<C>,
    idle: Vec<C>,
    checked_out: usize,
    created: usize,
}

pub struct CellPool<C> {
    slots: HashMap<CellKind, Slot<C>>,
}

impl<C> Default for CellPool<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CellPool<C> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Register (or replace) the factory for `kind`.
    ///
    /// Replacing a factory drops idle cells built by the old one.
    pub fn register<F>(&mut self, kind: CellKind, factory: F)
    where
        F: Fn() -> C + Send + 'static,
    {
        let checked_out = self.slots.get(&kind).map_or(0, |slot| slot.checked_out);
        self.slots.insert(
            kind,
            Slot {
                factory: Box::new(factory),
                idle: Vec::new(),
                checked_out,
                created: 0,
            },
        );
    }

    pub fn stats(&self, kind: CellKind) -> Option<PoolStats> {
        self.slots.get(&kind).map(|slot| PoolStats {
            idle: slot.idle.len(),
            checked_out: slot.checked_out,
            created: slot.created,
        })
    }
}

impl<C: ReusableCell> CellPool<C> {
    /// Hand out an idle cell of `kind`, building one if none is idle.
    pub fn dequeue(&mut self, kind: CellKind) -> Result<C, PoolError> {
        let slot = self
            .slots
            .get_mut(&kind)
            .ok_or(PoolError::Unregistered(kind))?;
        let cell = match slot.idle.pop() {
            Some(cell) => cell,
            None => {
                slot.created += 1;
                tracing::trace!(%kind, created = slot.created, "building new cell");
                (slot.factory)()
            }
        };
        slot.checked_out += 1;
        Ok(cell)
    }

    /// Return a cell to the pool. It is reset before it becomes idle.
    pub fn recycle(&mut self, kind: CellKind, mut cell: C) -> Result<(), PoolError> {
        let slot = self
            .slots
            .get_mut(&kind)
            .ok_or(PoolError::Unregistered(kind))?;
        if slot.checked_out == 0 {
            return Err(PoolError::NotCheckedOut(kind));
        }
        cell.prepare_for_reuse();
        slot.checked_out -= 1;
        slot.idle.push(cell);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: CellKind = CellKind::new("note");

    #[derive(Debug, Default)]
    struct Note {
        text: String,
        serial: usize,
    }

    impl ReusableCell for Note {
        fn prepare_for_reuse(&mut self) {
            self.text.clear();
        }
    }

    fn pool() -> CellPool<Note> {
        let mut pool = CellPool::new();
        pool.register(NOTE, Note::default);
        pool
    }

    #[test]
    fn unregistered_kind_is_rejected() {
        let mut pool: CellPool<Note> = CellPool::new();
        assert_eq!(pool.dequeue(NOTE).unwrap_err(), PoolError::Unregistered(NOTE));
    }

    #[test]
    fn recycled_cell_is_reused_and_reset() {
        let mut pool = pool();
        let mut cell = pool.dequeue(NOTE).unwrap();
        cell.text.push_str("stale");
        cell.serial = 7;
        pool.recycle(NOTE, cell).unwrap();

        let again = pool.dequeue(NOTE).unwrap();
        assert_eq!(again.serial, 7);
        assert!(again.text.is_empty());
        assert_eq!(pool.stats(NOTE).unwrap().created, 1);
    }

    #[test]
    fn stats_track_checkouts() {
        let mut pool = pool();
        let a = pool.dequeue(NOTE).unwrap();
        let _b = pool.dequeue(NOTE).unwrap();
        pool.recycle(NOTE, a).unwrap();
        assert_eq!(
            pool.stats(NOTE),
            Some(PoolStats {
                idle: 1,
                checked_out: 1,
                created: 2,
            })
        );
    }

    #[test]
    fn recycling_more_than_checked_out_fails() {
        let mut pool = pool();
        assert_eq!(
            pool.recycle(NOTE, Note::default()).unwrap_err(),
            PoolError::NotCheckedOut(NOTE)
        );
    }
}
