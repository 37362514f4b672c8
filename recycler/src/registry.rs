//! Sorted registry of live cells.
//!
//! The registry order is also the sibling/draw order of the views, so a sorted `Vec` is the
//! primary structure: a map would still need a second ordered structure for placement.

use alloc::vec::Vec;

/// A live item: its index and the opaque view handle the host created for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<H> {
    pub index: usize,
    pub handle: H,
}

#[derive(Clone, Debug)]
pub struct ActiveRegistry<H> {
    cells: Vec<Cell<H>>,
}

impl<H> Default for ActiveRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ActiveRegistry<H> {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Position of the first cell whose index is greater than `index`.
    fn upper_bound(&self, index: usize) -> usize {
        self.cells.partition_point(|c| c.index <= index)
    }

    /// Inserts a cell keeping the registry sorted by index and returns its position.
    ///
    /// The position is located by binary search over indices only; already placed handles are
    /// never compared.
    pub fn insert_sorted(&mut self, index: usize, handle: H) -> usize {
        let pos = self.upper_bound(index);
        debug_assert!(
            pos == 0 || self.cells[pos - 1].index != index,
            "ActiveRegistry::insert_sorted: index {index} is already active"
        );
        self.cells.insert(pos, Cell { index, handle });
        pos
    }

    /// Removes the cell for `index`, returning its pre-removal position and its handle.
    pub fn remove(&mut self, index: usize) -> Option<(usize, H)> {
        let pos = self.position(index)?;
        let cell = self.cells.remove(pos);
        Some((pos, cell.handle))
    }

    /// Current position of the cell for `index`.
    pub fn position(&self, index: usize) -> Option<usize> {
        let pos = self.upper_bound(index).checked_sub(1)?;
        (self.cells[pos].index == index).then_some(pos)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.position(index).is_some()
    }

    pub fn get(&self, index: usize) -> Option<&H> {
        self.position(index).map(|pos| &self.cells[pos].handle)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut H> {
        let pos = self.position(index)?;
        Some(&mut self.cells[pos].handle)
    }

    pub(crate) fn handle_at_mut(&mut self, pos: usize) -> &mut H {
        &mut self.cells[pos].handle
    }

    /// Removes every cell, front to back.
    pub fn drain(&mut self) -> impl Iterator<Item = Cell<H>> + '_ {
        self.cells.drain(..)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell<H>] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell<H>> + '_ {
        self.cells.iter()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().map(|c| c.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn insert_sorted_returns_sibling_position() {
        let mut reg = ActiveRegistry::new();
        assert_eq!(reg.insert_sorted(5, 'e'), 0);
        assert_eq!(reg.insert_sorted(1, 'a'), 0);
        assert_eq!(reg.insert_sorted(9, 'i'), 2);
        assert_eq!(reg.insert_sorted(3, 'c'), 1);
        assert_eq!(reg.indices().collect::<Vec<_>>(), vec![1, 3, 5, 9]);
    }

    #[test]
    fn remove_reports_pre_removal_position() {
        let mut reg = ActiveRegistry::new();
        for i in [2, 4, 6, 8] {
            reg.insert_sorted(i, i * 100);
        }
        assert_eq!(reg.remove(6), Some((2, 600)));
        assert_eq!(reg.remove(6), None);
        assert_eq!(reg.remove(3), None);
        assert_eq!(reg.remove(2), Some((0, 200)));
        assert_eq!(reg.indices().collect::<Vec<_>>(), vec![4, 8]);
    }

    #[test]
    fn lookups_and_drain_order() {
        let mut reg = ActiveRegistry::new();
        for i in [30, 10, 20] {
            reg.insert_sorted(i, i);
        }
        assert_eq!(reg.position(20), Some(1));
        assert_eq!(reg.get(30), Some(&30));
        assert!(!reg.contains(0));
        *reg.get_mut(10).unwrap() = 11;
        let drained: Vec<_> = reg.drain().map(|c| (c.index, c.handle)).collect();
        assert_eq!(drained, vec![(10, 11), (20, 20), (30, 30)]);
        assert!(reg.is_empty());
    }
}
