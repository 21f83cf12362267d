//! Destination list returned by the move generator.

use std::ops::Index;

use super::square::Square;

/// Upper bound on destinations for one piece: a centralised queen reaches 27.
pub(crate) const MAX_DESTINATIONS: usize = 32;

/// List of destination squares with a fixed-size backing array.
///
/// Order follows generation order (direction by direction); callers should
/// treat it as a set.
#[derive(Clone, Copy, Debug)]
pub struct MoveList {
    squares: [Square; MAX_DESTINATIONS],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub const fn new() -> Self {
        MoveList {
            squares: [Square(0, 0); MAX_DESTINATIONS],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, sq: Square) {
        self.squares[self.len] = sq;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Square> {
        self.as_slice().get(idx).copied()
    }

    /// Copy into an owned, sorted vector (row-major order).
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Square> {
        let mut squares = self.as_slice().to_vec();
        squares.sort_unstable();
        squares
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over squares in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let sq = self.list.squares[self.idx];
            self.idx += 1;
            Some(sq)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Square;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Square;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.squares[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());
        list.push(Square(4, 4));
        list.push(Square(0, 1));

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], Square(4, 4));
        assert!(list.contains(Square(0, 1)));
        assert!(!list.contains(Square(1, 0)));
        assert_eq!(list.get(2), None);

        let owned: Vec<Square> = list.into_iter().collect();
        assert_eq!(owned, vec![Square(4, 4), Square(0, 1)]);
        assert_eq!(list.to_sorted_vec(), vec![Square(0, 1), Square(4, 4)]);
    }

    #[test]
    fn test_equality_ignores_unused_slots() {
        let mut a = MoveList::new();
        let mut b = MoveList::new();
        a.push(Square(1, 1));
        b.push(Square(1, 1));
        assert_eq!(a, b);
        b.push(Square(2, 2));
        assert_ne!(a, b);
    }
}
