use std::fmt::{self, Display, Formatter};
use std::ops::Index;

/// Transparent type that represents an index into a [Slab].
///
/// Used to discourage accessing the [Slab] at arbitrary indexes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SlabIndex(pub(super) usize);
impl SlabIndex {
    /// Returns the inner [usize].
    ///
    /// Annoyingly long names discourage use and make you really think about what you are doing.
    pub fn i_actually_really_know_what_i_am_doing_and_i_want_the_inner_usize(&self) -> usize {
        self.0
    }
    /// Returns a new [SlabIndex] created from the provided [usize].
    /// Annoyingly long names discourage use and make you really think about what you are doing.
    pub fn i_actually_really_know_what_i_am_doing_and_i_want_to_construct_from_usize(
        i: usize,
    ) -> Self {
        Self(i)
    }
}
impl Display for SlabIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Append-only arena. Items are never removed individually, so indexes stay valid
/// until the whole [Slab] is [cleared](Slab::clear).
///
/// # Example
///
/// ```
/// # use trilogic::data_structures::Slab;
/// let mut s = Slab::new();
///
/// let index = s.insert(5);
/// assert_eq!(s.get(index), Some(&5));
///
/// *s.get_mut(index).unwrap() = 6;
/// assert_eq!(s.get(index), Some(&6));
/// ```
#[derive(Debug, Clone)]
pub struct Slab<T: Sized> {
    data: Vec<T>,
}
impl<T: Sized> Slab<T> {
    /// Returns an empty [Slab].
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Inserts an item into the slab and returns its index.
    pub fn insert(&mut self, item: T) -> SlabIndex {
        let index = SlabIndex(self.data.len());
        self.data.push(item);
        index
    }

    /// Returns a mutable reference to the item at `index`.
    ///
    /// Returns [None] if `index` was never handed out by this slab.
    pub fn get_mut(&mut self, index: SlabIndex) -> Option<&mut T> {
        self.data.get_mut(index.0)
    }

    /// Return a reference to the item at `index`.
    ///
    /// Returns [None] if `index` was never handed out by this slab.
    pub fn get(&self, index: SlabIndex) -> Option<&T> {
        self.data.get(index.0)
    }

    /// Returns the number of items in the slab.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the number of items in the slab is 0.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every item, invalidating all previously returned indexes.
    pub fn clear(&mut self) {
        self.data.clear()
    }

    /// Returns an iterator over pairs of ```(SlabIndex, [&T])```.
    pub fn iter(&self) -> impl Iterator<Item = (SlabIndex, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, item)| (SlabIndex(i), item))
    }

    /// Returns an iterator over pairs of ```(SlabIndex, [&mut T])```.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlabIndex, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, item)| (SlabIndex(i), item))
    }
}

/// # Panics
///
/// Panics if `index` was never handed out by this slab.
impl<T> Index<SlabIndex> for Slab<T> {
    type Output = T;
    fn index(&self, index: SlabIndex) -> &T {
        &self.data[index.0]
    }
}

impl<T> Default for Slab<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get() {
        let mut s: Slab<_> = Default::default();

        assert_eq!(s.get(SlabIndex(0)), None);

        let index = s.insert(1);
        assert_eq!(*s.get(index).unwrap(), 1);
        assert_eq!(s.get(SlabIndex(1)), None);
    }

    #[test]
    fn test_get_mut() {
        let mut s: Slab<_> = Default::default();

        assert_eq!(s.get_mut(SlabIndex(0)), None);

        let index = s.insert(1);
        *s.get_mut(index).unwrap() += 1;
        assert_eq!(s.get(index), Some(&2));
    }

    #[test]
    fn test_len_and_clear() {
        let mut s = Slab::new();

        assert_eq!(s.len(), 0);
        assert!(s.is_empty());

        let index = s.insert(1);
        s.insert(2);
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());

        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.get(index), None);
    }

    #[test]
    fn test_iter() {
        let mut s = Slab::new();
        for i in 0..10 {
            s.insert(i);
        }
        for (i, n) in s.iter() {
            assert_eq!(i.0, *n)
        }
        for (_, n) in s.iter_mut() {
            *n *= 2;
        }
        for (i, n) in s.iter() {
            assert_eq!(i.0 * 2, *n)
        }
    }
}
