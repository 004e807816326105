//! The common dictionary boundary: key ordering, pair cleanup, operation
//! outcomes, and a polymorphic handle that lets callers pick a container
//! implementation at runtime.
//!
//! Both [`AvlTree`] and [`SkipList`] implement the same operation set with
//! the same semantics; [`Dict`] wraps either behind one type so the choice
//! of structure becomes a construction-time detail.

use std::cmp::Ordering;

use crate::{avl, avl::AvlTree, level_generator::LcgError, skiplist, skiplist::SkipList};

/// A total order over keys, supplied at construction and stable for the
/// container's lifetime.
pub type Comparator<K> = Box<dyn Fn(&K, &K) -> Ordering>;

/// A cleanup callback invoked exactly once on every `(key, value)` pair that
/// leaves its container, whether by removal, overwriting insertion,
/// clearing, or the container being dropped.
pub type DropHook<K, V> = Box<dyn FnMut(K, V)>;

/// What an insertion did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The key was new; a node was created.
    Inserted,
    /// The key was present and `overwrite` was set; the stored pair was
    /// replaced and handed to the drop hook.
    Replaced,
    /// The key was present and `overwrite` was not set; nothing changed.
    AlreadyPresent,
}

/// What a probe did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The key was already present; the returned slot is the stored value.
    Existed,
    /// The key was new; the offered value is now stored.
    Inserted,
}

// ////////////////////////////////////////////////////////////////////////////
// Dict
// ////////////////////////////////////////////////////////////////////////////

/// A dictionary handle over either container implementation.
///
/// The variants share semantics for every operation; they differ only in
/// internal structure (rotation-balanced tree vs. randomized multi-level
/// list) and therefore in constant factors.
///
/// # Examples
///
/// ```
/// use ordered_dict::Dict;
///
/// let mut dict: Dict<u32, &str> = Dict::skiplist(12).unwrap();
/// dict.insert(1, "one", false);
/// assert_eq!(dict.get(&1), Some(&"one"));
///
/// let mut dict: Dict<u32, &str> = Dict::balanced();
/// dict.insert(1, "one", false);
/// assert_eq!(dict.get(&1), Some(&"one"));
/// ```
pub enum Dict<K, V> {
    /// Height-balanced (AVL) tree.
    Balanced(AvlTree<K, V>),
    /// Probabilistic skip list.
    Skip(SkipList<K, V>),
}

macro_rules! dispatch {
    ($self:expr, $inner:pat => $action:expr) => {
        match $self {
            Dict::Balanced($inner) => $action,
            Dict::Skip($inner) => $action,
        }
    };
}

impl<K, V> Dict<K, V>
where
    K: Ord,
{
    /// A dictionary backed by an [`AvlTree`] ordered by `K`'s own ordering.
    #[inline]
    pub fn balanced() -> Self {
        Dict::Balanced(AvlTree::new())
    }

    /// A dictionary backed by a [`SkipList`] ordered by `K`'s own ordering,
    /// with at most `max_link` levels (clamped to 32).
    ///
    /// # Errors
    ///
    /// Returns [`LcgError::ZeroMaxLink`] when `max_link` is zero.
    #[inline]
    pub fn skiplist(max_link: usize) -> Result<Self, LcgError> {
        Ok(Dict::Skip(SkipList::with_max_link(max_link)?))
    }
}

impl<K, V> Dict<K, V> {
    /// A dictionary backed by an [`AvlTree`] with an explicit comparator and
    /// optional drop hook.
    #[inline]
    pub fn balanced_with_hooks(compare: Comparator<K>, drop_hook: Option<DropHook<K, V>>) -> Self {
        Dict::Balanced(AvlTree::with_hooks(compare, drop_hook))
    }

    /// A dictionary backed by a [`SkipList`] with an explicit comparator,
    /// optional drop hook, and level cap.
    ///
    /// # Errors
    ///
    /// Returns [`LcgError::ZeroMaxLink`] when `max_link` is zero.
    #[inline]
    pub fn skiplist_with_hooks(
        compare: Comparator<K>,
        drop_hook: Option<DropHook<K, V>>,
        max_link: usize,
    ) -> Result<Self, LcgError> {
        Ok(Dict::Skip(SkipList::with_hooks(compare, drop_hook, max_link)?))
    }

    /// See [`AvlTree::insert`] / [`SkipList::insert`].
    #[inline]
    pub fn insert(&mut self, key: K, value: V, overwrite: bool) -> InsertOutcome {
        dispatch!(self, d => d.insert(key, value, overwrite))
    }

    /// See [`AvlTree::probe`] / [`SkipList::probe`].
    #[inline]
    pub fn probe(&mut self, key: K, value: V) -> (ProbeOutcome, &mut V) {
        dispatch!(self, d => d.probe(key, value))
    }

    /// See [`AvlTree::get`] / [`SkipList::get`].
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        dispatch!(self, d => d.get(key))
    }

    /// See [`AvlTree::get_mut`] / [`SkipList::get_mut`].
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        dispatch!(self, d => d.get_mut(key))
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        dispatch!(self, d => d.contains_key(key))
    }

    /// See [`AvlTree::remove`] / [`SkipList::remove`].
    #[inline]
    pub fn remove(&mut self, key: &K) -> bool {
        dispatch!(self, d => d.remove(key))
    }

    /// See [`AvlTree::clear`] / [`SkipList::clear`].
    #[inline]
    pub fn clear(&mut self) -> usize {
        dispatch!(self, d => d.clear())
    }

    /// Remove every pair and consume the dictionary, returning how many
    /// pairs were removed.
    #[inline]
    pub fn free(self) -> usize {
        dispatch!(self, d => d.free())
    }

    /// The number of stored pairs.
    #[inline]
    pub fn len(&self) -> usize {
        dispatch!(self, d => d.len())
    }

    /// Returns `true` if no pairs are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        dispatch!(self, d => d.is_empty())
    }

    /// The smallest key, if any.
    #[inline]
    pub fn min_key(&self) -> Option<&K> {
        dispatch!(self, d => d.min_key())
    }

    /// The largest key, if any.
    #[inline]
    pub fn max_key(&self) -> Option<&K> {
        dispatch!(self, d => d.max_key())
    }

    /// See [`AvlTree::traverse`] / [`SkipList::traverse`].
    #[inline]
    pub fn traverse<F>(&self, visit: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        dispatch!(self, d => d.traverse(visit))
    }

    /// A bidirectional cursor over the dictionary, positioned on the first
    /// pair.
    pub fn cursor(&mut self) -> DictCursor<'_, K, V> {
        match self {
            Dict::Balanced(tree) => DictCursor::Balanced(tree.cursor()),
            Dict::Skip(list) => DictCursor::Skip(list.cursor()),
        }
    }
}

// ////////////////////////////////////////////////////////////////////////////
// DictCursor
// ////////////////////////////////////////////////////////////////////////////

/// A bidirectional cursor over a [`Dict`], dispatching to the wrapped
/// container's cursor.
pub enum DictCursor<'a, K, V> {
    /// Cursor over the tree variant.
    Balanced(avl::Cursor<'a, K, V>),
    /// Cursor over the skip list variant.
    Skip(skiplist::Cursor<'a, K, V>),
}

macro_rules! dispatch_cursor {
    ($self:expr, $inner:pat => $action:expr) => {
        match $self {
            DictCursor::Balanced($inner) => $action,
            DictCursor::Skip($inner) => $action,
        }
    };
}

impl<K, V> DictCursor<'_, K, V> {
    /// Returns `true` while the cursor is positioned on a pair.
    #[inline]
    pub fn is_valid(&self) -> bool {
        dispatch_cursor!(self, c => c.is_valid())
    }

    /// Detach the cursor from its current position.
    #[inline]
    pub fn invalidate(&mut self) {
        dispatch_cursor!(self, c => c.invalidate())
    }

    /// Position on the smallest key.  Returns the cursor validity.
    #[inline]
    pub fn first(&mut self) -> bool {
        dispatch_cursor!(self, c => c.first())
    }

    /// Position on the largest key.  Returns the cursor validity.
    #[inline]
    pub fn last(&mut self) -> bool {
        dispatch_cursor!(self, c => c.last())
    }

    /// Advance to the next key, or to the first when invalid.
    #[inline]
    pub fn next(&mut self) -> bool {
        dispatch_cursor!(self, c => c.next())
    }

    /// Step back to the previous key, or to the last when invalid.
    #[inline]
    pub fn prev(&mut self) -> bool {
        dispatch_cursor!(self, c => c.prev())
    }

    /// Take `count` forward steps; `false` when the walk fell off the end.
    #[inline]
    pub fn nextn(&mut self, count: usize) -> bool {
        dispatch_cursor!(self, c => c.nextn(count))
    }

    /// Take `count` backward steps; `false` when the walk fell off the
    /// start.
    #[inline]
    pub fn prevn(&mut self, count: usize) -> bool {
        dispatch_cursor!(self, c => c.prevn(count))
    }

    /// Position on an exact key match; invalidates the cursor otherwise.
    #[inline]
    pub fn seek(&mut self, key: &K) -> bool {
        dispatch_cursor!(self, c => c.seek(key))
    }

    /// The key under the cursor, or `None` when invalid.
    #[inline]
    pub fn key(&self) -> Option<&K> {
        dispatch_cursor!(self, c => c.key())
    }

    /// The value under the cursor, or `None` when invalid.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        dispatch_cursor!(self, c => c.value())
    }

    /// Mutable access to the value under the cursor, or `None` when invalid.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut V> {
        dispatch_cursor!(self, c => c.value_mut())
    }

    /// Replace the value under the cursor without involving the drop hook.
    /// Returns the old value, or the offered value back when invalid.
    #[inline]
    pub fn set_value(&mut self, value: V) -> Result<V, V> {
        dispatch_cursor!(self, c => c.set_value(value))
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::{Dict, DropHook, InsertOutcome, ProbeOutcome};

    /// Every observable behavior must be identical across the two backends.
    fn exercise(mut dict: Dict<i32, i32>) {
        assert!(dict.is_empty());
        assert_eq!(dict.min_key(), None);
        assert_eq!(dict.max_key(), None);
        assert!(!dict.remove(&1));

        for k in [5, 3, 8, 1, 4, 7, 9] {
            assert_eq!(dict.insert(k, k * 10, false), InsertOutcome::Inserted);
        }
        assert_eq!(dict.len(), 7);
        assert_eq!(dict.insert(5, 0, false), InsertOutcome::AlreadyPresent);
        assert_eq!(dict.get(&5), Some(&50));
        assert_eq!(dict.insert(5, 55, true), InsertOutcome::Replaced);
        assert_eq!(dict.get(&5), Some(&55));

        let (outcome, slot) = dict.probe(6, 60);
        assert_eq!(outcome, ProbeOutcome::Inserted);
        assert_eq!(*slot, 60);
        let (outcome, slot) = dict.probe(6, 999);
        assert_eq!(outcome, ProbeOutcome::Existed);
        assert_eq!(*slot, 60);

        assert_eq!(dict.min_key(), Some(&1));
        assert_eq!(dict.max_key(), Some(&9));
        assert!(dict.contains_key(&4));
        *dict.get_mut(&4).unwrap() = 44;
        assert_eq!(dict.get(&4), Some(&44));

        let mut visited = Vec::new();
        let count = dict.traverse(|&k, _| {
            visited.push(k);
            true
        });
        assert_eq!(count, 8);
        assert_eq!(visited, vec![1, 3, 4, 5, 6, 7, 8, 9]);
        // 1, 3, 4 pass the predicate; the walk stops on 5 and counts it.
        assert_eq!(dict.traverse(|&k, _| k < 5), 4);

        let mut cursor = dict.cursor();
        assert_eq!(cursor.key(), Some(&1));
        assert!(cursor.nextn(3));
        assert_eq!(cursor.key(), Some(&5));
        assert!(cursor.prev());
        assert_eq!(cursor.key(), Some(&4));
        assert!(cursor.last());
        assert_eq!(cursor.key(), Some(&9));
        assert!(!cursor.next());
        assert!(cursor.seek(&7));
        assert_eq!(cursor.set_value(77), Ok(70));
        cursor.invalidate();
        assert!(!cursor.is_valid());
        assert!(cursor.first());
        drop(cursor);
        assert_eq!(dict.get(&7), Some(&77));

        assert!(dict.remove(&5));
        assert!(!dict.contains_key(&5));
        assert_eq!(dict.len(), 7);

        assert_eq!(dict.clear(), 7);
        assert!(dict.is_empty());
        dict.insert(1, 1, false);
        assert_eq!(dict.free(), 1);
    }

    #[test]
    fn balanced_dictionary() {
        exercise(Dict::balanced());
    }

    #[test]
    fn skip_dictionary() {
        exercise(Dict::skiplist(10).unwrap());
    }

    #[test]
    fn hooks_flow_through_either_backend() {
        let makers: [fn(DropHook<u32, u32>) -> Dict<u32, u32>; 2] = [
            |hook| Dict::balanced_with_hooks(Box::new(|a: &u32, b| a.cmp(b)), Some(hook)),
            |hook| Dict::skiplist_with_hooks(Box::new(|a: &u32, b| a.cmp(b)), Some(hook), 8).unwrap(),
        ];
        for make in makers {
            let departed: Rc<RefCell<Vec<u32>>> = Rc::default();
            let sink = Rc::clone(&departed);
            let mut dict = make(Box::new(move |k, _| sink.borrow_mut().push(k)));
            for k in 0..10 {
                dict.insert(k, k, false);
            }
            dict.remove(&3);
            dict.insert(4, 40, true);
            assert_eq!(departed.borrow().as_slice(), &[3, 4]);
            drop(dict);
            // The nine pairs still stored depart when the dictionary does.
            assert_eq!(departed.borrow().len(), 11);
        }
    }

    #[test]
    fn zero_max_link_is_rejected() {
        assert!(Dict::<u32, u32>::skiplist(0).is_err());
    }
}
