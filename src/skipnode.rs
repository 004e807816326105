use std::ptr::NonNull;

/// A possibly-absent edge between skip nodes.
pub(crate) type Link<K, V> = Option<NonNull<SkipNode<K, V>>>;

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// SkipNodes make up the SkipList.  The list owns the sentinel head node,
/// which carries no item and one forward slot per possible level; every other
/// node carries an item and a *tower* of forward links whose length is the
/// node's height.  `links[k]` points at the next node that reaches level `k`.
///
/// Each node also records its immediate level-0 predecessor so the list can
/// be walked backwards; for the first node this is the head itself.
pub(crate) struct SkipNode<K, V> {
    // The item is None only for the head node.
    pub(crate) item: Option<(K, V)>,
    // Level-0 predecessor; None for the head.
    pub(crate) prev: Link<K, V>,
    // Forward links; the vector length is the tower height.
    pub(crate) links: Vec<Link<K, V>>,
}

impl<K, V> SkipNode<K, V> {
    /// Create a new head node with `max_link` empty forward slots.
    pub(crate) fn head(max_link: usize) -> Self {
        SkipNode {
            item: None,
            prev: None,
            links: vec![None; max_link],
        }
    }

    /// Create a new item node with a tower of `link_count` empty slots.  The
    /// links and `prev` have to be adjusted when the node is spliced in.
    pub(crate) fn new(key: K, value: V, link_count: usize) -> Self {
        SkipNode {
            item: Some((key, value)),
            prev: None,
            links: vec![None; link_count],
        }
    }

    /// Move the node onto the heap and return its address.
    pub(crate) fn into_raw(self) -> NonNull<SkipNode<K, V>> {
        NonNull::from(Box::leak(Box::new(self)))
    }

    /// Reclaim a node previously produced by [`SkipNode::into_raw`].
    ///
    /// The pointer must not be used again afterwards.
    pub(crate) unsafe fn from_raw(ptr: NonNull<SkipNode<K, V>>) -> SkipNode<K, V> {
        *Box::from_raw(ptr.as_ptr())
    }

    /// The tower height.
    #[inline]
    pub(crate) fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` for the sentinel head.
    #[inline]
    pub(crate) fn is_head(&self) -> bool {
        self.item.is_none()
    }

    /// Consumes the node, returning the item it contains.
    #[inline]
    pub(crate) fn into_item(self) -> Option<(K, V)> {
        self.item
    }

    #[inline]
    pub(crate) fn key_ref(&self) -> Option<&K> {
        self.item.as_ref().map(|item| &item.0)
    }

    #[inline]
    pub(crate) fn value_ref(&self) -> Option<&V> {
        self.item.as_ref().map(|item| &item.1)
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        self.item.as_mut().map(|item| &mut item.1)
    }

    #[inline]
    pub(crate) fn item_ref(&self) -> Option<(&K, &V)> {
        self.item.as_ref().map(|item| (&item.0, &item.1))
    }

    #[inline]
    pub(crate) fn item_mut(&mut self) -> Option<(&K, &mut V)> {
        self.item.as_mut().map(|item| (&item.0, &mut item.1))
    }
}
