use crate::avl_tree::tree;
use std::fmt;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one.
///
/// # Examples
///
/// ```
/// use avl_collections::avl_tree::AvlSet;
///
/// let mut set = AvlSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(&3));
///
/// assert_eq!(set.min(), Some(&0));
/// assert_eq!(set.max(), Some(&3));
///
/// assert_eq!(set.remove(&0), Some(0));
/// assert_eq!(set.remove(&1), None);
/// ```
pub struct AvlSet<T> {
    tree: tree::Tree<T>,
    len: usize,
}

/// A node of an `AvlSet<T>` as seen by a diagnostic traversal.
#[derive(Debug, PartialEq, Serialize)]
pub struct Visit<'a, T>
where
    T: 'a,
{
    pub key: &'a T,
    pub height: i32,
    pub balance_factor: i32,
}

impl<'a, T> fmt::Display for Visit<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (H: {}, FB: {})", self.key, self.height, self.balance_factor)
    }
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlSet<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let set: AvlSet<u32> = AvlSet::new();
    /// ```
    pub fn new() -> Self {
        AvlSet { tree: None, len: 0 }
    }

    /// Inserts a key into the set. Returns `false` and leaves the set untouched if the key is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        let inserted = tree::insert(&mut self.tree, key).is_some();
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Removes a key from the set. If the key exists in the set, it will return the removed
    /// key. Otherwise it will return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert_eq!(set.remove(&1), Some(1));
    /// assert_eq!(set.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T> {
        let ret = tree::remove(&mut self.tree, key);
        if ret.is_some() {
            self.len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.tree, key)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the height of the tree backing the set. A single key has height `0` and an
    /// empty set has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// assert_eq!(set.height(), -1);
    /// for key in 0..7 {
    ///     set.insert(key);
    /// }
    /// assert_eq!(set.height(), 2);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("releasing {} nodes", self.len);
        self.tree = None;
        self.len = 0;
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Returns every key of the set in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::AvlSet;
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(3);
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.keys(), vec![&1, &2, &3]);
    /// ```
    pub fn keys(&self) -> Vec<&T> {
        let mut ret = Vec::with_capacity(self.len);
        tree::inorder(&self.tree, &mut |node| ret.push(&node.key));
        ret
    }

    /// Walks the tree in pre-order (node, left subtree, right subtree) and records the key,
    /// height and balance factor of every node.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl_collections::avl_tree::{AvlSet, Visit};
    ///
    /// let mut set = AvlSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// assert_eq!(
    ///     set.traverse(),
    ///     vec![
    ///         Visit { key: &1, height: 1, balance_factor: -1 },
    ///         Visit { key: &2, height: 0, balance_factor: 0 },
    ///     ],
    /// );
    /// ```
    pub fn traverse(&self) -> Vec<Visit<'_, T>> {
        let mut ret = Vec::with_capacity(self.len);
        tree::preorder(&self.tree, &mut |node| {
            ret.push(Visit {
                key: &node.key,
                height: node.height,
                balance_factor: node.balance_factor,
            })
        });
        ret
    }

    #[cfg(test)]
    fn check_consistency(&self) {
        assert_eq!(tree::check_consistency(&self.tree), self.len);
    }
}

impl<T> Default for AvlSet<T>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AvlSet<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

/// Prints the tree in pre-order, one node per line.
impl<T> fmt::Display for AvlSet<T>
where
    T: Ord + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "--- AVL tree (pre-order) ---")?;
        for visit in self.traverse() {
            writeln!(f, "{}", visit)?;
        }
        writeln!(f, "-----------------------------")
    }
}
