use crate::avl_tree::node::Node;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

/// The four shapes an unbalanced node can take, named by the path from the node to its
/// taller grandchild.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Imbalance {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl Imbalance {
    fn rotate<T>(self, mut node: Box<Node<T>>) -> Box<Node<T>> {
        trace!("applying {} rotation", self);
        match self {
            Imbalance::LeftLeft => rotate_right(node),
            Imbalance::LeftRight => {
                let child = node
                    .left
                    .take()
                    .expect("Expected left child node to be `Some`.");
                node.left = Some(rotate_left(child));
                rotate_right(node)
            },
            Imbalance::RightRight => rotate_left(node),
            Imbalance::RightLeft => {
                let child = node
                    .right
                    .take()
                    .expect("Expected right child node to be `Some`.");
                node.right = Some(rotate_right(child));
                rotate_left(node)
            },
        }
    }
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Imbalance::LeftLeft => "left-left",
            Imbalance::LeftRight => "left-right",
            Imbalance::RightRight => "right-right",
            Imbalance::RightLeft => "right-left",
        };
        write!(f, "{}", name)
    }
}

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

pub fn balance_factor<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => 0,
        Some(ref node) => node.balance_factor,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = node
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// `child_ordering` is the inserted key compared against the key of the child the insertion
// descended into.
fn insert_imbalance<T>(node: &Node<T>, child_ordering: Ordering) -> Option<Imbalance> {
    match child_ordering {
        Ordering::Less if node.balance_factor > 1 => Some(Imbalance::LeftLeft),
        Ordering::Greater if node.balance_factor > 1 => Some(Imbalance::LeftRight),
        Ordering::Greater if node.balance_factor < -1 => Some(Imbalance::RightRight),
        Ordering::Less if node.balance_factor < -1 => Some(Imbalance::RightLeft),
        _ => None,
    }
}

fn remove_imbalance<T>(node: &Node<T>) -> Option<Imbalance> {
    if node.balance_factor > 1 {
        if balance_factor(&node.left) >= 0 {
            Some(Imbalance::LeftLeft)
        } else {
            Some(Imbalance::LeftRight)
        }
    } else if node.balance_factor < -1 {
        if balance_factor(&node.right) <= 0 {
            Some(Imbalance::RightRight)
        } else {
            Some(Imbalance::RightLeft)
        }
    } else {
        None
    }
}

fn balance<T, F>(tree: &mut Tree<T>, diagnose: F)
where
    F: FnOnce(&Node<T>) -> Option<Imbalance>,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    *tree = Some(match diagnose(&node) {
        Some(imbalance) => imbalance.rotate(node),
        None => node,
    });
}

/// Inserts `key` into `tree` and rebalances on the way back up.
///
/// Returns `None` if `key` was already present. Otherwise returns how `key` compared against
/// the key at the root of `tree` when it was visited, or `Ordering::Equal` if `tree` was empty
/// and `key` became its root.
pub fn insert<T>(tree: &mut Tree<T>, key: T) -> Option<Ordering>
where
    T: Ord,
{
    let (ordering, child_ordering) = match tree {
        Some(ref mut node) => {
            let ordering = key.cmp(&node.key);
            match ordering {
                Ordering::Less => (ordering, insert(&mut node.left, key)?),
                Ordering::Greater => (ordering, insert(&mut node.right, key)?),
                Ordering::Equal => return None,
            }
        },
        None => {
            *tree = Some(Box::new(Node::new(key)));
            return Some(Ordering::Equal);
        },
    };

    balance(tree, |node| insert_imbalance(node, child_ordering));
    Some(ordering)
}

// precondition: `tree` is non-empty
fn take_min<T>(tree: &mut Tree<T>) -> T {
    if let Some(node) = tree.as_mut() {
        if node.left.is_some() {
            let ret = take_min(&mut node.left);
            balance(tree, remove_imbalance);
            return ret;
        }
    }

    let node = tree.take().expect("Expected a non-empty tree.");
    let Node { key, right, .. } = *node;
    *tree = right;
    key
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    let successor = take_min(&mut node.right);
                    let removed = mem::replace(&mut node.key, successor);
                    *tree = Some(node);
                    Some(removed)
                } else {
                    let Node { key, left, right, .. } = *node;
                    *tree = left.or(right);
                    Some(key)
                }
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree, remove_imbalance);
    }
    ret
}

pub fn contains<T>(tree: &Tree<T>, key: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(node) = curr {
        curr = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn preorder<'a, T, F>(tree: &'a Tree<T>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(node) = tree {
        visit(&**node);
        preorder(&node.left, visit);
        preorder(&node.right, visit);
    }
}

pub fn inorder<'a, T, F>(tree: &'a Tree<T>, visit: &mut F)
where
    F: FnMut(&'a Node<T>),
{
    if let Some(node) = tree {
        inorder(&node.left, visit);
        visit(&**node);
        inorder(&node.right, visit);
    }
}

/// Asserts every structural invariant of `tree` and returns the number of nodes in it.
#[cfg(test)]
pub fn check_consistency<T>(tree: &Tree<T>) -> usize
where
    T: Ord,
{
    use std::cmp;

    fn check<'a, T>(tree: &'a Tree<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> (i32, usize)
    where
        T: Ord,
    {
        let node = match tree {
            Some(node) => node,
            None => return (-1, 0),
        };

        if let Some(lower) = lower {
            assert!(*lower < node.key);
        }
        if let Some(upper) = upper {
            assert!(node.key < *upper);
        }

        let (left_height, left_len) = check(&node.left, lower, Some(&node.key));
        let (right_height, right_len) = check(&node.right, Some(&node.key), upper);

        assert_eq!(node.height, cmp::max(left_height, right_height) + 1);
        assert_eq!(node.balance_factor, left_height - right_height);
        assert!(node.balance_factor.abs() <= 1);

        (node.height, left_len + right_len + 1)
    }

    check(tree, None, None).1
}
