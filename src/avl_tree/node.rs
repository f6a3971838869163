use crate::avl_tree::tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub key: T,
    pub height: i32,
    pub balance_factor: i32,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            height: 0,
            balance_factor: 0,
            left: None,
            right: None,
        }
    }

    // height and balance factor are always refreshed together
    pub fn update(&mut self) {
        let left_height = tree::height(&self.left);
        let right_height = tree::height(&self.right);
        self.height = cmp::max(left_height, right_height) + 1;
        self.balance_factor = left_height - right_height;
    }
}
