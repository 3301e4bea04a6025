// Copyright 2025 the Sylva Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node data storage.

use alloc::collections::LinkedList;
use alloc::collections::linked_list;
use alloc::vec::Vec;
use core::slice;

/// Backing container used for a node's data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataPolicy {
    /// Contiguous, order-preserving vector.
    #[default]
    Array,
    /// Doubly-linked list; cheap removal from the ends, no reallocation.
    Linked,
}

/// Data elements held by one node, stored per a [`DataPolicy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataList<D> {
    /// Vector storage.
    Array(Vec<D>),
    /// Linked-list storage.
    Linked(LinkedList<D>),
}

impl<D> Default for DataList<D> {
    fn default() -> Self {
        Self::Array(Vec::new())
    }
}

impl<D> DataList<D> {
    /// An empty list with the given backing.
    pub fn new(policy: DataPolicy) -> Self {
        match policy {
            DataPolicy::Array => Self::Array(Vec::new()),
            DataPolicy::Linked => Self::Linked(LinkedList::new()),
        }
    }

    /// A list with the given backing, seeded from `items`.
    pub fn from_items(policy: DataPolicy, items: impl IntoIterator<Item = D>) -> Self {
        match policy {
            DataPolicy::Array => Self::Array(items.into_iter().collect()),
            DataPolicy::Linked => Self::Linked(items.into_iter().collect()),
        }
    }

    /// The backing in use.
    pub fn policy(&self) -> DataPolicy {
        match self {
            Self::Array(_) => DataPolicy::Array,
            Self::Linked(_) => DataPolicy::Linked,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Array(v) => v.len(),
            Self::Linked(l) => l.len(),
        }
    }

    /// Whether the list holds no element.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an element.
    pub fn push(&mut self, item: D) {
        match self {
            Self::Array(v) => v.push(item),
            Self::Linked(l) => l.push_back(item),
        }
    }

    /// Element at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&D> {
        match self {
            Self::Array(v) => v.get(index),
            Self::Linked(l) => l.iter().nth(index),
        }
    }

    /// Remove the first element equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &D) -> bool
    where
        D: PartialEq,
    {
        self.remove_first(|d| d == item).is_some()
    }

    /// Remove and return the first element matching `pred`.
    pub fn remove_first(&mut self, mut pred: impl FnMut(&D) -> bool) -> Option<D> {
        match self {
            Self::Array(v) => {
                let i = v.iter().position(&mut pred)?;
                Some(v.remove(i))
            }
            Self::Linked(l) => {
                let i = l.iter().position(&mut pred)?;
                let mut tail = l.split_off(i);
                let found = tail.pop_front();
                l.append(&mut tail);
                found
            }
        }
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        match self {
            Self::Array(v) => v.clear(),
            Self::Linked(l) => l.clear(),
        }
    }

    /// Iterate the elements in insertion order.
    pub fn iter(&self) -> Iter<'_, D> {
        match self {
            Self::Array(v) => Iter::Array(v.iter()),
            Self::Linked(l) => Iter::Linked(l.iter()),
        }
    }
}

impl<D> Extend<D> for DataList<D> {
    fn extend<T: IntoIterator<Item = D>>(&mut self, iter: T) {
        match self {
            Self::Array(v) => v.extend(iter),
            Self::Linked(l) => l.extend(iter),
        }
    }
}

impl<D> IntoIterator for DataList<D> {
    type Item = D;
    type IntoIter = IntoIter<D>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Array(v) => IntoIter::Array(v.into_iter()),
            Self::Linked(l) => IntoIter::Linked(l.into_iter()),
        }
    }
}

impl<'a, D> IntoIterator for &'a DataList<D> {
    type Item = &'a D;
    type IntoIter = Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`DataList`].
#[derive(Debug)]
pub enum Iter<'a, D> {
    /// Over vector storage.
    Array(slice::Iter<'a, D>),
    /// Over linked-list storage.
    Linked(linked_list::Iter<'a, D>),
}

impl<'a, D> Iterator for Iter<'a, D> {
    type Item = &'a D;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Array(it) => it.next(),
            Self::Linked(it) => it.next(),
        }
    }
}

/// Owning iterator over a [`DataList`].
#[derive(Debug)]
pub enum IntoIter<D> {
    /// Over vector storage.
    Array(alloc::vec::IntoIter<D>),
    /// Over linked-list storage.
    Linked(linked_list::IntoIter<D>),
}

impl<D> Iterator for IntoIter<D> {
    type Item = D;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Array(it) => it.next(),
            Self::Linked(it) => it.next(),
        }
    }
}
