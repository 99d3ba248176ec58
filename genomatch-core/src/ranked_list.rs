//! Incrementally sorted result list.
//!
//! [`RankedList`] keeps its elements ordered by a comparator supplied at
//! insertion time, highest priority at the front. It is a doubly linked list
//! stored in an index arena: slot 0 is the front sentinel and slot 1 the back
//! sentinel, so every real element always has a predecessor and a successor.
//!
//! Elements can only be added or cleared all at once, which fits a list that
//! accumulates the results of a single scan.

use std::cmp::Ordering;

const HEAD: usize = 0;
const TAIL: usize = 1;

#[derive(Debug, Clone)]
struct Link<T> {
    element: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> Link<T> {
    const fn sentinel() -> Self {
        Self {
            element: None,
            prev: HEAD,
            next: TAIL,
        }
    }
}

/// A list kept sorted by a caller-supplied ordering.
///
/// An element `a` ranks ahead of `b` when `order(a, b)` is
/// [`Ordering::Less`]. Elements that compare equal keep their insertion order.
///
/// # Examples
///
/// ```rust
/// use genomatch_core::ranked_list::RankedList;
///
/// let mut list = RankedList::new();
/// for word in ["ccc", "a", "bb"] {
///     list.insert_by(word, |a: &&str, b: &&str| b.len().cmp(&a.len()));
/// }
///
/// assert_eq!(list.peek_best(), Some(&"ccc"));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["ccc", "bb", "a"]);
/// ```
#[derive(Debug, Clone)]
pub struct RankedList<T> {
    links: Vec<Link<T>>,
    len: usize,
}

impl<T> Default for RankedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RankedList<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            links: vec![Link::sentinel(), Link::sentinel()],
            len: 0,
        }
    }

    /// Insert `item` before the first element it ranks ahead of.
    ///
    /// Walks from the front until `order(&item, existing)` returns
    /// [`Ordering::Less`]; if no such element exists the item is appended.
    pub fn insert_by<F>(&mut self, item: T, mut order: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut cursor = self.links[HEAD].next;
        while cursor != TAIL {
            let ranks_ahead = self.links[cursor]
                .element
                .as_ref()
                .is_some_and(|existing| order(&item, existing) == Ordering::Less);
            if ranks_ahead {
                break;
            }
            cursor = self.links[cursor].next;
        }
        self.link_before(cursor, item);
    }

    fn link_before(&mut self, successor: usize, item: T) {
        let predecessor = self.links[successor].prev;
        let index = self.links.len();
        self.links.push(Link {
            element: Some(item),
            prev: predecessor,
            next: successor,
        });
        self.links[predecessor].next = index;
        self.links[successor].prev = index;
        self.len += 1;
    }

    /// Remove every element
    pub fn clear(&mut self) {
        self.links.truncate(2);
        self.links[HEAD] = Link::sentinel();
        self.links[TAIL] = Link::sentinel();
        self.len = 0;
    }

    /// Highest ranked element, or `None` when the list is empty
    pub fn peek_best(&self) -> Option<&T> {
        self.links[self.links[HEAD].next].element.as_ref()
    }

    /// Apply `visitor` to every element from front to back
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visitor);
    }

    /// Iterate from the highest ranked element to the lowest
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            links: &self.links,
            cursor: self.links[HEAD].next,
            remaining: self.len,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Front-to-back iterator over a [`RankedList`], created by
/// [`RankedList::iter`]
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    links: &'a [Link<T>],
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == TAIL {
            return None;
        }
        let link = &self.links[self.cursor];
        self.cursor = link.next;
        self.remaining = self.remaining.saturating_sub(1);
        link.element.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RankedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
