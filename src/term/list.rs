use std::fmt;
use std::rc::Rc;

use super::Term;

/// The library's sequence of types.
///
/// A list is an immutable window over shared storage, so taking a suffix (`drop`, the
/// result of `find`) is a single step that shares the elements with the original.
#[derive(Clone)]
pub struct List {
    items: Rc<[Term]>,
    start: usize,
}

impl List {
    pub fn new(items: Vec<Term>) -> Self {
        Self {
            items: items.into(),
            start: 0,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn as_slice(&self) -> &[Term] {
        &self.items[self.start..]
    }

    pub fn len(&self) -> usize {
        self.items.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Term> {
        self.as_slice().get(index)
    }

    pub fn first(&self) -> Option<&Term> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&Term> {
        self.as_slice().last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.as_slice().iter()
    }

    /// The suffix starting at `count`, sharing storage with `self`.
    pub fn skip(&self, count: usize) -> Option<List> {
        (count <= self.len()).then(|| List {
            items: Rc::clone(&self.items),
            start: self.start + count,
        })
    }

    /// Whether `other` is a suffix of `self` that shares its storage.
    pub fn shares_suffix(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.items, &other.items) && other.start >= self.start
    }

    pub fn to_vec(&self) -> Vec<Term> {
        self.as_slice().to_vec()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for List {}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Vec<Term>> for List {
    fn from(items: Vec<Term>) -> Self {
        List::new(items)
    }
}

impl FromIterator<Term> for List {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        List::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
