use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

/// Unordered pair of atom indices, stored with the smaller index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AtomPair {
    pub i: usize,
    pub j: usize,
}

impl AtomPair {
    pub fn new(idx1: usize, idx2: usize) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2 }
        } else {
            Self { i: idx2, j: idx1 }
        }
    }

    #[inline]
    pub fn is_self_pair(&self) -> bool {
        self.i == self.j
    }
}

impl From<(usize, usize)> for AtomPair {
    fn from((a, b): (usize, usize)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for AtomPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// Distance-threshold bonds keyed by [`AtomPair`].
///
/// Iteration is ascending by `(i, j)`, which is also the order in which
/// [`build_bond_list`](crate::build_bond_list) discovers the pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondList {
    bonds: BTreeMap<AtomPair, f64>,
}

impl BondList {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, pair: AtomPair, distance: f64) {
        self.bonds.insert(pair, distance);
    }

    /// Distance recorded for atoms `a` and `b`, in either order.
    pub fn get(&self, a: usize, b: usize) -> Option<f64> {
        self.bonds.get(&AtomPair::new(a, b)).copied()
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.bonds.contains_key(&AtomPair::new(a, b))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.bonds.iter(),
        }
    }

    pub fn pairs(&self) -> impl Iterator<Item = AtomPair> + '_ {
        self.bonds.keys().copied()
    }
}

pub struct Iter<'a> {
    inner: btree_map::Iter<'a, AtomPair, f64>,
}

impl Iterator for Iter<'_> {
    type Item = (AtomPair, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(pair, d)| (*pair, *d))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a BondList {
    type Item = (AtomPair, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
