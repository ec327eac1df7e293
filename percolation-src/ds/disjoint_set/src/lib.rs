use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("element {index} is out of range for {len} elements")]
    OutOfRange { index: usize, len: usize },
}

/// Weighted quick-union over `0..n`.
///
/// The root of the smaller tree is linked under the root of the larger
/// one, so every tree has height at most `log2(n)`. `find` walks parent
/// pointers without compressing them, which keeps it `&self`.
#[derive(Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        Self { parent: (0..n).collect(), size: vec![1; n], count: n }
    }
    pub fn len(&self) -> usize { self.parent.len() }
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    fn check(&self, p: usize) -> Result<(), Error> {
        if p < self.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange { index: p, len: self.len() })
        }
    }
    fn root(&self, mut p: usize) -> usize {
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    pub fn find(&self, p: usize) -> Result<usize, Error> {
        self.check(p)?;
        Ok(self.root(p))
    }
    /// Merges the classes of `p` and `q`, returning `false` if they were
    /// already the same. On a size tie, `q`'s root goes under `p`'s.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        let p = self.find(p)?;
        let q = self.find(q)?;
        if p == q {
            return Ok(false);
        }

        let (par, child) =
            if self.size[p] < self.size[q] { (q, p) } else { (p, q) };

        self.parent[child] = par;
        self.size[par] += self.size[child];
        self.count -= 1;
        Ok(true)
    }
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, Error> {
        Ok(self.find(p)? == self.find(q)?)
    }
    pub fn count(&self, p: usize) -> Result<usize, Error> {
        Ok(self.size[self.find(p)?])
    }
    pub fn component_count(&self) -> usize { self.count }
    pub fn partition(&self) -> Vec<Vec<usize>> {
        let len = self.len();
        let mut ptn = vec![vec![]; len];
        for i in 0..len {
            ptn[self.root(i)].push(i);
        }
        ptn
    }
}

struct AsSet<'a>(&'a [usize]);
impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Debug for DisjointSet {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_map()
            .entries(
                ptn.iter()
                    .enumerate()
                    .filter(|(_, set)| !set.is_empty())
                    .map(|(i, set)| (i, AsSet(set))),
            )
            .finish()
    }
}

impl fmt::Display for DisjointSet {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ptn = self.partition();
        fmt.debug_set()
            .entries(
                ptn.iter().filter(|set| !set.is_empty()).map(|set| AsSet(set)),
            )
            .finish()
    }
}
