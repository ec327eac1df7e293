//! Site percolation on an `n`×`n` grid.
//!
//! Sites are addressed by 1-indexed `(row, col)`. Site `(i, j)` is element
//! `n * (i - 1) + j` of a [`DisjointSet`] of `n * n + 2` elements, whose
//! first and last elements stand for the whole top and bottom rows. The
//! grid percolates iff these two are connected.
//!
//! A site is reported full iff it is connected to the top element. Since
//! both sentinels share one structure, once the grid percolates every
//! open site connected to the bottom row counts as full as well.

use std::{fmt, mem::size_of};

use disjoint_set::DisjointSet;
use log::{debug, log_enabled, trace, Level};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid side length {side}")]
    InvalidArgument { side: usize },
    #[error("site ({row}, {col}) is outside the {side}x{side} grid")]
    OutOfRange { row: usize, col: usize, side: usize },
    /// Not produced once the coordinates have been validated.
    #[error(transparent)]
    Element(#[from] disjoint_set::Error),
}

#[derive(Clone)]
pub struct Percolation {
    side: usize,
    opened: Vec<bool>,
    open_count: usize,
    uf: DisjointSet,
    top: usize,
    bottom: usize,
}

impl Percolation {
    pub fn new(side: usize) -> Result<Self, Error> {
        let area = side
            .checked_mul(side)
            .filter(|&area| area > 0)
            .filter(|&area| {
                area.checked_add(2)
                    .and_then(|len| len.checked_mul(size_of::<usize>()))
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(Error::InvalidArgument { side })?;
        Ok(Self {
            side,
            opened: vec![false; area],
            open_count: 0,
            uf: DisjointSet::new(area + 2),
            top: 0,
            bottom: area + 1,
        })
    }
    pub fn side_len(&self) -> usize { self.side }
    pub fn open_count(&self) -> usize { self.open_count }

    fn contains(&self, i: usize, j: usize) -> bool {
        (1..=self.side).contains(&i) && (1..=self.side).contains(&j)
    }
    fn site(&self, i: usize, j: usize) -> Result<usize, Error> {
        if !self.contains(i, j) {
            return Err(Error::OutOfRange { row: i, col: j, side: self.side });
        }
        Ok(self.side * (i - 1) + j)
    }

    /// Opens `(i, j)` and connects it to its open neighbors. Opening an
    /// already open site changes nothing.
    pub fn open(&mut self, i: usize, j: usize) -> Result<(), Error> {
        let site = self.site(i, j)?;
        let watch = log_enabled!(Level::Debug) && !self.percolates();
        trace!("open ({i}, {j})");

        if !self.opened[site - 1] {
            self.opened[site - 1] = true;
            self.open_count += 1;
        }
        if i == 1 {
            self.uf.union(site, self.top)?;
        }
        if i == self.side {
            self.uf.union(site, self.bottom)?;
        }
        for (ni, nj) in [(i, j - 1), (i, j + 1), (i - 1, j), (i + 1, j)] {
            if self.contains(ni, nj) {
                let adj = self.site(ni, nj)?;
                if self.opened[adj - 1] {
                    self.uf.union(site, adj)?;
                }
            }
        }

        if watch && self.percolates() {
            debug!(
                "percolates at ({i}, {j}) with {}/{} sites open",
                self.open_count,
                self.opened.len(),
            );
        }
        Ok(())
    }
    pub fn is_open(&self, i: usize, j: usize) -> Result<bool, Error> {
        Ok(self.opened[self.site(i, j)? - 1])
    }
    pub fn is_full(&self, i: usize, j: usize) -> Result<bool, Error> {
        let site = self.site(i, j)?;
        Ok(self.uf.connected(self.top, site)?)
    }
    pub fn percolates(&self) -> bool {
        matches!(self.uf.connected(self.top, self.bottom), Ok(true))
    }
}

/// `#` for closed, `.` for open, `~` for full sites, one row per line.
impl fmt::Display for Percolation {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 1..=self.side {
            for j in 1..=self.side {
                let c = match (self.is_open(i, j), self.is_full(i, j)) {
                    (_, Ok(true)) => '~',
                    (Ok(true), _) => '.',
                    _ => '#',
                };
                write!(fmt, "{c}")?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}
