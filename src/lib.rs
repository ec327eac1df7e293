//! Percolation on square grids, backed by a weighted disjoint set.
//!
//! ```
//! use percolation::ds::Percolation;
//!
//! let mut perc = Percolation::new(3).unwrap();
//! perc.open(1, 2).unwrap();
//! perc.open(2, 2).unwrap();
//! assert!(!perc.percolates());
//! perc.open(3, 2).unwrap();
//! assert!(perc.percolates());
//! assert_eq!(perc.is_full(3, 2), Ok(true));
//! ```

#[doc(inline)]
pub use ds;
#[doc(inline)]
pub use naive;
