#[doc(inline)]
pub use disjoint_set::{self, DisjointSet};
#[doc(inline)]
pub use percolation_grid::{self, Percolation};
