//! Slow reference implementations, for cross-checking only.

#[doc(inline)]
pub use flood_fill;
#[doc(inline)]
pub use quick_find::{self, QuickFind};
