//! Validation source strategies.
//!
//! Only the filesystem strategy (`fs` module) exists today, behind the
//! concrete `validate_tree()` public API. A source trait may be introduced
//! when a second concrete strategy demands it — until then, the design stays
//! concrete to avoid speculative abstraction.

pub mod fs;
