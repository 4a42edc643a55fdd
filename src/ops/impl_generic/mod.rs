//! Generic sequential implementations shared by every system.
//!
//! The host system is built entirely from these functions, and the parallel
//! CPU system falls back to them for inputs that fit in a single chunk. Both
//! systems therefore agree element for element.
//!
//! ```text
//! impl_generic/compact.rs
//!     └── compact_in_place() / compact_copy()
//!             │
//!             ├── host/remove.rs delegates here
//!             └── cpu kernels delegate here per chunk
//! ```

pub mod compact;
pub mod count;

pub use compact::{compact_copy, compact_in_place, retained_count, validate_stencil};
pub use count::count_matching;
