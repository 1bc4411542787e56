//! Query translation for the item catalog.
//!
//! ## Pipeline
//!
//! ```text
//! raw text
//!    │
//!    ▼
//! tokenizer ──► filters ──► mode ──► predicate ──► Catalog::find
//!                                                       │
//!                                                       ▼
//!                                              report::SearchOutcome
//! ```
//!
//! Every mode funnels into one [`Predicate`] and one catalog call, so
//! ordering and the result cap are enforced in a single place.

pub mod engine;
pub mod filters;
pub mod mode;
pub mod predicate;
pub mod report;
pub mod tokenizer;

pub use engine::{SearchEngine, SearchOptions};
pub use filters::{FilterKey, SearchFilters};
pub use mode::QueryMode;
pub use predicate::{Field, Predicate};
pub use report::{NotableListing, Page, SearchOutcome, truncate_chars};
pub use tokenizer::{Token, tokenize};
