//! Search stage that turns a query into ranked, highlighted results.
//!
//! The result list treats spans as opaque input; this module is the only place
//! that knows how they are computed. Matching uses the Skim V2 fuzzy matcher
//! from `fuzzy-matcher`, and matched character indices are coalesced into
//! contiguous [`HighlightSpan`](crate::domain::HighlightSpan)s.

pub mod matcher;

pub use matcher::{coalesce, search_catalog};
