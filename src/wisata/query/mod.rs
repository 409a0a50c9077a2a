//! # Query Engine
//!
//! Read-side algorithms over a store scan. Everything here takes records by
//! value (usually straight from [`crate::store::AttractionStore::scan`]) and
//! returns a new `Vec`; nothing here can reach the store, so nothing here can
//! mutate it.
//!
//! - [`filter`]: exact-match filtering on one axis, and the two-axis
//!   conjunctive combinator.
//! - [`rank`]: top-N by rating and nearest-K by distance.
//! - [`distance`]: the distance metrics nearest-K can use.
//! - [`projection`]: the public shape query results are returned in.
//!
//! Every operation is a full pass over its input. Ordering ties always fall
//! back to input order, so results are deterministic for a given scan.

pub mod distance;
pub mod filter;
pub mod projection;
pub mod rank;

pub use distance::DistanceMetric;
pub use filter::{AxisFilter, ConjunctiveFilter, MatchMode, Selection};
pub use projection::AttractionView;
pub use rank::{nearest, nearest_scored, top_rated};
