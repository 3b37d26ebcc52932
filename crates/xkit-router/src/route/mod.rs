//! Route storage and resolution
//!
//! - `segment`: type inference for concrete path tokens
//! - `key`: structural keys shared by colliding templates
//! - `entry`: a registered template and its value
//! - `store`: insertion-ordered store with typed wildcard resolution

pub mod entry;
pub mod key;
pub mod segment;
pub mod store;

pub use entry::RouteEntry;
pub use key::RouteKey;
pub use segment::{classify, Segment, SegmentKind, SegmentValue};
pub use store::{RouteMatch, RouteStore, StoreSet};
