//! Core domain entities representing the business data model.
//!
//! There is a single resource type, [`Shortlink`]. Creation and partial
//! updates use the separate [`NewShortlink`] and [`ShortlinkPatch`] structs.

pub mod shortlink;

pub use shortlink::{NewShortlink, Shortlink, ShortlinkId, ShortlinkPatch};
