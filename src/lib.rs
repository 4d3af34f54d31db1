//! Enumeration of distinct nested-circle configurations.
//!
//! Level `n` holds every structurally distinct arrangement of `n`
//! non-intersecting circles. Level `n + 1` is derived from level `n` by
//! inserting one circle at every legal position and discarding candidates
//! whose canonical text was already seen.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
