//! High-level operations.
//!
//! This module contains the implementation of identification as the host
//! drives it: probing single candidates and enumerating candidates below
//! a root directory.

pub mod identify;
pub mod scan;

pub use identify::{CargoIdentifier, IdentifyError, PackageIdentifier};
pub use scan::{find_candidates, identify_all};
