//! Shared test utilities for taxsearch integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Every helper builds its collaborators in memory unless
//! it says otherwise, so harnesses stay independent of the working directory.

pub mod assertions;
pub mod builders;
pub mod fakes;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fakes::*;
pub use fixtures::*;
