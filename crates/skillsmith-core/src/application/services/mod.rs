//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "build a skill package" or "check a package".

pub mod scaffold_service;

pub use scaffold_service::{BuildOptions, BuildReport, ScaffoldService};
