pub mod build_state;
pub mod package_layout;
pub mod request;
pub mod template;

pub use crate::domain::DomainError;
pub use build_state::BuildState;
pub use package_layout::PackageLayout;
pub use request::{PackageRequest, ValidatedRequest};
pub use template::{RenderContext, SkillTemplate};
