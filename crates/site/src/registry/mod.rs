/// Default registry construction.
pub mod defaults;
/// Node kinds and heading levels.
pub mod kind;
/// Component and registry types.
pub mod types;

pub use defaults::MDX_COMPONENTS;
pub use kind::{HeadingLevel, NodeKind};
pub use types::{Component, ComponentRegistry, RegistryConfig};
