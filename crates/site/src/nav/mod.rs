//! Site navigation: the entry list and its header rendering.

mod render;
mod types;

pub use render::{NavVariant, render_nav, render_variant};
pub use types::{DropdownType, NavDropdown, NavEntry, NavLink, Navigation, SiteConfig};
