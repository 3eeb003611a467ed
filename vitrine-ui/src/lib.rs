//! vitrine-ui - Shared UI components for the vitrine storefront
//!
//! Contains the storefront icon set and the orientation resolver used by
//! the rotatable icons. Components are pure views: props in, renderable
//! element out, no shared state and no side effects.

pub mod components;
pub mod orientation;

pub use components::*;
pub use orientation::*;
