//! UI layer: components, theme, the root view, and the runtime loop.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
