//! Theme styling for the band widget and color picker.
//!
//! A single Dracula palette supplies semantic roles; helper builders turn
//! those roles and region background overrides into Ratatui styles.

pub mod dracula;
pub mod roles;
pub mod theme_helpers;

pub use dracula::DraculaTheme;
pub use roles::{Theme, ThemeRoles};
