//! Region lookup and styling capability exposed by band widgets.
//!
//! Anything that renders a button region and a text region can implement
//! [`RegionLocator`]; style logic only needs to find a region and set its
//! background, never how or where the region is drawn.

use ratatui::layout::Rect;
use tintband_types::{Background, RegionKind};

/// A located region whose background can be overridden.
pub trait RegionStyle {
    fn set_background(&mut self, background: Background);
    fn background(&self) -> &Background;
}

/// Finds the style-able regions inside a host's rendered subtree.
pub trait RegionLocator {
    /// Returns `None` when the host has not been rendered/attached yet.
    fn locate_region(&mut self, kind: RegionKind) -> Option<&mut dyn RegionStyle>;
}

/// One rendered region of a band: its screen area and background override.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionSurface {
    pub area: Rect,
    background: Background,
    /// Bumped whenever the background actually changes.
    revision: u64,
}

impl RegionSurface {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            background: Background::Unset,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl RegionStyle for RegionSurface {
    fn set_background(&mut self, background: Background) {
        if self.background != background {
            self.background = background;
            self.revision = self.revision.wrapping_add(1);
        }
    }

    fn background(&self) -> &Background {
        &self.background
    }
}

/// Both regions of an attached band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandRegions {
    pub text: RegionSurface,
    pub button: RegionSurface,
}

impl BandRegions {
    pub fn new(text: Rect, button: Rect) -> Self {
        Self {
            text: RegionSurface::new(text),
            button: RegionSurface::new(button),
        }
    }

    pub fn get(&self, kind: RegionKind) -> &RegionSurface {
        match kind {
            RegionKind::Button => &self.button,
            RegionKind::Text => &self.text,
        }
    }

    pub fn get_mut(&mut self, kind: RegionKind) -> &mut RegionSurface {
        match kind {
            RegionKind::Button => &mut self.button,
            RegionKind::Text => &mut self.text,
        }
    }

    pub fn revision(&self) -> u64 {
        self.text.revision().wrapping_add(self.button.revision())
    }
}
