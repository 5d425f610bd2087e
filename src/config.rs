//! Configuration for the layout pass.
//!
//! All distances are in canvas units handed to the render adapter.

use crate::syntax::types::Direction;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal center every level is balanced around.
    pub center_x: f64,
    /// Distance between neighbours within a level.
    pub h_spacing: f64,
    /// Coordinate of level 0 along the flow axis.
    pub base_offset: f64,
    /// Distance between consecutive levels.
    pub v_spacing: f64,
    /// Override the diagram direction. None = use the header's direction.
    pub direction_override: Option<Direction>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center_x: 400.0,
            h_spacing: 200.0,
            base_offset: 50.0,
            v_spacing: 120.0,
            direction_override: None,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
