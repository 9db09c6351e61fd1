//! Render-sink data: what the drawing layer receives each frame.
//!
//! Nothing in here draws. An `OrbitFrame` is a borrowed snapshot of one
//! instance after its tick; the host paints it however it likes.

use crate::content::NodeContent;

/// Screen-space point in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` on a circle of `radius` around `self`.
    #[inline]
    pub fn polar(self, angle: f64, radius: f64) -> Self {
        Self {
            x: self.x + angle.cos() * radius,
            y: self.y + angle.sin() * radius,
        }
    }

    #[inline]
    pub fn distance_squared(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// z-order hint for the selected node.
pub const Z_SELECTED: u32 = 100;
/// z-order hint for every other node.
pub const Z_NORMAL: u32 = 10;

/// Connector opacity for the selected node.
pub const CONNECTOR_OPACITY_SELECTED: f32 = 1.0;
/// Connector opacity for the rest.
pub const CONNECTOR_OPACITY_NORMAL: f32 = 0.3;

/// Colour role of a connector; the host maps it onto its palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorTone {
    /// Selected node (pink in the site theme)
    Accent,
    /// Everything else (purple)
    Secondary,
}

/// Line from the orbit center to one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: Point,
    pub to: Point,
    pub opacity: f32,
    pub tone: ConnectorTone,
}

/// One node as the render layer sees it.
#[derive(Debug, Clone, Copy)]
pub struct NodeSprite<'a> {
    pub index: usize,
    pub position: Point,
    pub scale: f64,
    pub z_order: u32,
    pub selected: bool,
    pub content: &'a NodeContent,
}

/// Detail panel for the current selection.
#[derive(Debug, Clone)]
pub struct PanelView<'a> {
    pub header: String,
    pub bullets: &'a [String],
    /// Suggested top-left: to the right of the node. Flipping at the
    /// viewport edge is up to the host.
    pub anchor: Point,
    /// Center of the selected node, for hosts that flip the panel.
    pub node_position: Point,
}

/// Everything needed to draw one orbit for one frame.
#[derive(Debug, Clone)]
pub struct OrbitFrame<'a> {
    pub center: Point,
    pub radius: f64,
    /// Unscaled node radius in pixels.
    pub node_radius: f64,
    pub sprites: Vec<NodeSprite<'a>>,
    pub connectors: Vec<Connector>,
    pub panel: Option<PanelView<'a>>,
}

impl OrbitFrame<'_> {
    /// Sprite indices back to front (stable within the same z-order).
    pub fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.sprites.len()).collect();
        order.sort_by_key(|&i| self.sprites[i].z_order);
        order
    }
}
