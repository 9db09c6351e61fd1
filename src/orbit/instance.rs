//! Orbit instance — node registry and layout state for one diagram.
//!
//! Owns its nodes exclusively. Per frame:
//! 1. Base rotation advances unless paused
//! 2. Every node's target angle is derived (ring slot, or live anchor + offset)
//! 3. Angle and scale are smoothed toward their targets
//! 4. Screen position is recomputed from angle, radius and center

use std::sync::Arc;

use crate::content::{ContentLibrary, NodeContent};

use super::config::OrbitConfig;
use super::frame::{
    Connector, ConnectorTone, NodeSprite, OrbitFrame, PanelView, Point,
    CONNECTOR_OPACITY_NORMAL, CONNECTOR_OPACITY_SELECTED, Z_NORMAL, Z_SELECTED,
};
use super::selection::SelectionState;
use super::smoothing::{smooth_angle, smooth_scalar};
use super::solver::ring_angle;

/// Radius used until the first resize.
pub const INITIAL_RADIUS: f64 = 150.0;

/// Animated state of one content node.
#[derive(Debug, Clone)]
pub struct OrbitNode {
    pub(crate) index: usize,
    pub(crate) content: NodeContent,
    pub(crate) current_angle: f64,
    pub(crate) target_angle: f64,
    /// Offset from the selected node's live angle (expanded mode only)
    pub(crate) target_offset: f64,
    pub(crate) scale: f64,
    pub(crate) target_scale: f64,
    pub(crate) position: Point,
}

impl OrbitNode {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    pub fn position(&self) -> Point {
        self.position
    }
}

/// One orbit diagram.
#[derive(Debug, Clone)]
pub struct OrbitInstance {
    container_id: String,
    pub(crate) config: Arc<OrbitConfig>,
    pub(crate) nodes: Vec<OrbitNode>,
    center: Point,
    radius: f64,
    base_rotation: f64,
    pub(crate) state: SelectionState,
}

impl OrbitInstance {
    /// Build an instance over `dataset`. An empty dataset yields no instance.
    pub fn new(
        container_id: impl Into<String>,
        config: Arc<OrbitConfig>,
        dataset: &[NodeContent],
    ) -> Option<Self> {
        let container_id = container_id.into();
        if dataset.is_empty() {
            log::warn!("orbit `{}`: empty dataset, not initializing", container_id);
            return None;
        }

        let count = dataset.len();
        let center = Point::default();
        let scale = config.normal_scale();
        let nodes = dataset
            .iter()
            .enumerate()
            .map(|(index, content)| {
                let angle = ring_angle(0.0, index, count);
                OrbitNode {
                    index,
                    content: content.clone(),
                    current_angle: angle,
                    target_angle: angle,
                    target_offset: 0.0,
                    scale,
                    target_scale: scale,
                    position: center.polar(angle, INITIAL_RADIUS),
                }
            })
            .collect();

        Some(Self {
            container_id,
            config,
            nodes,
            center,
            radius: INITIAL_RADIUS,
            base_rotation: 0.0,
            state: SelectionState::Idle,
        })
    }

    /// Look `key` up in `library`; missing datasets yield no instance.
    pub fn from_library(
        container_id: impl Into<String>,
        config: Arc<OrbitConfig>,
        library: &ContentLibrary,
        key: &str,
    ) -> Option<Self> {
        let container_id = container_id.into();
        match library.get(key) {
            Some(dataset) => Self::new(container_id, config, dataset),
            None => {
                log::debug!("orbit `{}`: no dataset `{}`", container_id, key);
                None
            }
        }
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[OrbitNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&OrbitNode> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn base_rotation(&self) -> f64 {
        self.base_rotation
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Recompute center and radius for a container of `width` × `height`.
    pub fn resize(&mut self, width: f64, height: f64) {
        let w = sanitize_extent(width);
        let h = sanitize_extent(height);
        self.center = Point::new(w * 0.5, h * 0.5);
        self.radius = w.min(h) * self.config.radius_factor();
        self.refresh_positions();
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        if !self.is_paused() {
            self.base_rotation += self.config.rotation_speed();
        }

        let count = self.nodes.len();
        let dampening = self.config.dampening();
        // Anchor is read once, before any node moves this frame
        let anchor = self
            .state
            .selected()
            .and_then(|s| self.nodes.get(s))
            .map(|n| n.current_angle);

        for node in &mut self.nodes {
            node.target_angle = match anchor {
                Some(a) => a + node.target_offset,
                None => ring_angle(self.base_rotation, node.index, count),
            };
            node.current_angle = smooth_angle(node.current_angle, node.target_angle, dampening);
            node.scale = smooth_scalar(node.scale, node.target_scale, dampening);
            node.position = self.center.polar(node.current_angle, self.radius);
        }
    }

    /// Topmost node whose scaled disc contains `p`. The selected node wins.
    pub fn node_at(&self, p: Point) -> Option<usize> {
        let base = self.config.node_radius();
        let hit = |n: &OrbitNode| {
            let r = base * n.scale;
            n.position.distance_squared(p) <= r * r
        };

        if let Some(node) = self.state.selected().and_then(|s| self.nodes.get(s)) {
            if hit(node) {
                return Some(node.index);
            }
        }
        self.nodes.iter().rev().find(|n| hit(*n)).map(|n| n.index)
    }

    /// Snapshot for the render layer.
    pub fn frame(&self) -> OrbitFrame<'_> {
        let selected = self.state.selected();

        let sprites = self
            .nodes
            .iter()
            .map(|n| {
                let is_sel = selected == Some(n.index);
                NodeSprite {
                    index: n.index,
                    position: n.position,
                    scale: n.scale,
                    z_order: if is_sel { Z_SELECTED } else { Z_NORMAL },
                    selected: is_sel,
                    content: &n.content,
                }
            })
            .collect();

        let connectors = self
            .nodes
            .iter()
            .map(|n| {
                let (opacity, tone) = if selected == Some(n.index) {
                    (CONNECTOR_OPACITY_SELECTED, ConnectorTone::Accent)
                } else {
                    (CONNECTOR_OPACITY_NORMAL, ConnectorTone::Secondary)
                };
                Connector {
                    from: self.center,
                    to: n.position,
                    opacity,
                    tone,
                }
            })
            .collect();

        let panel = selected.and_then(|s| self.nodes.get(s)).map(|n| PanelView {
            header: n.content.header(),
            bullets: &n.content.bullets,
            anchor: Point::new(n.position.x + self.config.panel_offset(), n.position.y),
            node_position: n.position,
        });

        OrbitFrame {
            center: self.center,
            radius: self.radius,
            node_radius: self.config.node_radius(),
            sprites,
            connectors,
            panel,
        }
    }

    fn refresh_positions(&mut self) {
        for node in &mut self.nodes {
            node.position = self.center.polar(node.current_angle, self.radius);
        }
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    fn dataset(n: usize) -> Vec<NodeContent> {
        (0..n)
            .map(|i| NodeContent {
                number: (i + 1).to_string(),
                title: format!("Node {}", i + 1),
                subtitle: "Sub".into(),
                bullets: vec![format!("bullet {}", i + 1)],
            })
            .collect()
    }

    fn instance(n: usize) -> OrbitInstance {
        OrbitInstance::new("orbit-test", Arc::new(OrbitConfig::default()), &dataset(n)).unwrap()
    }

    #[test]
    fn initial_ring_layout() {
        let inst = instance(5);
        for (i, n) in inst.nodes().iter().enumerate() {
            assert!((n.current_angle() - i as f64 * TAU / 5.0).abs() < 1e-12);
            assert_eq!(n.current_angle(), n.target_angle());
            assert_eq!(n.scale(), 1.0);
        }
        assert_eq!(inst.radius(), INITIAL_RADIUS);
        assert!(!inst.is_paused());
    }

    #[test]
    fn empty_or_missing_dataset_does_not_initialize() {
        let cfg = Arc::new(OrbitConfig::default());
        assert!(OrbitInstance::new("orbit-x", cfg.clone(), &[]).is_none());
        let lib = ContentLibrary::builtin();
        assert!(OrbitInstance::from_library("orbit-x", cfg.clone(), &lib, "kelp").is_none());
        let algae = OrbitInstance::from_library("orbit-algae", cfg, &lib, "algae").unwrap();
        assert_eq!(algae.len(), 5);
        assert_eq!(algae.container_id(), "orbit-algae");
    }

    #[test]
    fn resize_sets_radius_and_center() {
        let mut inst = instance(5);
        inst.resize(400.0, 300.0);
        assert!((inst.radius() - 105.0).abs() < 1e-9);
        assert_eq!(inst.center(), Point::new(200.0, 150.0));
        let p = inst.node(0).unwrap().position();
        assert!((p.x - 305.0).abs() < 1e-9);
        assert!((p.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn resize_clamps_bad_extents() {
        let mut inst = instance(3);
        inst.resize(f64::NAN, -20.0);
        assert_eq!(inst.radius(), 0.0);
        assert_eq!(inst.center(), Point::default());
    }

    #[test]
    fn hundred_ticks_advance_base_rotation() {
        let mut inst = instance(5);
        for _ in 0..100 {
            inst.update();
        }
        assert!((inst.base_rotation() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn ring_nodes_follow_rotation() {
        let mut inst = instance(5);
        for _ in 0..500 {
            inst.update();
        }
        let base = inst.base_rotation();
        for (i, n) in inst.nodes().iter().enumerate() {
            assert!((n.target_angle() - (base + i as f64 * TAU / 5.0)).abs() < 1e-12);
            // lag behind a steadily moving target settles at speed·(1−d)/d
            let lag = n.target_angle() - n.current_angle();
            assert!((lag - 0.002 * 0.9 / 0.1).abs() < 1e-6, "lag {lag}");
        }
    }

    #[test]
    fn non_selected_targets_track_live_anchor() {
        let mut inst = instance(5);
        inst.select(2);
        inst.update();
        let offset0 = inst.node(0).unwrap().target_offset();

        // Move the anchor out from under the selection
        inst.nodes[2].current_angle += 0.5;
        let anchor = inst.nodes[2].current_angle;
        inst.update();

        let n0 = inst.node(0).unwrap();
        assert!((n0.target_angle() - (anchor + offset0)).abs() < 1e-12);
        assert!((inst.node(2).unwrap().current_angle() - anchor).abs() < 1e-12);
    }

    #[test]
    fn frame_styles_selected_node() {
        let mut inst = instance(5);
        inst.resize(400.0, 300.0);
        inst.select(1);
        inst.update();
        let frame = inst.frame();
        assert_eq!(frame.sprites.len(), 5);
        assert_eq!(frame.sprites[1].z_order, Z_SELECTED);
        assert_eq!(frame.sprites[0].z_order, Z_NORMAL);
        assert_eq!(frame.connectors[1].tone, ConnectorTone::Accent);
        assert_eq!(frame.connectors[1].opacity, 1.0);
        assert_eq!(frame.connectors[3].tone, ConnectorTone::Secondary);
        assert_eq!(frame.connectors[3].opacity, 0.3);
        assert_eq!(frame.connectors[3].from, inst.center());
        assert_eq!(*frame.draw_order().last().unwrap(), 1);

        let panel = frame.panel.unwrap();
        assert_eq!(panel.header, "2. Node 2 Sub");
        assert_eq!(panel.bullets, ["bullet 2".to_string()]);
        let p = inst.node(1).unwrap().position();
        assert_eq!(panel.anchor, Point::new(p.x + 60.0, p.y));
    }

    #[test]
    fn idle_frame_has_no_panel() {
        let inst = instance(5);
        let frame = inst.frame();
        assert!(frame.panel.is_none());
        assert!(frame.sprites.iter().all(|s| !s.selected));
    }

    #[test]
    fn panel_hides_after_clear() {
        let mut inst = instance(5);
        inst.select(3);
        inst.update();
        assert!(inst.frame().panel.is_some());
        inst.clear();
        inst.update();
        let frame = inst.frame();
        assert!(frame.panel.is_none());
        assert!(frame.sprites.iter().all(|s| !s.selected && s.z_order == Z_NORMAL));
        assert!(frame.connectors.iter().all(|c| c.tone == ConnectorTone::Secondary));
    }

    #[test]
    fn hit_test_uses_scaled_radius() {
        let mut inst = instance(5);
        inst.resize(800.0, 800.0);
        let p0 = inst.node(0).unwrap().position();
        assert_eq!(inst.node_at(p0), Some(0));
        assert_eq!(inst.node_at(Point::new(p0.x + 44.0, p0.y)), Some(0));
        assert_eq!(inst.node_at(Point::new(p0.x + 46.0, p0.y)), None);
        assert_eq!(inst.node_at(inst.center()), None);
    }
}
