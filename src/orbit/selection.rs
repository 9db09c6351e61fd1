//! Selection / panel controller.
//!
//! Two states:
//! - `Idle`: no selection, ring mode, base rotation advancing
//! - `Selected(i)`: paused, expanded mode, detail panel shows node `i`
//!
//! `select` fires on node hover-enter or click, `clear` on background click
//! or when the pointer leaves the diagram.

use super::instance::OrbitInstance;
use super::solver::expanded_offsets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(usize),
}

impl SelectionState {
    pub fn selected(self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Selected(i) => Some(i),
        }
    }

    /// Base rotation is frozen while a node is selected.
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Selected(_))
    }
}

/// Input the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbitEvent {
    NodeEnter(usize),
    NodeClick(usize),
    BackgroundClick,
    PointerLeave,
    Resize { width: f64, height: f64 },
}

impl OrbitInstance {
    /// Enter (or stay in) `Selected(index)` and recompute expanded targets.
    pub fn select(&mut self, index: usize) {
        let count = self.nodes.len();
        if index >= count {
            log::warn!(
                "orbit `{}`: ignoring selection of node {} (have {})",
                self.container_id(),
                index,
                count
            );
            return;
        }

        if self.state != SelectionState::Selected(index) {
            log::debug!("orbit `{}`: select node {}", self.container_id(), index);
        }
        self.state = SelectionState::Selected(index);

        let offsets = expanded_offsets(count, index, self.config.reserved_arc());
        let hover = self.config.hover_scale();
        let normal = self.config.normal_scale();
        for (node, offset) in self.nodes.iter_mut().zip(offsets) {
            node.target_offset = offset;
            node.target_scale = if node.index == index { hover } else { normal };
        }
    }

    /// Back to `Idle`; scales relax to normal and rotation resumes next tick.
    pub fn clear(&mut self) {
        if self.state != SelectionState::Idle {
            log::debug!("orbit `{}`: clear selection", self.container_id());
        }
        self.state = SelectionState::Idle;
        let normal = self.config.normal_scale();
        // Offsets stay as they are; ring mode never reads them
        for node in &mut self.nodes {
            node.target_scale = normal;
        }
    }

    pub fn handle_event(&mut self, event: OrbitEvent) {
        match event {
            OrbitEvent::NodeEnter(i) | OrbitEvent::NodeClick(i) => self.select(i),
            OrbitEvent::BackgroundClick | OrbitEvent::PointerLeave => self.clear(),
            OrbitEvent::Resize { width, height } => self.resize(width, height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLibrary;
    use crate::orbit::config::OrbitConfig;
    use std::sync::Arc;

    fn algae() -> OrbitInstance {
        OrbitInstance::from_library(
            "orbit-algae",
            Arc::new(OrbitConfig::default()),
            &ContentLibrary::builtin(),
            "algae",
        )
        .unwrap()
    }

    #[test]
    fn select_middle_node_of_five() {
        let mut inst = algae();
        inst.select(2);
        assert_eq!(inst.state(), SelectionState::Selected(2));
        assert!(inst.is_paused());

        let off: Vec<f64> = inst.nodes().iter().map(|n| n.target_offset()).collect();
        assert_eq!(off[2], 0.0);
        assert!((off[1] + off[3]).abs() < 1e-9);
        assert!((off[0] + off[4]).abs() < 1e-9);
        assert!(off[1].abs() < off[0].abs());

        assert_eq!(inst.node(2).unwrap().target_scale(), 1.4);
        for i in [0, 1, 3, 4] {
            assert_eq!(inst.node(i).unwrap().target_scale(), 1.0);
        }

        for _ in 0..300 {
            inst.update();
        }
        assert!((inst.node(2).unwrap().scale() - 1.4).abs() < 1e-6);
    }

    #[test]
    fn paused_while_selected() {
        let mut inst = algae();
        inst.update();
        let base = inst.base_rotation();
        inst.select(0);
        for _ in 0..10 {
            inst.update();
        }
        assert_eq!(inst.base_rotation(), base);
    }

    #[test]
    fn clear_restores_scale_and_rotation() {
        let mut inst = algae();
        inst.select(2);
        for _ in 0..20 {
            inst.update();
        }
        inst.clear();
        assert_eq!(inst.state(), SelectionState::Idle);
        assert!(inst.nodes().iter().all(|n| n.target_scale() == 1.0));

        let before = inst.base_rotation();
        inst.update();
        assert!((inst.base_rotation() - before - 0.002).abs() < 1e-12);
    }

    #[test]
    fn reselect_same_node_is_idempotent() {
        let mut inst = algae();
        inst.select(3);
        inst.update();
        let snapshot: Vec<(f64, f64)> = inst
            .nodes()
            .iter()
            .map(|n| (n.target_offset(), n.target_scale()))
            .collect();
        inst.select(3);
        let again: Vec<(f64, f64)> = inst
            .nodes()
            .iter()
            .map(|n| (n.target_offset(), n.target_scale()))
            .collect();
        assert_eq!(snapshot, again);
        assert_eq!(inst.state(), SelectionState::Selected(3));
    }

    #[test]
    fn switching_selection_moves_hover_scale() {
        let mut inst = algae();
        inst.select(1);
        inst.select(4);
        assert_eq!(inst.node(1).unwrap().target_scale(), 1.0);
        assert_eq!(inst.node(4).unwrap().target_scale(), 1.4);
        assert_eq!(inst.node(4).unwrap().target_offset(), 0.0);
    }

    #[test]
    fn out_of_range_selection_ignored() {
        let mut inst = algae();
        inst.select(9);
        assert_eq!(inst.state(), SelectionState::Idle);
    }

    #[test]
    fn events_drive_state_machine() {
        let mut inst = algae();
        inst.handle_event(OrbitEvent::NodeEnter(1));
        assert_eq!(inst.selected(), Some(1));
        inst.handle_event(OrbitEvent::NodeClick(2));
        assert_eq!(inst.selected(), Some(2));
        inst.handle_event(OrbitEvent::PointerLeave);
        assert_eq!(inst.selected(), None);
        inst.handle_event(OrbitEvent::NodeClick(0));
        inst.handle_event(OrbitEvent::BackgroundClick);
        assert_eq!(inst.selected(), None);
        inst.handle_event(OrbitEvent::Resize {
            width: 400.0,
            height: 300.0,
        });
        assert!((inst.radius() - 105.0).abs() < 1e-9);
    }

    #[test]
    fn single_node_selection_is_safe() {
        let lib = ContentLibrary::from_json(
            r#"{ "solo": [ { "number": "1", "title": "Only", "subtitle": "One" } ] }"#,
        )
        .unwrap();
        let mut inst =
            OrbitInstance::from_library("orbit-solo", Arc::new(OrbitConfig::default()), &lib, "solo")
                .unwrap();
        inst.select(0);
        inst.update();
        let n = inst.node(0).unwrap();
        assert_eq!(n.target_offset(), 0.0);
        assert!(n.current_angle().is_finite());
        assert_eq!(n.target_scale(), 1.4);
    }

    #[test]
    fn selected_node_parks_at_current_angle() {
        let mut inst = algae();
        for _ in 0..37 {
            inst.update();
        }
        let parked = inst.node(2).unwrap().current_angle();
        inst.select(2);
        for _ in 0..50 {
            inst.update();
        }
        assert!((inst.node(2).unwrap().current_angle() - parked).abs() < 1e-12);
        let n3 = inst.node(3).unwrap();
        assert!((n3.current_angle() - (parked + n3.target_offset())).abs() < 0.05);
    }
}
