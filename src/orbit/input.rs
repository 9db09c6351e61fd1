//! Pointer tracking → `OrbitEvent`.
//!
//! Hosts that only see raw pointer samples (immediate-mode UIs, canvases)
//! feed them through a `PointerTracker`, which turns them into the same
//! enter / click / leave events a DOM would deliver:
//! - entering a node's disc → `NodeEnter` (once per entry)
//! - leaving the container → `PointerLeave` (once)
//! - click → `NodeClick` or `BackgroundClick` by hit-test

use super::frame::Point;
use super::instance::OrbitInstance;
use super::selection::OrbitEvent;

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Node currently under the pointer
    hovered: Option<usize>,
    /// Whether the pointer was inside the container on the last sample
    inside: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Feed one pointer sample in container coordinates; `None` means the
    /// pointer is outside the container.
    pub fn pointer_moved(
        &mut self,
        instance: &OrbitInstance,
        pos: Option<Point>,
    ) -> Option<OrbitEvent> {
        let Some(p) = pos else {
            let was_inside = std::mem::replace(&mut self.inside, false);
            self.hovered = None;
            return was_inside.then_some(OrbitEvent::PointerLeave);
        };

        self.inside = true;
        let hit = instance.node_at(p);
        let previous = std::mem::replace(&mut self.hovered, hit);
        match hit {
            Some(i) if previous != Some(i) => Some(OrbitEvent::NodeEnter(i)),
            _ => None,
        }
    }

    /// Classify a click at `pos`.
    pub fn clicked(&self, instance: &OrbitInstance, pos: Point) -> OrbitEvent {
        match instance.node_at(pos) {
            Some(i) => OrbitEvent::NodeClick(i),
            None => OrbitEvent::BackgroundClick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLibrary;
    use crate::orbit::config::OrbitConfig;
    use std::sync::Arc;

    fn orbit() -> OrbitInstance {
        let mut inst = OrbitInstance::from_library(
            "orbit-plant",
            Arc::new(OrbitConfig::default()),
            &ContentLibrary::builtin(),
            "plant",
        )
        .unwrap();
        inst.resize(800.0, 800.0);
        inst
    }

    #[test]
    fn enter_fires_once_per_node() {
        let inst = orbit();
        let mut t = PointerTracker::new();
        let p1 = inst.node(1).unwrap().position();

        assert_eq!(t.pointer_moved(&inst, Some(inst.center())), None);
        assert_eq!(
            t.pointer_moved(&inst, Some(p1)),
            Some(OrbitEvent::NodeEnter(1))
        );
        let nudged = Point::new(p1.x + 2.0, p1.y);
        assert_eq!(t.pointer_moved(&inst, Some(nudged)), None);
        assert_eq!(t.hovered(), Some(1));

        // off the node and back on again
        t.pointer_moved(&inst, Some(inst.center()));
        assert_eq!(
            t.pointer_moved(&inst, Some(p1)),
            Some(OrbitEvent::NodeEnter(1))
        );
    }

    #[test]
    fn leave_fires_once() {
        let inst = orbit();
        let mut t = PointerTracker::new();
        assert_eq!(t.pointer_moved(&inst, None), None);
        t.pointer_moved(&inst, Some(inst.center()));
        assert_eq!(t.pointer_moved(&inst, None), Some(OrbitEvent::PointerLeave));
        assert_eq!(t.pointer_moved(&inst, None), None);
        assert!(!t.is_inside());
    }

    #[test]
    fn click_classification() {
        let inst = orbit();
        let t = PointerTracker::new();
        let p3 = inst.node(3).unwrap().position();
        assert_eq!(t.clicked(&inst, p3), OrbitEvent::NodeClick(3));
        assert_eq!(t.clicked(&inst, inst.center()), OrbitEvent::BackgroundClick);
    }

    #[test]
    fn tracker_drives_selection() {
        let mut inst = orbit();
        let mut t = PointerTracker::new();
        let p0 = inst.node(0).unwrap().position();
        if let Some(ev) = t.pointer_moved(&inst, Some(p0)) {
            inst.handle_event(ev);
        }
        assert_eq!(inst.selected(), Some(0));
        if let Some(ev) = t.pointer_moved(&inst, None) {
            inst.handle_event(ev);
        }
        assert_eq!(inst.selected(), None);
    }
}
