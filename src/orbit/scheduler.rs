//! Frame scheduler — one loop for every orbit on the page.
//!
//! The embedding app owns the scheduler and calls `tick()` once per display
//! frame. Instances are ticked in registration order; there is no
//! unregister path since orbits live for the whole session. Resize requests
//! that arrive between frames are coalesced and applied at the start of the
//! next tick.

use std::sync::Arc;

use crate::content::ContentLibrary;

use super::config::OrbitConfig;
use super::instance::OrbitInstance;

/// Handle returned by `register`. Stable for the scheduler's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(usize);

impl InstanceId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct FrameScheduler {
    config: Arc<OrbitConfig>,
    instances: Vec<OrbitInstance>,
    /// Last requested (width, height) per instance, applied on the next tick
    pending_resize: Vec<Option<(f64, f64)>>,
    running: bool,
    frames: u64,
}

impl FrameScheduler {
    pub fn new(config: Arc<OrbitConfig>) -> Self {
        Self {
            config,
            instances: Vec::new(),
            pending_resize: Vec::new(),
            running: false,
            frames: 0,
        }
    }

    /// Scheduler pre-seeded with `instances`, in the given order.
    pub fn with_instances(
        config: Arc<OrbitConfig>,
        instances: impl IntoIterator<Item = OrbitInstance>,
    ) -> Self {
        let mut scheduler = Self::new(config);
        for inst in instances {
            scheduler.register(inst);
        }
        scheduler
    }

    pub fn config(&self) -> &Arc<OrbitConfig> {
        &self.config
    }

    /// Append an instance. The loop starts on the first registration.
    ///
    /// One instance per container: if `instance`'s container is already
    /// registered, `instance` is dropped and the existing handle returned.
    pub fn register(&mut self, instance: OrbitInstance) -> InstanceId {
        if let Some(existing) = self.find(instance.container_id()) {
            log::debug!("orbit `{}` already registered", instance.container_id());
            return existing;
        }
        let id = InstanceId(self.instances.len());
        log::info!(
            "orbit `{}` registered ({} nodes)",
            instance.container_id(),
            instance.len()
        );
        self.instances.push(instance);
        self.pending_resize.push(None);
        if !self.running {
            self.running = true;
            log::info!("orbit frame loop started");
        }
        id
    }

    /// Create and register the orbit for `container_id` from `library[key]`.
    ///
    /// One instance per container: a second call returns the existing handle.
    /// A missing dataset registers nothing.
    pub fn mount(
        &mut self,
        container_id: &str,
        library: &ContentLibrary,
        key: &str,
    ) -> Option<InstanceId> {
        if let Some(existing) = self.find(container_id) {
            log::debug!("orbit `{}` already mounted", container_id);
            return Some(existing);
        }
        let instance =
            OrbitInstance::from_library(container_id, Arc::clone(&self.config), library, key)?;
        Some(self.register(instance))
    }

    pub fn find(&self, container_id: &str) -> Option<InstanceId> {
        self.instances
            .iter()
            .position(|i| i.container_id() == container_id)
            .map(InstanceId)
    }

    pub fn get(&self, id: InstanceId) -> Option<&OrbitInstance> {
        self.instances.get(id.0)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut OrbitInstance> {
        self.instances.get_mut(id.0)
    }

    pub fn instances(&self) -> &[OrbitInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames ticked since the loop started.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Queue a container resize for the next tick. Later calls win.
    pub fn request_resize(&mut self, id: InstanceId, width: f64, height: f64) {
        if let Some(slot) = self.pending_resize.get_mut(id.0) {
            *slot = Some((width, height));
        }
    }

    /// Advance every registered instance by one frame.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        for (inst, pending) in self.instances.iter_mut().zip(self.pending_resize.iter_mut()) {
            if let Some((w, h)) = pending.take() {
                inst.resize(w, h);
            }
            inst.update();
        }
        self.frames += 1;
    }
}
