use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::timer::OneShotTimer;
use crate::engine::physics::{BodyHandle, BodySpec, PhysicsWorld};

/// Identifies a scheduled object across the spawner, its controller and its visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

struct PendingSpawn {
    object: ObjectId,
    spec: BodySpec,
    timer: OneShotTimer,
}

/// Defers physics body creation for scene objects until their delay elapses.
#[derive(Default)]
pub struct TimedSpawner {
    pending: Vec<PendingSpawn>,
    spawned: Vec<(ObjectId, BodyHandle)>,
    index: HashMap<ObjectId, BodyHandle>,
}

impl TimedSpawner {
    /// Schedule `object` to get a body `delay` seconds after `now`.
    /// Returns false if the object is already scheduled or spawned.
    pub fn schedule(&mut self, object: ObjectId, delay: f64, spec: BodySpec, now: f64) -> bool {
        if self.is_known(object) {
            warn!("Ignoring duplicate spawn request for {:?}", object);
            return false;
        }

        self.pending.push(PendingSpawn {
            object,
            spec,
            timer: OneShotTimer::armed(now, delay),
        });
        debug!("Scheduled {:?} to spawn in {:.2}s", object, delay);
        true
    }

    /// Create bodies for every spawn whose time has come, earliest first.
    pub fn fire_due(&mut self, now: f64, physics: &mut PhysicsWorld) -> Vec<(ObjectId, BodyHandle)> {
        let mut due: Vec<(f64, usize)> = self
            .pending
            .iter()
            .enumerate()
            .filter_map(|(i, pending)| {
                pending
                    .timer
                    .fire_at()
                    .filter(|fire_at| now >= *fire_at)
                    .map(|fire_at| (fire_at, i))
            })
            .collect();

        if due.is_empty() {
            return Vec::new();
        }
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut fired = Vec::with_capacity(due.len());
        for (_, i) in &due {
            let pending = &mut self.pending[*i];
            if !pending.timer.poll(now) {
                continue;
            }
            let handle = physics.add_body(&pending.spec);
            info!(
                "Spawned body for {:?} at {:?} (t = {:.2}s)",
                pending.object, pending.spec.position, now
            );
            fired.push((pending.object, handle));
        }

        self.pending.retain(|pending| pending.timer.is_armed());
        for (object, handle) in &fired {
            self.spawned.push((*object, *handle));
            self.index.insert(*object, *handle);
        }

        fired
    }

    /// Drop every pending spawn. Already spawned bodies are unaffected.
    pub fn cancel_all(&mut self) {
        for pending in &mut self.pending {
            pending.timer.disarm();
        }
        self.pending.clear();
    }

    pub fn body_of(&self, object: ObjectId) -> Option<BodyHandle> {
        self.index.get(&object).copied()
    }

    /// Spawned objects in spawn order.
    pub fn spawned(&self) -> &[(ObjectId, BodyHandle)] {
        &self.spawned
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn is_known(&self, object: ObjectId) -> bool {
        self.index.contains_key(&object) || self.pending.iter().any(|p| p.object == object)
    }
}
