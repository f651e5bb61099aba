use glam::{Quat, Vec3};
use std::collections::HashMap;

/// Stable identifier for an entity owned by the session's arena. The core
/// holds handles opaquely; whatever renders the scene maps them to visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    BodySegment,
    Food,
}

#[derive(Debug, Clone, Copy)]
pub struct EntityRecord {
    pub kind: EntityKind,
    pub position: Vec3,
    pub rotation: Quat,
}

/// Flat registry of live entities keyed by handle. Replaces scene-graph
/// ownership and find-by-tag lookups: the spawner and collision checks
/// query it explicitly instead.
#[derive(Debug, Default)]
pub struct EntityArena {
    entities: HashMap<EntityHandle, EntityRecord>,
    next_id: u32,
}

impl EntityArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, kind: EntityKind, position: Vec3, rotation: Quat) -> EntityHandle {
        let handle = EntityHandle(self.next_id);
        self.next_id += 1;
        self.entities.insert(
            handle,
            EntityRecord {
                kind,
                position,
                rotation,
            },
        );
        handle
    }

    pub fn destroy(&mut self, handle: EntityHandle) -> bool {
        self.entities.remove(&handle).is_some()
    }

    pub fn get(&self, handle: EntityHandle) -> Option<&EntityRecord> {
        self.entities.get(&handle)
    }

    pub fn set_pose(&mut self, handle: EntityHandle, position: Vec3, rotation: Quat) {
        if let Some(record) = self.entities.get_mut(&handle) {
            record.position = position;
            record.rotation = rotation;
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn positions_of_kind(&self, kind: EntityKind) -> impl Iterator<Item = Vec3> + '_ {
        self.entities
            .values()
            .filter(move |record| record.kind == kind)
            .map(|record| record.position)
    }
}
