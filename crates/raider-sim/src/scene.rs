//! The scene: sole owner of every entity in a session.
//!
//! Wraps the hecs `World` and stamps each entity with a `Spawned` marker
//! on insertion. Queries hand back owned, seq-ordered entity lists so
//! callers can add and remove entities while walking them.

use hecs::{DynamicBundle, Entity, EntityBuilder, World};

use raider_core::components::{Enemy, Player, Spawned};
use raider_core::enums::{Actor, Faction};
use raider_core::types::Body;

#[derive(Default)]
pub struct Scene {
    world: World,
    next_seq: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity. The returned handle stays valid until `remove`.
    pub fn add(&mut self, actor: Actor, components: impl DynamicBundle) -> Entity {
        let seq = self.next_seq;
        self.next_seq += 1;
        let mut builder = EntityBuilder::new();
        builder.add_bundle(components).add(Spawned { seq, actor });
        self.world.spawn(builder.build())
    }

    /// Remove an entity. Returns false if it was already gone, so callers
    /// can tie one-shot side effects to the removal that actually happened.
    pub fn remove(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity).is_ok()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Drop every entity. Sequence numbers keep counting up.
    pub fn clear(&mut self) {
        self.world.clear();
    }

    /// Every live entity in insertion order. This is the update order.
    pub fn snapshot(&self) -> Vec<(Entity, Actor)> {
        let mut entries: Vec<(u64, Entity, Actor)> = self
            .world
            .query::<&Spawned>()
            .iter()
            .map(|(entity, spawned)| (spawned.seq, entity, spawned.actor))
            .collect();
        entries.sort_unstable_by_key(|(seq, _, _)| *seq);
        entries
            .into_iter()
            .map(|(_, entity, actor)| (entity, actor))
            .collect()
    }

    /// Live entities of one actor type, in insertion order.
    pub fn actors(&self, actor: Actor) -> Vec<Entity> {
        self.snapshot()
            .into_iter()
            .filter(|(_, a)| *a == actor)
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Live entities fighting for `faction`, in insertion order.
    pub fn members(&self, faction: Faction) -> Vec<Entity> {
        let mut entries: Vec<(u64, Entity)> = self
            .world
            .query::<(&Spawned, &Faction)>()
            .iter()
            .filter(|(_, (_, f))| **f == faction)
            .map(|(entity, (spawned, _))| (spawned.seq, entity))
            .collect();
        entries.sort_unstable_by_key(|(seq, _)| *seq);
        entries.into_iter().map(|(_, entity)| entity).collect()
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    /// The player's ship, if one is on the field.
    pub fn player(&self) -> Option<Entity> {
        self.world
            .query::<(&Spawned, &Player)>()
            .iter()
            .min_by_key(|(_, (spawned, _))| spawned.seq)
            .map(|(entity, _)| entity)
    }

    pub fn count(&self, actor: Actor) -> usize {
        self.world
            .query::<&Spawned>()
            .iter()
            .filter(|(_, spawned)| spawned.actor == actor)
            .count()
    }

    pub fn seq(&self, entity: Entity) -> Option<u64> {
        self.world.get::<&Spawned>(entity).ok().map(|s| s.seq)
    }

    /// Copy of an entity's body.
    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<&Body>(entity).ok().map(|b| *b)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
