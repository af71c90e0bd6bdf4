use invaders_core::components::*;
use invaders_core::enums::EntityKind;
use invaders_core::error::EcsError;
use invaders_core::render::TextureId;

use super::entity::{EntityId, EntityPool, PoolCapacities};

/// SoA (Struct of Arrays) ECS World.
/// Each component has one fixed-length store indexed by entity ID. Store
/// lengths equal the pool's total capacity and never change.
#[derive(Debug, Clone, Default)]
pub struct World {
    pool: EntityPool,

    // Component storage, one Vec per component type
    pub transforms: Vec<Transform>,
    pub physics: Vec<Physics>,
    pub colliders: Vec<Collider>,
    pub sprites: Vec<Sprite>,
    pub active: Vec<bool>,
}

impl World {
    pub fn new(capacities: PoolCapacities) -> Result<Self, EcsError> {
        let pool = EntityPool::new(capacities)?;
        let len = pool.capacity();
        Ok(Self {
            pool,
            transforms: vec![Transform::default(); len],
            physics: vec![Physics::default(); len],
            colliders: vec![Collider::default(); len],
            sprites: vec![Sprite::default(); len],
            active: vec![false; len],
        })
    }

    /// Allocate an entity of `kind` and initialize its components.
    pub fn spawn(
        &mut self,
        kind: EntityKind,
        transform: Transform,
        collider: Collider,
        active: bool,
    ) -> Result<EntityId, EcsError> {
        let id = self.pool.create(kind)?;
        let idx = id.index();
        self.transforms[idx] = transform;
        self.physics[idx] = Physics::default();
        self.colliders[idx] = collider;
        self.colliders[idx].sync_to(transform.position);
        self.sprites[idx] = Sprite::default();
        self.active[idx] = active;
        Ok(id)
    }

    pub fn all_ids(&self) -> &[EntityId] {
        self.pool.all_ids()
    }

    pub fn kind_ids(&self, kind: EntityKind) -> &[EntityId] {
        self.pool.kind_ids(kind)
    }

    /// False for inactive IDs and for IDs outside the stores.
    pub fn is_active(&self, id: EntityId) -> bool {
        self.active.get(id.index()).copied().unwrap_or(false)
    }

    /// Out-of-range IDs are ignored.
    pub fn set_active(&mut self, id: EntityId, active: bool) {
        if let Some(flag) = self.active.get_mut(id.index()) {
            *flag = active;
        }
    }

    /// Active IDs of one kind, in ID order.
    pub fn active_ids(&self, kind: EntityKind) -> impl Iterator<Item = EntityId> + '_ {
        self.pool
            .kind_ids(kind)
            .iter()
            .copied()
            .filter(|&id| self.is_active(id))
    }

    pub fn active_count(&self, kind: EntityKind) -> usize {
        self.active_ids(kind).count()
    }

    /// Checked read of an active entity's transform.
    pub fn transform(&self, id: EntityId) -> Result<&Transform, EcsError> {
        if self.is_active(id) {
            Ok(&self.transforms[id.index()])
        } else {
            Err(EcsError::InvalidEntity(id.0))
        }
    }

    /// Recompute the collider of one active entity from its transform.
    pub fn sync_collider(&mut self, id: EntityId) {
        if self.is_active(id) {
            let idx = id.index();
            self.colliders[idx].sync_to(self.transforms[idx].position);
        }
    }

    /// Recompute the colliders of every active entity of `kind`.
    pub fn sync_colliders(&mut self, kind: EntityKind) {
        for i in 0..self.pool.kind_ids(kind).len() {
            let id = self.pool.kind_ids(kind)[i];
            self.sync_collider(id);
        }
    }

    /// Recompute every active collider.
    pub fn sync_all_colliders(&mut self) {
        for kind in EntityKind::ALL {
            self.sync_colliders(kind);
        }
    }

    /// Point every entity of `kind` at `texture` (or clear it).
    pub fn set_kind_sprite(&mut self, kind: EntityKind, texture: Option<TextureId>) {
        for &id in self.pool.kind_ids(kind) {
            self.sprites[id.index()].texture = texture;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invaders_core::types::Rect;

    fn small_world() -> World {
        World::new(PoolCapacities {
            alien: 2,
            tank: 1,
            bullet: 2,
        })
        .unwrap()
    }

    #[test]
    fn stores_are_sized_to_capacity() {
        let world = small_world();
        assert_eq!(world.transforms.len(), 5);
        assert_eq!(world.physics.len(), 5);
        assert_eq!(world.colliders.len(), 5);
        assert_eq!(world.sprites.len(), 5);
        assert_eq!(world.active.len(), 5);
        assert!(world.active.iter().all(|&a| !a));
    }

    #[test]
    fn spawn_derives_collider_from_transform() {
        let mut world = small_world();
        let id = world
            .spawn(EntityKind::Alien, Transform::at(50.0, 40.0), Collider::sized(20, 10), true)
            .unwrap();

        assert!(world.is_active(id));
        assert_eq!(world.colliders[id.index()].rect, Rect::new(40, 35, 20, 10));
        assert_eq!(world.transform(id).unwrap().position.x, 50.0);
    }

    #[test]
    fn inactive_entities_are_absent() {
        let mut world = small_world();
        let bullet = world
            .spawn(EntityKind::Bullet, Transform::default(), Collider::sized(4, 10), false)
            .unwrap();

        assert!(!world.is_active(bullet));
        assert_eq!(world.transform(bullet), Err(EcsError::InvalidEntity(bullet.0)));
        assert!(world.transform(EntityId(99)).is_err());
        assert_eq!(world.active_count(EntityKind::Bullet), 0);

        // Out of range.
        assert!(!world.is_active(EntityId(99)));
        world.set_active(EntityId(99), true);
    }

    #[test]
    fn sync_skips_inactive_entities() {
        let mut world = small_world();
        let id = world
            .spawn(EntityKind::Alien, Transform::at(10.0, 10.0), Collider::sized(4, 4), true)
            .unwrap();
        world.set_active(id, false);
        world.transforms[id.index()].position.x = 500.0;
        world.sync_all_colliders();
        assert_eq!(world.colliders[id.index()].rect, Rect::new(8, 8, 4, 4));

        world.set_active(id, true);
        world.sync_all_colliders();
        assert_eq!(world.colliders[id.index()].rect, Rect::new(498, 8, 4, 4));
    }
}
