//! World wrapper around hecs

use hecs::Entity;

/// Entity store for arena bodies and their gameplay components
pub struct World {
    inner: hecs::World,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            inner: hecs::World::new(),
        }
    }

    /// Spawn an entity with the given components
    pub fn spawn(&mut self, components: impl hecs::DynamicBundle) -> Entity {
        self.inner.spawn(components)
    }

    /// Despawn an entity
    pub fn despawn(&mut self, entity: Entity) -> Result<(), hecs::NoSuchEntity> {
        self.inner.despawn(entity)
    }

    /// Get a reference to a component
    pub fn get<T: hecs::Component>(
        &self,
        entity: Entity,
    ) -> Result<hecs::Ref<'_, T>, hecs::ComponentError> {
        self.inner.get::<&T>(entity)
    }

    /// Get a mutable reference to a component
    pub fn get_mut<T: hecs::Component>(
        &mut self,
        entity: Entity,
    ) -> Result<hecs::RefMut<'_, T>, hecs::ComponentError> {
        self.inner.get::<&mut T>(entity)
    }

    /// Borrow several components of one entity at once
    ///
    /// Needed when an update reads one component while writing another,
    /// e.g. an enemy moving its own body.
    pub fn query_one_mut<Q: hecs::Query>(
        &mut self,
        entity: Entity,
    ) -> Result<Q::Item<'_>, hecs::QueryOneError> {
        self.inner.query_one_mut::<Q>(entity)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::ecs::{Body, Transform};

    #[test]
    fn test_spawn_and_despawn() {
        let mut world = World::new();
        let body = Body::cuboid(Transform::new(), Vec3::ONE);
        let entity = world.spawn((body,));

        assert_eq!(world.get::<Body>(entity).unwrap().position(), Vec3::ZERO);

        world.despawn(entity).unwrap();
        assert!(world.get::<Body>(entity).is_err());
        assert!(world.despawn(entity).is_err());
    }

    #[test]
    fn test_query_one_mut_borrows_two_components() {
        let mut world = World::new();
        let entity = world.spawn((Body::cuboid(Transform::new(), Vec3::ONE), 3_i32));

        let (body, steps) = world.query_one_mut::<(&mut Body, &i32)>(entity).unwrap();
        body.transform.translate(Vec3::X * *steps as f32);

        assert_eq!(world.get::<Body>(entity).unwrap().position(), Vec3::new(3.0, 0.0, 0.0));
    }
}
