//! The arena: waves of enemies hunting the player across a navigation grid
//!
//! [`Arena::update`] runs one frame in a fixed order:
//!
//! 1. spawn the next wave once every enemy is gone
//! 2. move projectiles and drop the spent ones
//! 3. give enemies whose timer is due a fresh route to the player
//! 4. test enemies against projectiles
//! 5. keep the player in bounds and test it against enemies
//! 6. remove finished enemies, steer and move the rest
//!
//! Enemies and projectiles are kept in spawn order so every frame visits
//! them the same way for the same seed.

use glam::Vec3;
use hecs::Entity;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::enemy::Enemy;
use super::player::Player;
use super::projectile::{Projectile, ProjectileKind};
use crate::ai::{Map, NavError, PathResult};
use crate::core::{ArenaConfig, EventQueue, GameEvent};
use crate::ecs::{Body, Transform, World};
use crate::physics::{Collidable, CollisionError, Obb};

/// Height of body centres above the floor
const BODY_HEIGHT: f32 = 1.0;
/// Distance a magic projectile pushes an enemy back
const KNOCKBACK_DISTANCE: f32 = 2.0;

/// Errors raised while running the arena
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("navigation error: {0}")]
    Nav(#[from] NavError),
    #[error("collision error: {0}")]
    Collision(#[from] CollisionError),
    #[error("{0:?} is not an enemy")]
    NotAnEnemy(Entity),
    #[error("spawn extent must be finite, got {0}")]
    InvalidSpawnExtent(f32),
}

/// Route between the grid nodes closest to two world positions
fn route(map: &mut Map, from: Vec3, to: Vec3) -> Result<PathResult, NavError> {
    match (map.closest_node(from), map.closest_node(to)) {
        (Some(start), Some(goal)) => map.find_path(start, goal),
        _ => Ok(PathResult::default()),
    }
}

/// Simulation state for one game
pub struct Arena {
    config: ArenaConfig,
    map: Map,
    world: World,
    player: Entity,
    enemies: Vec<Entity>,
    projectiles: Vec<Entity>,
    events: EventQueue,
    rng: StdRng,
    wave: u32,
}

impl Arena {
    /// Build the grid and place the player at the origin
    ///
    /// # Errors
    ///
    /// Returns an error if the grid layout is invalid or the spawn extent
    /// is not a finite number
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        if !config.spawn_extent.is_finite() {
            return Err(ArenaError::InvalidSpawnExtent(config.spawn_extent));
        }

        let map = Map::from_config(&config.grid)?;

        let mut world = World::new();
        let body = Body::cuboid(
            Transform::from_position(Vec3::new(0.0, BODY_HEIGHT, 0.0)),
            config.player_size,
        );
        let player = world.spawn((body, Player::new(config.player_health)));

        log::info!(
            "Arena ready: {}x{} grid, seed {}",
            map.width(),
            map.height(),
            config.seed
        );

        Ok(Self {
            rng: StdRng::seed_from_u64(config.seed),
            config,
            map,
            world,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            events: EventQueue::new(),
            wave: 0,
        })
    }

    /// Settings the arena was built with
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Navigation grid shared by all enemies
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Events recorded during the previous frame
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    /// Take the events recorded during the previous frame
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain()
    }

    /// Number of the last wave spawned, 0 before the first
    pub fn wave(&self) -> u32 {
        self.wave
    }

    /// Live enemies in spawn order
    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    /// Number of live enemies, exploding ones included
    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// Number of projectiles in flight
    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    /// Borrow an enemy's state, `None` once it has been removed
    pub fn enemy(&self, entity: Entity) -> Option<hecs::Ref<'_, Enemy>> {
        self.world.get::<Enemy>(entity).ok()
    }

    /// Copy of an entity's body
    pub fn body(&self, entity: Entity) -> Option<Body> {
        self.world.get::<Body>(entity).ok().map(|body| *body)
    }

    /// The player's entity
    pub fn player_entity(&self) -> Entity {
        self.player
    }

    /// Copy of the player's health and score
    pub fn player(&self) -> Option<Player> {
        self.world.get::<Player>(self.player).ok().map(|player| *player)
    }

    /// Current player position
    pub fn player_position(&self) -> Option<Vec3> {
        self.body(self.player).map(|body| body.position())
    }

    /// Whether the player has run out of health
    pub fn is_player_dead(&self) -> bool {
        self.player().is_none_or(|player| player.is_dead())
    }

    /// Position of the closest enemy that can still be hit
    pub fn nearest_enemy(&self, position: Vec3) -> Option<Vec3> {
        self.enemies
            .iter()
            .filter(|&&entity| {
                self.world
                    .get::<Enemy>(entity)
                    .is_ok_and(|enemy| enemy.is_active())
            })
            .filter_map(|&entity| self.body(entity))
            .map(|body| body.position())
            .min_by(|a, b| {
                a.distance_squared(position)
                    .total_cmp(&b.distance_squared(position))
            })
    }

    fn random_spawn(&mut self) -> Vec3 {
        let extent = self.config.spawn_extent.abs();
        let x = self.rng.gen_range(-extent..=extent);
        let z = self.rng.gen_range(-extent..=extent);
        Vec3::new(x, BODY_HEIGHT, z)
    }

    /// Spawn the next wave: wave `n` brings `n` enemies
    ///
    /// # Errors
    ///
    /// Returns an error if an initial route cannot be searched
    pub fn spawn_wave(&mut self) -> Result<u32, ArenaError> {
        self.wave += 1;
        for _ in 0..self.wave {
            let position = self.random_spawn();
            self.spawn_enemy(position)?;
        }

        self.events.push(GameEvent::WaveSpawned {
            wave: self.wave,
            count: self.wave,
        });
        log::info!("Wave {} spawned", self.wave);
        Ok(self.wave)
    }

    /// Spawn one enemy and give it its first route to the player
    ///
    /// # Errors
    ///
    /// Returns an error if the route cannot be searched
    pub fn spawn_enemy(&mut self, position: Vec3) -> Result<Entity, ArenaError> {
        let mut enemy = Enemy::new(self.config.enemy_health, self.config.path_refresh_interval);
        if let Some(target) = self.player_position() {
            enemy.follower.set_path(route(&mut self.map, position, target)?);
        }

        let body = Body::cuboid(Transform::from_position(position), self.config.enemy_size);
        let entity = self.world.spawn((body, enemy));
        self.enemies.push(entity);

        log::debug!("Spawned {entity:?} at {position}");
        Ok(entity)
    }

    /// Replace an enemy's box with one fitted around a model's vertices
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not an enemy or there are fewer
    /// than 3 vertices
    pub fn set_enemy_model(&mut self, entity: Entity, vertices: &[Vec3]) -> Result<(), ArenaError> {
        if !self.enemies.contains(&entity) {
            return Err(ArenaError::NotAnEnemy(entity));
        }

        let bounds = Obb::from_vertices(vertices)?;
        let mut body = self
            .world
            .get_mut::<Body>(entity)
            .map_err(|_| ArenaError::NotAnEnemy(entity))?;
        body.bounds = bounds;
        Ok(())
    }

    /// Fire a projectile from the player's position
    ///
    /// Returns `None` when `direction` is zero.
    pub fn fire(&mut self, kind: ProjectileKind, direction: Vec3) -> Option<Entity> {
        let origin = self.player_position()?;
        let projectile = Projectile::launch(kind, direction, self.config.projectile_speed)?;

        let body = Body::cuboid(Transform::from_position(origin), kind.size());
        let entity = self.world.spawn((body, projectile));
        self.projectiles.push(entity);
        Some(entity)
    }

    /// Move the player; it is pulled back into the play area next frame
    pub fn move_player(&mut self, delta: Vec3) {
        if let Ok(mut body) = self.world.get_mut::<Body>(self.player) {
            body.transform.translate(delta);
        }
    }

    /// Apply a projectile hit to an enemy and return its remaining health
    ///
    /// Magic pushes the enemy along `direction`, flattened onto the floor.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::NotAnEnemy`] if the entity is not an enemy
    pub fn hit_enemy(
        &mut self,
        entity: Entity,
        kind: ProjectileKind,
        direction: Vec3,
    ) -> Result<i32, ArenaError> {
        let (body, enemy) = self
            .world
            .query_one_mut::<(&mut Body, &mut Enemy)>(entity)
            .map_err(|_| ArenaError::NotAnEnemy(entity))?;

        let remaining_health = enemy.hit(kind);
        if kind == ProjectileKind::Magic {
            let push = Vec3::new(direction.x, 0.0, direction.z).normalize_or_zero();
            body.transform.translate(push * KNOCKBACK_DISTANCE);
        }

        log::debug!("{entity:?} hit by {kind:?}, {remaining_health} health left");
        self.events.push(GameEvent::EnemyHit {
            enemy: entity,
            kind,
            remaining_health,
        });
        Ok(remaining_health)
    }

    /// Advance the arena by one frame
    ///
    /// # Errors
    ///
    /// Returns an error if a route search fails
    pub fn update(&mut self, delta: f32) -> Result<(), ArenaError> {
        self.events.swap();

        if self.enemies.is_empty() {
            self.spawn_wave()?;
        }

        self.update_projectiles(delta);
        self.refresh_paths()?;
        self.resolve_projectile_hits()?;
        self.resolve_player_contacts();
        self.update_enemies(delta);
        Ok(())
    }

    fn update_projectiles(&mut self, delta: f32) {
        let lifetime = self.config.projectile_lifetime;
        let area = self.config.play_area;
        let world = &mut self.world;

        self.projectiles.retain(|&entity| {
            let Ok((body, projectile)) =
                world.query_one_mut::<(&mut Body, &mut Projectile)>(entity)
            else {
                return false;
            };

            body.transform.translate(projectile.velocity * delta);
            projectile.age += delta;

            let alive = projectile.age < lifetime && area.contains(body.position());
            if !alive {
                let _ = world.despawn(entity);
            }
            alive
        });
    }

    fn refresh_paths(&mut self) -> Result<(), ArenaError> {
        let Some(target) = self.player_position() else {
            return Ok(());
        };

        for &entity in &self.enemies {
            let Ok((body, enemy)) = self.world.query_one_mut::<(&Body, &mut Enemy)>(entity) else {
                continue;
            };
            if !enemy.timer.is_due() {
                continue;
            }

            let from = body.position();
            let path = route(&mut self.map, from, target)?;
            let nodes = path.len();
            enemy.follower.set_path(path);

            log::trace!("{entity:?} rerouted from {from}: {nodes} nodes");
            self.events.push(GameEvent::PathRefreshed {
                enemy: entity,
                nodes,
                from,
            });
        }

        Ok(())
    }

    fn resolve_projectile_hits(&mut self) -> Result<(), ArenaError> {
        let area = self.config.play_area;

        for i in 0..self.enemies.len() {
            let entity = self.enemies[i];
            let active = self
                .world
                .get::<Enemy>(entity)
                .is_ok_and(|enemy| enemy.is_active());
            let Some(body) = self.body(entity).filter(|_| active) else {
                continue;
            };

            // Strays are put back at a random spawn point
            if !area.contains(body.position()) {
                let spawn = self.random_spawn();
                if let Ok(mut body) = self.world.get_mut::<Body>(entity) {
                    body.transform.position = spawn;
                }
                log::debug!("{entity:?} left the play area, moved to {spawn}");
                continue;
            }

            let mut p = 0;
            while p < self.projectiles.len() {
                let shot = self.projectiles[p];
                let (Some(enemy_body), Some(shot_body), Ok(projectile)) = (
                    self.body(entity),
                    self.body(shot),
                    self.world.get::<Projectile>(shot).map(|projectile| *projectile),
                ) else {
                    p += 1;
                    continue;
                };

                let enemy_shape = Collidable::assemble(&enemy_body);
                if !enemy_shape.collides(&Collidable::assemble(&shot_body)) {
                    p += 1;
                    continue;
                }

                self.projectiles.remove(p);
                let _ = self.world.despawn(shot);
                self.hit_enemy(entity, projectile.kind, projectile.velocity)?;
            }
        }

        Ok(())
    }

    fn resolve_player_contacts(&mut self) {
        let area = self.config.play_area;
        if let Ok(mut body) = self.world.get_mut::<Body>(self.player) {
            body.transform.position = area.clamp(body.position());
        }

        let mut i = 0;
        while i < self.enemies.len() {
            let entity = self.enemies[i];
            let exploding = self
                .world
                .get::<Enemy>(entity)
                .is_ok_and(|enemy| enemy.is_exploding());

            let touching = !exploding
                && match (self.body(self.player), self.body(entity)) {
                    (Some(player), Some(enemy)) => {
                        Collidable::assemble(&player).collides(&Collidable::assemble(&enemy))
                    }
                    _ => false,
                };
            if !touching {
                i += 1;
                continue;
            }

            self.enemies.remove(i);
            let _ = self.world.despawn(entity);

            let Ok(mut player) = self.world.get_mut::<Player>(self.player) else {
                continue;
            };
            let remaining_health = player.take_damage(self.config.contact_damage);

            log::info!("{entity:?} reached the player, {remaining_health} health left");
            self.events.push(GameEvent::PlayerHit {
                enemy: entity,
                remaining_health,
            });
        }
    }

    fn update_enemies(&mut self, delta: f32) {
        let speed = self.config.enemy_speed;
        let chilled_speed = self.config.chilled_speed;

        let mut i = 0;
        while i < self.enemies.len() {
            let entity = self.enemies[i];
            let Ok((body, enemy)) = self.world.query_one_mut::<(&mut Body, &mut Enemy)>(entity)
            else {
                self.enemies.remove(i);
                continue;
            };

            if enemy.is_done() {
                self.enemies.remove(i);
                let _ = self.world.despawn(entity);
                self.award_kill(entity);
                continue;
            }

            enemy.steer(&self.map, body.position());
            enemy.update(delta, &mut body.transform, speed, chilled_speed);
            i += 1;
        }
    }

    fn award_kill(&mut self, enemy: Entity) {
        let Ok(mut player) = self.world.get_mut::<Player>(self.player) else {
            return;
        };
        let score = player.add_score();

        log::info!("{enemy:?} destroyed, score {score}");
        self.events.push(GameEvent::EnemyDestroyed { enemy });
        self.events.push(GameEvent::ScoreChanged { score });
    }
}
