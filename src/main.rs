//! Headless arena run: an autopilot player circles the arena and shoots
//! at the nearest enemy until it is overrun or the frame limit is hit.
//!
//! Usage: `arena_nav [config.ron]`

use std::process::ExitCode;

use arena_nav::prelude::*;

/// Seconds between shots
const FIRE_INTERVAL: f32 = 0.3;
/// Radius of the circle the player walks
const ORBIT_RADIUS: f32 = 15.0;
/// Angular speed along that circle, radians per second
const ORBIT_SPEED: f32 = 0.4;

/// Autopilot game driving an [`Arena`]
struct ArenaGame {
    arena: Arena,
    ability: ProjectileKind,
    cooldown: f32,
    orbit: f32,
}

impl ArenaGame {
    fn new(arena: Arena) -> Self {
        Self {
            arena,
            ability: ProjectileKind::Potato,
            cooldown: 0.0,
            orbit: 0.0,
        }
    }

    fn shoot(&mut self) {
        let Some(player) = self.arena.player_position() else {
            return;
        };
        let Some(target) = self.arena.nearest_enemy(player) else {
            return;
        };

        if self.arena.fire(self.ability, target - player).is_some() {
            self.ability = self.ability.next();
            self.cooldown = FIRE_INTERVAL;
        }
    }

    fn report_events(&mut self) {
        for event in self.arena.drain_events() {
            match event {
                GameEvent::WaveSpawned { wave, count } => {
                    log::info!("Wave {wave}: {count} enemies incoming");
                }
                GameEvent::PlayerHit {
                    remaining_health, ..
                } => log::warn!("Player hit, {remaining_health} health left"),
                GameEvent::ScoreChanged { score } => log::info!("Score: {score}"),
                other => log::trace!("{other:?}"),
            }
        }
    }
}

impl Game for ArenaGame {
    fn init(&mut self, _ctx: &mut EngineContext) {
        let map = self.arena.map();
        log::info!(
            "Arena game starting on a {}x{} grid",
            map.width(),
            map.height()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext) {
        let dt = ctx.time.delta_seconds();

        // Walk a circle around the origin
        self.orbit += ORBIT_SPEED * dt;
        let tangent = Vec3::new(-self.orbit.sin(), 0.0, self.orbit.cos());
        self.arena.move_player(tangent * ORBIT_RADIUS * ORBIT_SPEED * dt);

        self.cooldown -= dt;
        if self.cooldown <= 0.0 {
            self.shoot();
        }

        if let Err(e) = self.arena.update(dt) {
            log::error!("Arena update failed: {e}");
            ctx.quit();
            return;
        }

        self.report_events();

        if self.arena.is_player_dead() {
            log::info!("Player overrun at {:.1}s", ctx.time.elapsed_seconds());
            ctx.quit();
        }
    }

    fn shutdown(&mut self, _ctx: &mut EngineContext) {
        let score = self.arena.player().map_or(0, |player| player.score());
        log::info!(
            "Game over: reached wave {}, score {score}",
            self.arena.wave()
        );
    }
}

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match ArenaConfig::load_ron(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => ArenaConfig::default(),
    };

    let arena = match Arena::new(config) {
        Ok(arena) => arena,
        Err(e) => {
            eprintln!("Failed to build arena: {e}");
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::new(
        EngineConfig::default().with_title("Arena"),
        ArenaGame::new(arena),
    );
    engine.run();

    ExitCode::SUCCESS
}
