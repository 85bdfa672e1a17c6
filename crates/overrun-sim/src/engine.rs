//! Simulation engine — drives the whole run.
//!
//! `SimulationEngine` owns the hecs ECS world and the modifier registry,
//! applies queued player commands at each tick boundary, steps the systems
//! in a fixed order, and hands back a `FrameSnapshot`. Headless by
//! construction: the only way in is commands and input, the only way out
//! is snapshots.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use overrun_core::commands::PlayerCommand;
use overrun_core::components::{Health, Player, PlayerStats, Weapon};
use overrun_core::constants::{
    FIRE_INTERVAL_FLOOR, RECOIL_FLOOR, RELOAD_SECS_FLOOR, UPGRADE_BULLET_RADIUS_STEP,
    UPGRADE_BULLET_SPEED_STEP, UPGRADE_DAMAGE_STEP, UPGRADE_FIRE_INTERVAL_STEP,
    UPGRADE_MAX_AMMO_STEP, UPGRADE_MAX_HEALTH_STEP, UPGRADE_MOVE_SPEED_STEP,
    UPGRADE_RECOIL_STEP, UPGRADE_RELOAD_STEP, UPGRADE_SCORE_MULT_STEP,
};
use overrun_core::enums::{GamePhase, Modifier, Upgrade};
use overrun_core::events::GameEvent;
use overrun_core::input::InputState;
use overrun_core::modifiers::ModifierRegistry;
use overrun_core::state::FrameSnapshot;
use overrun_core::types::{Bounds, SimTime};

use crate::systems;
use crate::systems::spawner::SpawnTimer;
use crate::world_setup;

/// Startup parameters for a run.
pub struct SimConfig {
    /// Seed for the spawn RNG; equal seeds replay identically.
    pub seed: u64,
    /// Play-area size in pixels.
    pub bounds: Bounds,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            bounds: Bounds::default(),
        }
    }
}

/// Owns the world, the clock, the registry, and the queues for one run.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    bounds: Bounds,
    modifiers: ModifierRegistry,
    rng: ChaCha8Rng,
    next_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    spawn_timer: SpawnTimer,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. The run
    /// starts immediately: the player stands at the play-area center
    /// with base stats and a full magazine.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        world_setup::spawn_player(&mut world, config.bounds);

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            bounds: config.bounds,
            modifiers: ModifierRegistry::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            spawn_timer: SpawnTimer::default(),
        }
    }

    /// Queue a command; it lands at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue a batch of commands at once.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Step the simulation once and report the resulting frame.
    pub fn tick(&mut self, input: &InputState) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems(input);
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.modifiers,
            events,
        )
    }

    /// Current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current simulation clock.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current modifier registry.
    pub fn modifiers(&self) -> &ModifierRegistry {
        &self.modifiers
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at an exact position (for scenario tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        position: overrun_core::types::Position,
        speed: f64,
        health: f64,
    ) -> hecs::Entity {
        world_setup::spawn_enemy_at(&mut self.world, position, speed, health, &mut self.next_id)
    }

    /// Set the player's loaded ammo directly (for tests).
    #[cfg(test)]
    pub fn set_player_ammo(&mut self, ammo: u32) {
        for (_entity, (_player, weapon)) in self.world.query_mut::<(&Player, &mut Weapon)>() {
            weapon.ammo = ammo;
        }
    }

    /// Set the player's current health directly (for tests).
    #[cfg(test)]
    pub fn set_player_health(&mut self, health: f64) {
        for (_entity, (_player, hp)) in self.world.query_mut::<(&Player, &mut Health)>() {
            hp.current = health;
        }
    }

    /// Drain the command queue.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Apply one player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetModifier { modifier, enabled } => {
                self.modifiers.set(modifier, enabled);
            }
            PlayerCommand::IncrementUpgrade { upgrade } => {
                // At the level cap the command is a no-op.
                if self.modifiers.increment(upgrade).is_some() {
                    self.apply_upgrade(upgrade);
                }
            }
            PlayerCommand::ResetGame => {
                self.world.clear();
                self.next_id = 0;
                world_setup::spawn_player(&mut self.world, self.bounds);
                self.modifiers.reset_upgrades();
                self.spawn_timer = SpawnTimer::default();
                self.time = SimTime::default();
                self.phase = GamePhase::Running;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
        }
    }

    /// Apply the stat effect of a just-granted upgrade level to the player.
    fn apply_upgrade(&mut self, upgrade: Upgrade) {
        for (_entity, (_player, stats, weapon, health)) in self
            .world
            .query_mut::<(&Player, &mut PlayerStats, &mut Weapon, &mut Health)>()
        {
            match upgrade {
                Upgrade::BulletDamage => weapon.damage += UPGRADE_DAMAGE_STEP,
                Upgrade::MoveSpeed => stats.move_speed += UPGRADE_MOVE_SPEED_STEP,
                Upgrade::MaxAmmo => {
                    weapon.max_ammo += UPGRADE_MAX_AMMO_STEP;
                    weapon.ammo = (weapon.ammo + UPGRADE_MAX_AMMO_STEP).min(weapon.max_ammo);
                }
                Upgrade::ReloadTime => {
                    weapon.reload_secs =
                        (weapon.reload_secs - UPGRADE_RELOAD_STEP).max(RELOAD_SECS_FLOOR);
                }
                Upgrade::FireInterval => {
                    weapon.fire_interval_secs =
                        (weapon.fire_interval_secs - UPGRADE_FIRE_INTERVAL_STEP)
                            .max(FIRE_INTERVAL_FLOOR);
                }
                Upgrade::BulletSpeed => weapon.bullet_speed += UPGRADE_BULLET_SPEED_STEP,
                Upgrade::BulletRadius => weapon.bullet_radius += UPGRADE_BULLET_RADIUS_STEP,
                Upgrade::MaxHealth => {
                    health.max += UPGRADE_MAX_HEALTH_STEP;
                    health.current = (health.current + UPGRADE_MAX_HEALTH_STEP).min(health.max);
                }
                Upgrade::ScoreMultiplier => stats.score_multiplier += UPGRADE_SCORE_MULT_STEP,
                Upgrade::RecoilDamping => {
                    weapon.recoil = (weapon.recoil - UPGRADE_RECOIL_STEP).max(RECOIL_FLOOR);
                }
            }
        }
    }

    /// Step every system in the fixed order.
    fn run_systems(&mut self, input: &InputState) {
        // 1. Enemy spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_timer,
            &self.modifiers,
            self.bounds,
            &mut self.next_id,
            self.time.elapsed_secs,
        );
        // 2. Player movement
        systems::player::run(&mut self.world, input, &self.modifiers, self.bounds);
        // 3. Firing + recoil
        systems::weapon::fire(
            &mut self.world,
            input,
            &self.modifiers,
            &mut self.next_id,
            self.time.elapsed_secs,
            &mut self.events,
        );
        // 4. Reload countdown
        systems::weapon::update_reload(&mut self.world, &mut self.events);
        // 5. Homing steering
        systems::bullets::steer(&mut self.world);
        // 6. Enemy seek
        systems::enemies::seek(&mut self.world);
        // 7. Movement integration
        systems::movement::run(&mut self.world);
        // 8. Bullet culling
        systems::bullets::despawn_out_of_bounds(
            &mut self.world,
            self.bounds,
            &mut self.despawn_buffer,
        );
        // 9. Enemy contact damage + knockback
        systems::enemies::contact(&mut self.world, &self.modifiers, &mut self.events);
        // 10. Bullet-enemy collision + kill sweep
        systems::collision::run(
            &mut self.world,
            &self.modifiers,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 11. Player death check
        self.check_player_death();
    }

    /// End the run when the player's health is exhausted.
    fn check_player_death(&mut self) {
        if self.modifiers.enabled(Modifier::UnlimitedHealth) {
            return;
        }

        let dead_score = {
            let mut query = self.world.query::<(&Player, &Health, &PlayerStats)>();
            query
                .iter()
                .find(|(_, (_, health, _))| health.current <= 0.0)
                .map(|(_, (_, _, stats))| stats.score)
        };

        if let Some(score) = dead_score {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver { score });
        }
    }
}
