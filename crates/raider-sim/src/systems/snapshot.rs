//! Builds the `FrameSnapshot` handed to the host after every frame.

use raider_core::components::{Enemy, Player, Spawned};
use raider_core::enums::{Actor, GamePhase};
use raider_core::events::GameEvent;
use raider_core::state::{EnemyView, FrameSnapshot, PlayerView};
use raider_core::types::{Body, Health, SimTime};

use crate::bus::Reactors;
use crate::scene::Scene;

pub fn build_snapshot(
    scene: &Scene,
    time: &SimTime,
    phase: GamePhase,
    reactors: &Reactors,
    events: Vec<GameEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        director: reactors.director.view(),
        score: reactors.scoring.view(),
        lives: reactors.lives.lives(),
        player: build_player(scene),
        enemies: build_enemies(scene),
        bullets: scene.count(Actor::Bullet),
        powerups: scene.count(Actor::PowerUp),
        events,
    }
}

fn build_player(scene: &Scene) -> Option<PlayerView> {
    let entity = scene.player()?;
    let world = scene.world();
    let body = world.get::<&Body>(entity).ok()?;
    let health = world.get::<&Health>(entity).ok()?;
    let player = world.get::<&Player>(entity).ok()?;
    Some(PlayerView {
        position: body.position,
        health: health.current,
        guns: player.guns,
        engines: player.engines,
        shielded: scene.count(Actor::Shield) > 0,
    })
}

fn build_enemies(scene: &Scene) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = scene
        .world()
        .query::<(&Spawned, &Enemy, &Body, &Health)>()
        .iter()
        .map(|(_, (spawned, enemy, body, health))| EnemyView {
            seq: spawned.seq,
            kind: enemy.kind,
            position: body.position,
            health: health.current,
            player_spotted: enemy.player_spotted,
        })
        .collect();
    enemies.sort_unstable_by_key(|e| e.seq);
    enemies
}
