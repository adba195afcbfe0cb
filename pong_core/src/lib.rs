pub mod arena;
pub mod bot;
pub mod components;
pub mod config;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;
pub mod ticker;

pub use arena::*;
pub use bot::*;
pub use components::*;
pub use config::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use ticker::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
///
/// Returns the side that scored this tick, if any. Paddle hits are skipped
/// on a scoring tick since the ball is already back at the centre.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputState,
    collision_counter: &mut u32,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // 1. Controllers decide paddle intents, paddles move
    ingest_inputs(world, input, config);
    move_paddles(world, config);

    // 2. Move ball
    move_ball(world);

    // 3. Walls bounce, side exits score
    check_walls(world, config, events);
    if let Some(scorer) = check_scoring(world, config, events, rng) {
        *collision_counter = 0;
        return Some(scorer);
    }

    // 4. Paddle hits, predicted from the next move
    check_paddle_hits(world, config, collision_counter, events);
    None
}

/// Helper to create a paddle entity with its score and controller
pub fn create_paddle(
    world: &mut World,
    side: Side,
    name: impl Into<String>,
    controller: Controller,
    config: &Config,
) -> hecs::Entity {
    world.spawn((
        Paddle::new(side, name, config),
        ScoreTrack::new(side, config),
        controller,
        PaddleIntent::new(),
    ))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
