use crate::{Ball, Config, Events, GameRng, Paddle, ScoreTrack, Side, Win};
use hecs::World;

/// Check if ball left the arena (scoring)
///
/// On a breach the opposite side gets a point and every entity goes back to
/// its start position. The ball is left stopped with its speed reset and a
/// fresh serve direction. Returns the side that scored.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let ball_x = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.x)?;

    let scorer = if ball_x < 0.0 {
        Side::Right
    } else if ball_x > config.arena_width {
        Side::Left
    } else {
        return None;
    };

    for (_entity, (paddle, score)) in world.query_mut::<(&mut Paddle, &mut ScoreTrack)>() {
        if paddle.side == scorer {
            score.add_point();
        }
        paddle.set_start_position(config);
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.set_start_position(config.arena_width, config.arena_height);
        ball.reset_speed(config.ball_speed_initial);
        ball.stop();
        ball.serve(rng);
    }

    events.scored(scorer);
    Some(scorer)
}

/// The side whose score has reached `win_score`, if any
pub fn check_winner(world: &World, win_score: u8) -> Option<Win> {
    world
        .query::<(&Paddle, &ScoreTrack)>()
        .iter()
        .find(|(_e, (_paddle, score))| score.count() == win_score)
        .map(|(_e, (paddle, _score))| Win {
            side: paddle.side,
            name: paddle.name.clone(),
        })
}
