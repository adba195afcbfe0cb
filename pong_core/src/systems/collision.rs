use crate::{Ball, Config, Events, HorizontalDir, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom walls
pub fn check_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.top() < 0.0 {
            ball.move_down();
            // Clamp position to prevent stuck
            ball.pos.y = ball.radius;
            events.ball_hit_wall = true;
        } else if ball.bottom() > config.arena_height {
            ball.move_up();
            ball.pos.y = config.arena_height - ball.radius;
            events.ball_hit_wall = true;
        }
    }
}

/// Predictive paddle collision
///
/// A hit is registered when the ball's leading edge will cross a paddle's
/// contact plane on its next move and the vertical spans overlap. Every
/// second hit speeds the ball up. Hits in a paddle's outer third also flip
/// the vertical direction.
pub fn check_paddle_hits(
    world: &mut World,
    config: &Config,
    collision_counter: &mut u32,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.clone())
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let Some(paddle) = paddles.iter().find(|paddle| will_hit(ball, paddle)) else {
            continue;
        };

        *collision_counter += 1;
        if *collision_counter % 2 == 0 {
            ball.accelerate(config.ball_acceleration);
        }

        ball.flip_horizontal();
        if ball.pos.y < paddle.top_edge() || ball.pos.y > paddle.bottom_edge() {
            ball.flip_vertical();
        }
        // Carry any new speed into both axes
        ball.reapply_speed();

        events.ball_hit_paddle = true;
    }
}

/// Whether the ball, moving toward `paddle`, reaches its contact plane next tick
pub fn will_hit(ball: &Ball, paddle: &Paddle) -> bool {
    let plane = paddle.contact_x();
    let crosses = match paddle.side {
        Side::Left => {
            ball.horizontal == HorizontalDir::Left
                && ball.pos.x > plane
                && ball.pos.x - ball.radius + ball.vel.x <= plane
        }
        Side::Right => {
            ball.horizontal == HorizontalDir::Right
                && ball.pos.x < plane
                && ball.pos.x + ball.radius + ball.vel.x >= plane
        }
    };
    crosses && paddle.overlaps(ball.top(), ball.bottom())
}
