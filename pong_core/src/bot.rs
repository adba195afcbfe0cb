//! Single-player opponent
//!
//! The bot only reacts to where the ball is now, so it trails the ball and
//! can be beaten by steep returns.

use crate::{Paddle, PaddleIntent, VerticalDir};

/// Movement intent for a bot-driven paddle
///
/// - up while the ball centre is above the paddle's top
/// - down while the ball overlaps the paddle and is heading down
/// - down while the ball centre is below the paddle's bottom (catch-up)
///
/// Each rule is skipped when the step would leave `[0, arena_height - height]`.
pub fn bot_intent(
    ball_y: f32,
    ball_radius: f32,
    paddle: &Paddle,
    ball_vertical: VerticalDir,
    arena_height: f32,
) -> PaddleIntent {
    let can_go_up = paddle.can_move(-1, arena_height);
    let can_go_down = paddle.can_move(1, arena_height);

    if ball_y < paddle.top() && can_go_up {
        return PaddleIntent::UP;
    }

    let overlapping = paddle.overlaps(ball_y - ball_radius, ball_y + ball_radius);
    if overlapping && ball_vertical == VerticalDir::Down && can_go_down {
        return PaddleIntent::DOWN;
    }

    if ball_y > paddle.bottom() && can_go_down {
        return PaddleIntent::DOWN;
    }

    PaddleIntent::STOP
}
