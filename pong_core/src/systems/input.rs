use hecs::World;

use crate::components::*;
use crate::{Config, InputState};

/// Ask each paddle's controller for this tick's intent
pub fn ingest_inputs(world: &mut World, input: &InputState, config: &Config) {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);
    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, (paddle, controller, intent)) in
        world.query_mut::<(&Paddle, &Controller, &mut PaddleIntent)>()
    {
        *intent = controller.intent(input, &ball, paddle, config.arena_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Key};

    #[test]
    fn test_keyboard_and_bot_intents() {
        let config = Config::new();
        let mut world = World::new();
        let left = create_paddle(&mut world, Side::Left, "P1", Controller::Keyboard, &config);
        let right = create_paddle(&mut world, Side::Right, "CPU", Controller::Bot, &config);

        let mut ball = Ball::new(config.ball_radius, config.ball_speed_initial);
        ball.pos = glam::Vec2::new(350.0, 10.0);
        create_ball(&mut world, ball);

        let mut input = InputState::new();
        input.key_down(Key::LeftDown);
        input.key_down(Key::RightDown); // ignored: right side is the bot

        ingest_inputs(&mut world, &input, &config);

        assert_eq!(*world.get::<&PaddleIntent>(left).unwrap(), PaddleIntent::DOWN);
        assert_eq!(
            *world.get::<&PaddleIntent>(right).unwrap(),
            PaddleIntent::UP,
            "Bot chases the ball above it"
        );
    }

    #[test]
    fn test_no_intent_change_without_ball() {
        let config = Config::new();
        let mut world = World::new();
        let left = create_paddle(&mut world, Side::Left, "P1", Controller::Keyboard, &config);

        let mut input = InputState::new();
        input.key_down(Key::LeftUp);
        ingest_inputs(&mut world, &input, &config);

        assert_eq!(*world.get::<&PaddleIntent>(left).unwrap(), PaddleIntent::STOP);
    }
}
