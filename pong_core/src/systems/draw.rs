use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, Paddle, ScoreTrack, Surface};

/// Draw paddles, scores and ball onto `surface`
pub fn draw_frame<S: Surface + ?Sized>(world: &World, config: &Config, surface: &mut S) {
    surface.clear(config.arena_size(), &config.background_color);

    for (_entity, (paddle, score)) in world.query::<(&Paddle, &ScoreTrack)>().iter() {
        surface.fill_rect(
            paddle.pos,
            Vec2::new(paddle.width, paddle.height),
            &config.paddle_color,
        );
        surface.fill_text(
            &score.count().to_string(),
            score.anchor(),
            &config.score_font,
            &config.paddle_color,
        );
    }

    for (_entity, ball) in world.query::<&Ball>().iter() {
        surface.fill_circle(ball.pos, ball.radius, &config.ball_color);
    }
}

/// A regular frame with the start prompt over the middle of the arena
pub fn draw_start_prompt<S: Surface + ?Sized>(world: &World, config: &Config, surface: &mut S) {
    draw_frame(world, config, surface);
    let anchor = config.arena_center() - Vec2::new(0.0, config.arena_height / 4.0);
    surface.fill_text(
        &config.start_prompt,
        anchor,
        &config.prompt_font,
        &config.paddle_color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Controller, DrawCommand, FrameRecorder, Side};

    fn setup_world(config: &Config) -> World {
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, "P1", Controller::Keyboard, config);
        create_paddle(&mut world, Side::Right, "P2", Controller::Keyboard, config);
        let mut ball = Ball::new(config.ball_radius, config.ball_speed_initial);
        ball.set_start_position(config.arena_width, config.arena_height);
        create_ball(&mut world, ball);
        world
    }

    #[test]
    fn test_frame_draws_every_entity() {
        let config = Config::new();
        let world = setup_world(&config);
        let mut frame = FrameRecorder::new();

        draw_frame(&world, &config, &mut frame);

        let cmds = frame.commands();
        assert!(matches!(cmds[0], DrawCommand::Clear { .. }));
        let rects = cmds.iter().filter(|c| matches!(c, DrawCommand::Rect { .. })).count();
        let circles = cmds.iter().filter(|c| matches!(c, DrawCommand::Circle { .. })).count();
        assert_eq!(rects, 2);
        assert_eq!(circles, 1);
        assert_eq!(frame.texts(), vec!["0", "0"]);
    }

    #[test]
    fn test_start_prompt_adds_text() {
        let config = Config::new();
        let world = setup_world(&config);
        let mut frame = FrameRecorder::new();

        draw_start_prompt(&world, &config, &mut frame);

        assert!(frame.texts().contains(&config.start_prompt.as_str()));
    }
}
