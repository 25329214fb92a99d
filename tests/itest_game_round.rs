use egui::{Pos2, Vec2};

use brick_breaker::breakout::mechanics::{BreakoutMechanics, GameInput, GameState, PaddleControl};
use brick_breaker::util;

#[test]
fn itest_round_to_game_over_and_restart() {
    util::init_logging();

    let mut game = BreakoutMechanics::new();
    assert_eq!(game.state, GameState::NotStarted);

    game.time_step(GameInput::confirmed());
    assert_eq!(game.state, GameState::Playing);

    // park the paddle on the left and drop the ball on the right half,
    // below the brick rows, so it must fall through
    game.ball.pos = Pos2::new(700.0, 300.0);
    game.ball.velocity = Vec2::new(240.0, 240.0);

    let mut steps = 0;
    while game.state == GameState::Playing {
        game.time_step(GameInput::steer(PaddleControl::MoveLeft));
        steps += 1;
        assert!(steps < 1000, "ball should have left the field by now");
    }
    assert_eq!(game.state, GameState::GameOver);
    assert_eq!(game.score, 0);
    assert_eq!(game.paddle.pos.x, 0.0);

    game.time_step(GameInput::confirmed());
    assert_eq!(game.state, GameState::Playing);
    assert_eq!(game.score, 0);
    assert!(game.bricks.iter().all(|b| b.active));
    assert_eq!(game.paddle.pos, Pos2::new(350.0, 570.0));
}
