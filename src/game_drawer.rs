use egui::epaint::RectShape;
use egui::{Align2, Color32, Pos2, Rect, Rounding, Shape, Vec2};

use crate::breakout::mechanics::{Ball, BreakoutMechanics, Brick, GameState, Paddle, MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y};

pub const TEXT_FONT_SIZE: f32 = 24.0;

const SCORE_POS: Pos2 = Pos2 { x: 10.0, y: 10.0 };
/// vertical distance of the two game-over lines from the screen center
const GAME_OVER_LINE_OFFSET_Y: f32 = 20.0;

/// one line of screen text, ready for `Painter::text`
pub struct ScreenText {
    pub pos: Pos2,
    pub anchor: Align2,
    pub text: String,
}

pub struct GameDrawer {
    canvas_size: Vec2,
    game_state: BreakoutMechanics,
}

impl GameDrawer {
    pub fn new(
        canvas_size: Vec2,
        game_state: BreakoutMechanics,
    ) -> Self {
        Self { canvas_size, game_state }
    }

    /// pos / MODEL_LEN = result / canvas_size
    /// => result = pos * canvas_size / MODEL_LEN
    fn scale(
        &self,
        pos: Pos2,
    ) -> Pos2 {
        Pos2::new(
            pos.x * self.canvas_size.x / MODEL_GRID_LEN_X,
            pos.y * self.canvas_size.y / MODEL_GRID_LEN_Y,
        )
    }

    fn scale_rect(
        &self,
        rect: Rect,
    ) -> Rect {
        Rect::from_min_max(self.scale(rect.min), self.scale(rect.max))
    }

    pub fn shapes(&self) -> Vec<egui::Shape> {
        let mut result = vec![self.background()];
        if self.game_state.state == GameState::Playing {
            result.extend(self.bricks());
            result.push(self.ball());
            result.push(self.paddle());
        }
        result
    }

    pub fn texts(&self) -> Vec<ScreenText> {
        let center = Pos2::new(MODEL_GRID_LEN_X / 2.0, MODEL_GRID_LEN_Y / 2.0);
        match self.game_state.state {
            GameState::NotStarted => vec![ScreenText {
                pos: self.scale(center),
                anchor: Align2::CENTER_CENTER,
                text: "Press Enter to Start".to_string(),
            }],
            GameState::Playing => vec![ScreenText {
                pos: self.scale(SCORE_POS),
                anchor: Align2::LEFT_TOP,
                text: format!("Score: {}", self.game_state.score),
            }],
            GameState::GameOver => vec![
                ScreenText {
                    pos: self.scale(Pos2::new(center.x, center.y - GAME_OVER_LINE_OFFSET_Y)),
                    anchor: Align2::CENTER_CENTER,
                    text: format!("Game Over! Score: {}", self.game_state.score),
                },
                ScreenText {
                    pos: self.scale(Pos2::new(center.x, center.y + GAME_OVER_LINE_OFFSET_Y)),
                    anchor: Align2::CENTER_CENTER,
                    text: "Press Enter to Play Again or Esc to Exit".to_string(),
                },
            ],
        }
    }

    fn background(&self) -> egui::Shape {
        RectShape::filled(
            Rect::from_min_size(Pos2::ZERO, self.canvas_size),
            Rounding::none(),
            Color32::BLACK,
        )
        .into()
    }

    fn bricks(&self) -> Vec<egui::Shape> {
        self.game_state.bricks.iter().filter(|b| b.active).map(|b| self.draw_brick(b)).collect()
    }

    fn ball(&self) -> egui::Shape { self.draw_ball(&self.game_state.ball) }

    fn paddle(&self) -> egui::Shape { self.draw_paddle(&self.game_state.paddle) }

    fn draw_ball(
        &self,
        ball: &Ball,
    ) -> Shape {
        RectShape::filled(
            self.scale_rect(ball.shape()),
            Rounding::none(),
            Color32::WHITE,
        )
        .into()
    }

    fn draw_paddle(
        &self,
        paddle: &Paddle,
    ) -> Shape {
        RectShape::filled(
            self.scale_rect(paddle.shape()),
            Rounding::none(),
            Color32::WHITE,
        )
        .into()
    }

    fn draw_brick(
        &self,
        brick: &Brick,
    ) -> egui::Shape {
        RectShape::filled(
            self.scale_rect(brick.shape),
            Rounding::none(),
            Color32::WHITE,
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use egui::Pos2;

    use super::*;

    fn drawer_for(state: GameState) -> GameDrawer {
        let mut game = BreakoutMechanics::new();
        game.state = state;
        GameDrawer::new(Vec2::new(MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y), game)
    }

    #[test]
    fn start_screen_shows_only_the_prompt() {
        let drawer = drawer_for(GameState::NotStarted);
        assert_eq!(drawer.shapes().len(), 1);

        let texts = drawer.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].text, "Press Enter to Start");
    }

    #[test]
    fn playing_screen_shows_entities_and_score() {
        let drawer = drawer_for(GameState::Playing);
        // background + 40 bricks + ball + paddle
        assert_eq!(drawer.shapes().len(), 43);

        let texts = drawer.texts();
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].text, "Score: 0");
        assert_eq!(texts[0].pos, Pos2::new(10.0, 10.0));
    }

    #[test]
    fn spent_bricks_are_not_drawn() {
        let mut game = BreakoutMechanics::new();
        game.state = GameState::Playing;
        game.bricks[0].active = false;
        game.bricks[1].active = false;
        let drawer = GameDrawer::new(Vec2::new(MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y), game);
        assert_eq!(drawer.shapes().len(), 41);
    }

    #[test]
    fn game_over_screen_shows_final_score_and_replay_hint() {
        let mut game = BreakoutMechanics::new();
        game.state = GameState::GameOver;
        game.score = 250;
        let drawer = GameDrawer::new(Vec2::new(MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y), game);
        assert_eq!(drawer.shapes().len(), 1);

        let texts = drawer.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[0].text, "Game Over! Score: 250");
        assert_eq!(texts[1].text, "Press Enter to Play Again or Esc to Exit");
    }

    #[test]
    fn shapes_scale_to_canvas_size() {
        let mut game = BreakoutMechanics::new();
        game.state = GameState::Playing;
        let drawer = GameDrawer::new(Vec2::new(400.0, 300.0), game);

        let shapes = drawer.shapes();
        match &shapes[42] {
            Shape::Rect(paddle) => assert_eq!(paddle.rect.min, Pos2::new(175.0, 285.0)),
            other => panic!("expected the paddle as a rect shape, got {other:?}"),
        }
    }
}
