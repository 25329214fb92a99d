use std::time::{Duration, Instant};

use egui::{Color32, Context, FontId, Id, LayerId, Order, Painter, Vec2};

use crate::breakout::mechanics::{BreakoutMechanics, GameInput, GameState, PaddleControl, MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y, TIME_GRANULARITY};
use crate::game_drawer::{GameDrawer, TEXT_FONT_SIZE};

pub const FRAME_SIZE_X: f32 = MODEL_GRID_LEN_X;
pub const FRAME_SIZE_Y: f32 = MODEL_GRID_LEN_Y;

/// bound on catch-up simulation steps after a stalled frame
const MAX_STEPS_PER_FRAME: u32 = 8;

pub struct BreakoutApp {
    game: BreakoutMechanics,
    last_frame_time: Instant,
    step_debt: Duration,
    /// confirm stays latched until a simulation step consumes it, so a frame
    /// without a due step cannot swallow the keypress
    pending_confirm: bool,
}

impl BreakoutApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            game: BreakoutMechanics::new(),
            last_frame_time: Instant::now(),
            step_debt: Duration::ZERO,
            pending_confirm: false,
        }
    }

    fn read_ui_control(
        &mut self,
        ctx: &Context,
    ) -> GameInput {
        let control = if ctx.input(|i| i.key_down(egui::Key::ArrowLeft) && !i.key_down(egui::Key::ArrowRight)) {
            PaddleControl::MoveLeft
        } else if ctx.input(|i| i.key_down(egui::Key::ArrowRight) && !i.key_down(egui::Key::ArrowLeft)) {
            PaddleControl::MoveRight
        } else {
            PaddleControl::None
        };
        let confirm = ctx.input(|i| i.key_pressed(egui::Key::Enter));
        let cancel = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        GameInput { control, confirm, cancel }
    }

    /// run the simulation steps which became due since the last frame
    fn advance_game(&mut self, input: GameInput) {
        let now = Instant::now();
        self.step_debt += now - self.last_frame_time;
        self.last_frame_time = now;
        self.pending_confirm |= input.confirm;

        let mut steps = 0;
        while self.step_debt >= TIME_GRANULARITY && steps < MAX_STEPS_PER_FRAME {
            self.game.time_step(GameInput {
                confirm: self.pending_confirm,
                ..input
            });
            self.pending_confirm = false;
            self.step_debt -= TIME_GRANULARITY;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_FRAME {
            // behind by more than the catch-up bound; the rest is dropped
            self.step_debt = Duration::ZERO;
        }
    }

    fn draw_game_content(&self, painter: &Painter) {
        let paint_offset = painter.clip_rect().min;
        let canvas_size = painter.clip_rect().size();

        let drawer = GameDrawer::new(canvas_size, self.game.clone());
        for mut shape in drawer.shapes() {
            shape.translate(paint_offset.to_vec2());
            painter.add(shape);
        }
        for text in drawer.texts() {
            painter.text(
                text.pos + paint_offset.to_vec2(),
                text.anchor,
                text.text,
                FontId::proportional(TEXT_FONT_SIZE),
                Color32::WHITE,
            );
        }
    }
}

impl eframe::App for BreakoutApp {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        frame.set_window_size(Vec2::new(FRAME_SIZE_X, FRAME_SIZE_Y));

        let player_input = self.read_ui_control(ctx);
        if wants_quit(self.game.state, player_input) {
            frame.close();
            return;
        }
        self.advance_game(player_input);

        let game_painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("game")));
        self.draw_game_content(&game_painter);
        ctx.request_repaint();
    }
}

/// the cancel key quits the program from the game-over screen only
fn wants_quit(
    state: GameState,
    input: GameInput,
) -> bool {
    input.cancel && state == GameState::GameOver
}
