pub mod app;
pub mod breakout;
pub mod game_drawer;
pub mod util;
