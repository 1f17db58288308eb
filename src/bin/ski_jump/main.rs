use macroquad::prelude::Conf;

mod app;
mod assets;
mod chart;
mod constants;
mod controls;
mod hud;
mod launch;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    app::run().await;
}
