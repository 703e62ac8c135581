#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod tray;

fn main() {
    // Diagnostics go to stderr only; with `windows_subsystem = "windows"`
    // there is no console attached, so failures stay on the debug channel.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    app::run()
}
