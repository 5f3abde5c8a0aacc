mod backend;
mod frontend;

use crate::frontend::app::main::App;
use dioxus::LaunchBuilder;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use env_logger::Env;

fn main() {
    // Logging setup
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let size = LogicalSize::new(1100.0, 720.0);

    let config = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title("Nimbus Mail")
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(900.0, 600.0)),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}
