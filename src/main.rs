use rusty_board::{WhiteboardApp, error, parse_launch_args};

/// Launch the native egui application.
fn main() -> error::Result<()> {
    env_logger::init();

    let config = parse_launch_args(std::env::args().skip(1))?;
    log::info!(
        "Starting board with theme {:?} at {}x{}",
        config.theme,
        config.window_size[0],
        config.window_size[1]
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Rusty Board"),
        ..Default::default()
    };
    eframe::run_native(
        "Rusty Board",
        options,
        Box::new(move |cc| Ok(Box::new(WhiteboardApp::new(cc, &config)))),
    )?;
    Ok(())
}
