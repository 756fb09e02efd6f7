use log::error;
use window_kit::{
    AnimatedImage, ClientSize, Image, Pixel, Position, WindowConfig, WindowController, WinitHost, init_logging,
};

fn checkerboard(size: ClientSize, tile: u32, dark: Pixel, light: Pixel) -> Vec<Pixel> {
    (0..size.height)
        .flat_map(|y| (0..size.width).map(move |x| (x, y)))
        .map(|(x, y)| if (x / tile + y / tile) % 2 == 0 { dark } else { light })
        .collect()
}

fn pulse_frames(size: ClientSize, steps: u8) -> Vec<Vec<Pixel>> {
    (0..steps)
        .map(|step| {
            let level = (u16::from(step) * 255 / u16::from(steps.max(1))) as u8;
            vec![Pixel::rgb(level, 0x40, 0xFF - level); size.area()]
        })
        .collect()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = WindowConfig::default().with_title("Window Kit");
    let host = WinitHost::new()?;
    let mut controller = WindowController::new(host, config)?;
    controller.initialize()?;

    let board_size = ClientSize::new(256, 256);
    let board = Image::new(
        Position::new(40.0, 40.0),
        board_size,
        checkerboard(board_size, 32, Pixel::grey(60), Pixel::grey(200)),
    )?;
    controller.add_component(Box::new(board), 0);

    let pulse_size = ClientSize::new(96, 96);
    let pulse = AnimatedImage::new(Position::new(120.0, 120.0), pulse_size, pulse_frames(pulse_size, 30))?;
    controller.add_component(Box::new(pulse), 1);

    controller.run()?;
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("window_kit demo failed: {e}");
        std::process::exit(1);
    }
}
