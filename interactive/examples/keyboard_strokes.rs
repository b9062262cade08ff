use clap::Parser;
use whorl_interactive::Window;
use whorl_keyboard::KeyEvents;
use whorl_visual::{Palette, PaletteConfig, Stage, StageConfig};

#[derive(Parser)]
#[command(about = "Play curves with the computer keyboard")]
struct Args {
    #[arg(long, default_value_t = 960)]
    width: u32,
    #[arg(long, default_value_t = 720)]
    height: u32,
    #[arg(long, default_value_t = 0.25)]
    smoothing: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let palette =
        Palette::generate(&mut rand::rng(), PaletteConfig::default());
    let config = StageConfig {
        smoothing: args.smoothing,
        ..Default::default()
    };
    let stage = Stage::new(
        f64::from(args.width),
        f64::from(args.height),
        config,
        palette,
    );
    Window {
        width_px: args.width,
        height_px: args.height,
        ..Default::default()
    }
    .run(stage, KeyEvents::empty)
}
