use clap::Parser;
use whorl_core::{JitterConfig, ScaleMode};
use whorl_interactive::Window;
use whorl_midi_live::MidiLive;
use whorl_visual::{Palette, PaletteConfig, Stage, StageConfig};

#[derive(Parser)]
#[command(about = "Play curves with a live midi device")]
struct Args {
    /// List available midi input ports and exit.
    #[arg(long)]
    list_ports: bool,
    #[arg(long, default_value_t = 0)]
    midi_port: usize,
    #[arg(long, default_value_t = 960)]
    width: u32,
    #[arg(long, default_value_t = 720)]
    height: u32,
    /// Let the mouse position scale the curves' wander.
    #[arg(long)]
    pointer_jitter: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let midi_live = MidiLive::new()?;
    if args.list_ports {
        for (i, name) in midi_live.enumerate_port_names() {
            println!("{}: {}", i, name);
        }
        return Ok(());
    }
    let mut connection = midi_live.connect(args.midi_port)?;
    let palette =
        Palette::generate(&mut rand::rng(), PaletteConfig::default());
    let jitter = if args.pointer_jitter {
        JitterConfig::ORIGINAL.scale_mode(ScaleMode::PointerDriven {
            x_01: 0.5,
            y_01: 0.5,
        })
    } else {
        JitterConfig::ORIGINAL
    };
    let config = StageConfig {
        jitter,
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
    .run(stage, move || connection.drain_key_events())
}
