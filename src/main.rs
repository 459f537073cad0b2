use std::path::PathBuf;

use clap::Parser;
use iced::Size;
use tracing_subscriber::EnvFilter;

use tooltip_overlay::app::run_ui;
use tooltip_overlay::config::OverlayConfig;
use tooltip_overlay::render::OverlayFontSystem;

#[derive(Parser)]
#[command(name = "tooltip-demo")]
#[command(about = "Hover tooltip overlay demo")]
struct Args {
    /// Directory to load TTF/OTF fonts from (overrides config)
    #[arg(long)]
    fonts: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 720.0)]
    height: f32,

    /// Mouse-follow x offset (overrides config)
    #[arg(long)]
    follow_offset_x: Option<f32>,

    /// Mouse-follow y offset (overrides config)
    #[arg(long)]
    follow_offset_y: Option<f32>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = OverlayConfig::load();
    if let Some(x) = args.follow_offset_x {
        config.follow_offset.0 = x;
    }
    if let Some(y) = args.follow_offset_y {
        config.follow_offset.1 = y;
    }

    let fonts_dir = args.fonts.or_else(|| config.fonts_dir.clone());
    let fonts = OverlayFontSystem::new(fonts_dir.as_deref());

    run_ui(config, fonts, Size::new(args.width, args.height))?;

    Ok(())
}
