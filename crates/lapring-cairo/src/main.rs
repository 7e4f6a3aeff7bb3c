use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use lapring::config::{self, Settings};
use lapring::{Preset, Progress};
use lapring_cairo::watch;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lapring", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Render the indicator to a PNG file
    Render(RenderArgs),
    /// Render, then render again every time the config file changes
    Watch(RenderArgs),
    /// Write the default config file (if missing) and print its path
    Init {
        /// Where to write the file instead of the user config directory
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Progress as a fraction ("1.25") or a percentage ("125%")
    #[arg(short = 'p', long)]
    progress: Option<Progress>,

    /// Side of the output square in pixels
    #[arg(short = 's', long)]
    size: Option<u32>,

    /// Stroke width in pixels
    #[arg(short = 'w', long)]
    stroke_width: Option<f64>,

    /// Color preset (ocean, sunset, forest, mono)
    #[arg(long)]
    preset: Option<Preset>,

    /// Config file to read instead of the user config
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Output PNG path
    #[arg(short = 'o', long, default_value = "lapring.png")]
    output: PathBuf,
}

impl RenderArgs {
    fn settings(&self) -> anyhow::Result<Settings> {
        let base = match &self.config {
            Some(path) => config::load_config_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => config::load_or_default(None),
        };

        let settings = Settings {
            preset: self.preset.unwrap_or(base.preset),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            progress: self.progress.unwrap_or(base.progress),
            size: self.size.unwrap_or(base.size),
            ..base
        };
        Ok(settings.validate()?)
    }

    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(config::get_config_path()?),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render(args) => render(&args),
        Commands::Watch(args) => run_watch(&args),
        Commands::Init { config: path } => init(path),
    }
}

fn render(args: &RenderArgs) -> anyhow::Result<()> {
    let settings = args.settings()?;
    let frame = lapring_cairo::write_png(&settings.style(), settings.size, &args.output)
        .with_context(|| format!("Failed to render {}", args.output.display()))?;

    log::info!(
        "Rendered progress {} ({} full laps, {} marker, rotation {:.3} rad)",
        settings.progress,
        settings.progress.laps(),
        frame.marker_tone,
        frame.overlay.rotation
    );
    println!("{}", args.output.display());
    Ok(())
}

fn run_watch(args: &RenderArgs) -> anyhow::Result<()> {
    let path = args.config_path()?;

    if let Err(e) = render(args) {
        log::error!("{:#}", e);
    }

    watch::watch_config(&path, || match render(args) {
        Ok(()) => log::info!("Configuration reloaded"),
        Err(e) => log::error!("{:#}", e),
    })?;
    Ok(())
}

fn init(path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = match path {
        Some(p) => p,
        None => config::get_config_path()?,
    };
    let written = config::write_default_config(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{}", written.display());
    Ok(())
}
