use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use boothstrip::{
    BoothConfig, BoothEvent, CaptureSession, OverlayAsset, Photobooth, SessionId, SourceFrame,
    StillSource, StripFormat, capture_cell, read_config_json, render_strip, write_png,
};

#[derive(Parser, Debug)]
#[command(name = "boothstrip", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full countdown/capture pipeline against a still image
    /// standing in for the camera, then write the print PNG.
    Print(PrintArgs),
    /// Composite four already-captured frame images into a strip PNG.
    Strip(StripArgs),
}

#[derive(Parser, Debug)]
struct PrintArgs {
    /// Image file used as the live source.
    #[arg(long)]
    source: PathBuf,

    /// Overlay image (must match the 383x2048 print strip).
    #[arg(long)]
    overlay: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = boothstrip::EXPORT_FILE_NAME)]
    out: PathBuf,

    /// Optional look config JSON (tone + grain parameters).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sleep one real second per countdown step instead of simulating.
    #[arg(long)]
    realtime: bool,
}

#[derive(Parser, Debug)]
struct StripArgs {
    /// Exactly four frame images, top band first.
    #[arg(long, num_args = 4)]
    frames: Vec<PathBuf>,

    /// Overlay image (must match the 383x2048 print strip).
    #[arg(long)]
    overlay: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = boothstrip::EXPORT_FILE_NAME)]
    out: PathBuf,

    /// Optional look config JSON (tone + grain parameters).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Print(args) => cmd_print(args),
        Command::Strip(args) => cmd_strip(args),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<BoothConfig> {
    match path {
        Some(p) => Ok(read_config_json(p)?),
        None => Ok(BoothConfig::default()),
    }
}

fn cmd_print(args: PrintArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let format = StripFormat::print();
    let overlay = OverlayAsset::load(&args.overlay, format)?;
    let mut source = StillSource::from_path(&args.source)?;

    let mut booth = Photobooth::new(overlay, cfg.tone, cfg.grain)?;
    let (token, mut events) = booth.start(&source)?;

    let mut print = None;
    while print.is_none() {
        for ev in events {
            match ev {
                BoothEvent::CountdownTick { remaining } => {
                    println!("capturing in {remaining}...");
                }
                BoothEvent::FrameCaptured { index } => {
                    println!("captured frame {}", index + 1);
                }
                BoothEvent::SequenceComplete => println!("sequence complete, rendering..."),
                BoothEvent::RenderComplete(strip) => print = Some(strip),
            }
        }
        if print.is_some() {
            break;
        }
        if args.realtime {
            std::thread::sleep(boothstrip::STEP_INTERVAL);
        }
        events = booth.tick(token, &mut source)?;
    }

    let strip = print.context("booth finished without a print")?;
    write_png(&strip, &args.out)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_strip(args: StripArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let format = StripFormat::print();
    let overlay = OverlayAsset::load(&args.overlay, format)?;

    let mut session = CaptureSession::new(SessionId(0), format.frames)?;
    for path in &args.frames {
        let bytes =
            std::fs::read(path).with_context(|| format!("read frame '{}'", path.display()))?;
        let img = image::load_from_memory(&bytes)
            .with_context(|| format!("decode frame '{}'", path.display()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        let frame = SourceFrame::new(width, height, img.into_raw())?;
        session.push(capture_cell(&frame, format.cell)?)?;
    }

    let strip = render_strip(&session, &overlay, cfg.tone, &cfg.grain)?;
    write_png(&strip, &args.out)?;
    println!("wrote {}", args.out.display());
    Ok(())
}
