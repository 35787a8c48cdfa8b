use std::{error::Error, path::PathBuf};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use qrlink::{validate_link, MaskPattern, QRBuilder};

// Keeps the rendered side length, (21 + 2 * quiet zone) * scale, well inside u32
const MAX_SCALE: u32 = 100;
const MAX_QUIET_ZONE: u32 = 40;

#[derive(Parser, Debug)]
#[command(
    name = "qrlink",
    version,
    about = "Link to QR code generator",
    long_about = "Validates a link and renders it as a version 1-L QR code image"
)]
struct Args {
    /// Link to encode
    #[arg(help = "Link to encode: http(s) or ftp(s), at most 17 latin characters")]
    link: String,

    #[arg(short = 'o', long = "output", default_value = "qr.png", help = "Output image path")]
    output: PathBuf,

    #[arg(short = 's', long = "scale", default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=MAX_SCALE as i64), help = "Pixels per module: [ 1 - 100 ]")]
    scale: u32,

    #[arg(short = 'q', long = "quiet-zone", default_value_t = 4, value_parser = clap::value_parser!(u32).range(0..=MAX_QUIET_ZONE as i64), help = "Light border width in modules: [ 0 - 40 ]")]
    quiet_zone: u32,

    #[arg(short = 'm', long = "mask", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=7), help = "Mask pattern: [ 0 - 7 ]")]
    mask: u8,

    #[arg(long = "print", help = "Also print the symbol to the terminal")]
    print: bool,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    validate_link(&args.link)?;

    let qr = QRBuilder::from_text(&args.link)?.mask(MaskPattern::new(args.mask)?).build()?;

    let img = qr.render_with_quiet_zone(args.scale, args.quiet_zone);
    img.save(&args.output)?;
    info!("Saved {}x{} image to {}", img.width(), img.height(), args.output.display());

    if args.print {
        println!("{}", qr.to_str(1, args.quiet_zone as usize));
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();
    run(&args).inspect_err(|e| error!("{e}"))
}
