use clap::Parser;
use log::{debug, LevelFilter};

use qrgen::{ECLevel, EncodeError, EncodingMode, RenderOptions};

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Generate Model-2 QR codes")]
struct Cli {
    /// Message to encode
    message: String,

    /// Type of encoding: num, alnum, bytes or kanji
    #[arg(short, long, default_value = "bytes")]
    encoding: String,

    /// Correction level: L (7%), M (15%), Q (25%) or H (30%)
    #[arg(short, long, default_value = "M")]
    correction: String,

    /// Mask pattern 0-7; a negative value picks the best mask automatically
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    mask: i32,

    /// Output file (.ppm, .svg, .eps or .png) or the literal `console`
    #[arg(short, long, default_value = "console")]
    output: String,

    /// Output pixels per module
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    scale: u32,

    /// Quiet zone width in modules
    #[arg(short, long, default_value_t = 4)]
    indent: u32,

    /// Log verbosity: critical, error, warning, debug, info or void
    #[arg(short, long, default_value = "warning")]
    log_level: String,
}

fn main() {
    // Keep the exit-code contract: 0 on success (including --help), 1 on
    // any failure. Clap's own exit would use 2 for usage errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), EncodeError> {
    env_logger::Builder::new()
        .filter_level(log_filter(&cli.log_level)?)
        .init();

    let level = ECLevel::from_name(&cli.correction)?;
    let mode = EncodingMode::from_name(&cli.encoding)?;

    let canvas = qrgen::encode(cli.message.as_bytes(), level, mode, cli.mask)?;
    debug!(
        "encoded {} bytes as version {} ({}x{} modules)",
        cli.message.len(),
        canvas.version().value(),
        canvas.size(),
        canvas.size()
    );

    let options = RenderOptions {
        scale: cli.scale,
        indent: cli.indent,
    };
    qrgen::render::render(&canvas, &cli.output, &options)?;

    if cli.output != "console" {
        println!("Generated image: {}", cli.output);
    }
    Ok(())
}

fn log_filter(name: &str) -> Result<LevelFilter, EncodeError> {
    match name {
        "critical" | "error" => Ok(LevelFilter::Error),
        "warning" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "void" => Ok(LevelFilter::Off),
        other => Err(EncodeError::InvalidArgument(format!(
            "unknown log level: {} (expected critical, error, warning, debug, info or void)",
            other
        ))),
    }
}
