//! `glyphpath` CLI: export font glyphs as normalized SVG paths (and
//! optional JPEG thumbnails), then assemble them into a JSON dataset.

mod dataset;
mod discover;
mod output;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::{error, info, warn};

use glyphpath_core::{
    ErrorKind, ExportConfig, PipelineConfig, PipelineError, PipelineResult, ThumbnailConfig,
    ThumbnailRenderer, export_font, load_order,
};
use glyphpath_fonts::{FontSource, face_count};
use glyphpath_raster::JpegThumbnailer;

use crate::dataset::{build_dataset, write_dataset};
use crate::discover::{discover_fonts, face_name};
use crate::output::DirectorySink;

#[derive(Parser)]
#[command(version, about = "Export font glyphs as normalized SVG paths")]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export every character of the order file from every font
    Export(ExportArgs),
    /// Pair exported SVG and JPG files into chat-style JSON records
    Dataset(DatasetArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Directory searched recursively for .ttf, .otf and .ttc files
    #[arg(long, value_name = "DIR", default_value = "fonts")]
    fonts_dir: PathBuf,

    /// JSON object whose keys are the characters to export, in order
    #[arg(long, value_name = "FILE", default_value = "order.json")]
    order: PathBuf,

    /// Output root; one sub-directory per font
    #[arg(long, value_name = "DIR", default_value = "output")]
    outdir: PathBuf,

    /// Longest edge of each SVG document
    #[arg(long, default_value_t = 1024)]
    svg_scale: u32,

    /// Edge length of JPG thumbnails in pixels
    #[arg(long, default_value_t = 512)]
    img_size: u32,

    /// Also write JPG thumbnails
    #[arg(long)]
    jpg: bool,
}

#[derive(Args)]
struct DatasetArgs {
    /// Output root written by `export`
    #[arg(long, value_name = "DIR", default_value = "output")]
    outdir: PathBuf,

    /// Same order file as used for `export`
    #[arg(long, value_name = "FILE", default_value = "order.json")]
    order: PathBuf,

    /// Dataset file to write
    #[arg(long, value_name = "FILE", default_value = "dataset.json")]
    output: PathBuf,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Command::Export(args) => run_export(args),
        Command::Dataset(args) => run_dataset(args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn export_config(args: &ExportArgs) -> PipelineResult<ExportConfig> {
    let thumbnail = if args.jpg {
        Some(ThumbnailConfig::with_size(args.img_size)?)
    } else {
        None
    };
    Ok(ExportConfig {
        pipeline: PipelineConfig::with_canvas_size(args.svg_scale)?,
        thumbnail,
    })
}

fn run_export(args: &ExportArgs) -> PipelineResult<()> {
    let config = export_config(args)?;
    let chars = load_order(&args.order)?;
    let fonts = discover_fonts(&args.fonts_dir);
    if fonts.is_empty() {
        warn!("no font files under {}", args.fonts_dir.display());
    }
    info!("{} font files, {} characters", fonts.len(), chars.len());

    let thumbnailer = JpegThumbnailer;
    let renderer: Option<&dyn ThumbnailRenderer> = Some(&thumbnailer);
    let mut sink = DirectorySink::new(&args.outdir);
    let mut faces = 0usize;

    for path in &fonts {
        let bytes: Arc<[u8]> = match fs::read(path) {
            Ok(b) => Arc::from(b),
            Err(e) => {
                warn!("{}: {e}", path.display());
                continue;
            }
        };
        for index in 0..face_count(&bytes) {
            let source = match FontSource::from_bytes(Arc::clone(&bytes), index) {
                Ok(s) => s,
                Err(e) => {
                    warn!("{} (face {index}): {e}", path.display());
                    continue;
                }
            };
            let name = face_name(path, index);
            export_font(&source, &name, &chars, &config, renderer, &mut sink);
            faces += 1;
        }
    }
    info!("exported {faces} faces to {}", args.outdir.display());
    Ok(())
}

fn io_error(path: &Path, e: &io::Error) -> PipelineError {
    PipelineError::new(ErrorKind::Io, format!("{}: {e}", path.display()))
}

fn run_dataset(args: &DatasetArgs) -> PipelineResult<()> {
    let chars = load_order(&args.order)?;
    let records = build_dataset(&args.outdir, &chars).map_err(|e| io_error(&args.outdir, &e))?;
    write_dataset(&records, &args.output).map_err(|e| io_error(&args.output, &e))?;
    info!("wrote {} records to {}", records.len(), args.output.display());
    Ok(())
}
