use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use env_logger::Builder;
use glob::glob;
use log::LevelFilter;
use rayon::iter::{IntoParallelRefIterator as _, ParallelIterator as _};

use map_core::spatial::model::SpatialModel;
use map_crypto::{KeyEncoding, KeyMaterial};
use map_parser::parsers::{get_provider, DecoderConfig, MapDecoder, Protocol};
use map_parser::DecodeError;

#[derive(Parser, Debug)]
#[command(
    name = "Map Extractor",
    about = "A tool for decoding encrypted cloud robot maps into spatial models",
    author = "MIERUNE Inc.",
    version = "0.0.1"
)]
struct Cli {
    #[arg(short, long, required = true, num_args = 1.., value_name = "FILE")]
    input: Vec<String>,

    #[arg(short, long, required = true, value_name = "DIR")]
    output: String,

    #[arg(long, default_value = "ijai")]
    protocol: String,

    #[arg(long, default_value = "")]
    wifi_sn: String,

    #[arg(long, default_value = "")]
    owner_id: String,

    #[arg(long, default_value = "")]
    device_id: String,

    #[arg(long, default_value = "")]
    model: String,

    #[arg(long, default_value = "")]
    mac: String,

    /// Use the 16-character text key instead of the hex key
    #[arg(long)]
    text_key: bool,

    #[arg(long)]
    pretty: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn expand_globs(input_patterns: Vec<String>) -> Result<Vec<PathBuf>, AppError> {
    let mut paths = Vec::new();
    for pattern in input_patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            for entry in glob(&pattern)? {
                match entry {
                    Ok(path) => paths.push(path),
                    Err(e) => log::warn!("skipping unreadable glob entry: {:?}", e),
                }
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }
    Ok(paths)
}

fn output_path_for(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "map".to_string());
    output_dir.join(format!("{}.json", stem))
}

fn decode_file(
    decoder: &dyn MapDecoder,
    input: &Path,
    key_material: &KeyMaterial,
) -> Result<SpatialModel, AppError> {
    let raw = fs::read(input).map_err(|source| AppError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(decoder.decode_blob(&raw, key_material)?)
}

fn write_model(path: &Path, model: &SpatialModel, pretty: bool) -> Result<(), AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(model)?
    } else {
        serde_json::to_string(model)?
    };
    fs::write(path, json).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn process(
    decoder: &dyn MapDecoder,
    input: &Path,
    output_dir: &Path,
    key_material: &KeyMaterial,
    pretty: bool,
) -> Result<PathBuf, AppError> {
    let start = std::time::Instant::now();
    let model = decode_file(decoder, input, key_material)?;
    log::info!(
        "decoded {:?} in {:?}: {} rooms, {} walls, {} path points, current room {:?}",
        input,
        start.elapsed(),
        model.rooms.len(),
        model.walls.len(),
        model.path.point_length,
        model.vacuum_room
    );

    let output_path = output_path_for(output_dir, input);
    write_model(&output_path, &model, pretty)?;
    Ok(output_path)
}

fn main() -> ExitCode {
    let args = Cli::parse();

    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(
            None,
            if args.verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        )
        .init();

    log::info!("input files: {:?}", args.input);
    log::info!("output folder: {}", args.output);
    log::info!("protocol: {}", args.protocol);

    let start = std::time::Instant::now();

    let protocol: Protocol = match args.protocol.parse() {
        Ok(protocol) => protocol,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let config = DecoderConfig {
        key_encoding: if args.text_key {
            KeyEncoding::Text
        } else {
            KeyEncoding::Hex
        },
    };
    let key_material = KeyMaterial {
        wifi_sn: args.wifi_sn,
        owner_id: args.owner_id,
        device_id: args.device_id,
        model: args.model,
        mac: args.mac,
    };

    let input_files = match expand_globs(args.input) {
        Ok(files) => files,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Expanded input files: {:?}", input_files);

    let output_path = PathBuf::from(args.output);
    if let Err(e) = fs::create_dir_all(&output_path) {
        log::error!("failed to create {:?}: {}", output_path, e);
        return ExitCode::FAILURE;
    }

    let decoder = get_provider(protocol, config).get_decoder();
    let failures = input_files
        .par_iter()
        .map(|input| {
            match process(decoder.as_ref(), input, &output_path, &key_material, args.pretty) {
                Ok(written) => {
                    log::info!("write {:?}", written);
                    0
                }
                Err(e) => {
                    log::error!("failed to decode {:?}: {}", input, e);
                    1
                }
            }
        })
        .sum::<usize>();

    log::info!("Elapsed: {:?}", start.elapsed());
    if failures > 0 {
        log::error!("{} of {} maps failed", failures, input_files.len());
        return ExitCode::FAILURE;
    }
    log::info!("Finish processing");
    ExitCode::SUCCESS
}
