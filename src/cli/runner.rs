use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use whiteout::{
    InputFormat, PipelineConfig, default_output_path, preview_file_name,
    process_file_with_options,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn resolve_config(args: &CliArgs) -> Result<PipelineConfig, AppError> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(mb) = args.max_size_mb {
        if mb == 0 {
            return Err(AppError::ZeroMaxSize { size: mb });
        }
        config.max_input_bytes = mb.saturating_mul(1024 * 1024);
    }

    debug!("Resolved pipeline config: {:?}", config);
    Ok(config)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    if InputFormat::from_path(&args.input).is_none() {
        return Err(AppError::unsupported_extension(&args.input));
    }

    let config = resolve_config(&args)?;

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let output: PathBuf = match &args.output {
        Some(path) => path.clone(),
        None => default_output_path(&args.input, args.output_dir.as_deref())?,
    };

    let preview_path = args.preview.map(|bg| {
        let name = args
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = output.parent().map(PathBuf::from).unwrap_or_default();
        (bg, dir.join(preview_file_name(&name, bg)))
    });

    info!("Processing: {:?} -> {:?}", args.input, output);

    let processed = process_file_with_options(
        &args.input,
        &output,
        &config,
        preview_path.as_ref().map(|(bg, path)| (*bg, path.as_path())),
    )?;

    info!(
        "Successfully processed: {:?} ({}x{}, {} of {} pixels transparent)",
        output,
        processed.width,
        processed.height,
        processed.stats.background_pixels,
        processed.stats.total_pixels
    );
    println!("{}", output.display());
    if let Some((_, path)) = preview_path {
        println!("{}", path.display());
    }

    Ok(())
}
