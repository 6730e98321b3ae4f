use clap::Parser;
use std::path::PathBuf;

use whiteout::PreviewBackground;

#[derive(Parser)]
#[command(
    name = "whiteout",
    version,
    about = "Remove a solid white background, producing a transparent PNG"
)]
pub struct CliArgs {
    /// Input image (png, jpeg, jpg, webp, bmp or gif)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output PNG path (default: <name>_transparent_white_bg.png next to the input)
    #[arg(short, long, conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for the output PNG, named after the input
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Maximum input size in MiB (default 30, or the config file's value)
    #[arg(long)]
    pub max_size_mb: Option<u64>,

    /// JSON pipeline config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write a preview flattened onto this backdrop (white or black)
    #[arg(long, value_enum)]
    pub preview: Option<PreviewBackground>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
