use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "snackscan")]
#[command(
    about = "Detect snacks in a photo, price them and chart their nutrition",
    long_about = None
)]
pub struct Cli {
    /// Photo to analyze; prompted for interactively when omitted
    pub image: Option<PathBuf>,

    /// Inference service base URL (overrides SNACKSCAN_INFERENCE_URL)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory for annotated output images (overrides SNACKSCAN_OUTPUT_DIR)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Print the reconciled view as JSON instead of table and chart
    #[arg(long)]
    pub json: bool,

    /// Exit after the first analysis instead of offering another round
    #[arg(long)]
    pub once: bool,

    /// Verbose logs
    #[arg(short, long)]
    pub verbose: bool,
}
