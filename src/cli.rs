use crate::constants::{
    BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MAX_WORDS, DEFAULT_MODEL, DEFAULT_OUTPUT_FILE,
    DEFAULT_TARGET_SECONDS, DEFAULT_TIMEOUT_SECS, MAX_TARGET_SECONDS, MODEL_ENV,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shorts-adapter", version)]
#[command(
    about = "Rewrite a raw transcript into a short, narration-ready script for a 60-second \
             vertical video, one fragment at a time through Gemini."
)]
pub struct Cli {
    /// Transcript file to read; omit or pass "-" to read stdin.
    pub input: Option<PathBuf>,

    /// Maximum number of words per fragment sent to the model.
    #[arg(
        short = 'w',
        long = "max-words",
        default_value_t = DEFAULT_MAX_WORDS,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_words: usize,

    /// Length in seconds of the narrated video the script targets.
    #[arg(
        short = 't',
        long = "target-seconds",
        default_value_t = DEFAULT_TARGET_SECONDS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TARGET_SECONDS))
    )]
    pub target_seconds: u32,

    /// Gemini model name.
    #[arg(short = 'm', long = "model", env = MODEL_ENV, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Gemini REST API.
    #[arg(long = "base-url", env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Also save the adapted script as a UTF-8 text file.
    #[arg(
        short = 'o',
        long = "output",
        num_args = 0..=1,
        default_missing_value = DEFAULT_OUTPUT_FILE
    )]
    pub output: Option<PathBuf>,

    /// Copy the adapted script to the clipboard.
    #[arg(short = 'y', long = "copy")]
    pub copy: bool,

    /// Do not print the adapted script to stdout.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print the fragments the transcript splits into and exit without calling the model.
    #[arg(long = "chunks-only", conflicts_with_all = ["output", "copy"])]
    pub chunks_only: bool,

    /// Exit with a non-zero status if any fragment could not be rewritten.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Enable verbose logging.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
