// Centralized magic numbers & default values
pub const DEFAULT_MAX_WORDS: usize = 1500;
pub const DEFAULT_TARGET_SECONDS: u32 = 60;
pub const MAX_TARGET_SECONDS: u32 = 3600;
/// Narration pace used to turn a video length into a word budget.
pub const NARRATION_WORDS_PER_MINUTE: u32 = 150;
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 180;
pub const DEFAULT_MODEL_CONTEXT: usize = 30_720;
pub const DEFAULT_OUTPUT_FILE: &str = "adapted_transcript.txt";
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const MODEL_ENV: &str = "GEMINI_MODEL";
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";
/// Exit code used by `--strict` when some fragments could not be rewritten.
pub const EXIT_FRAGMENTS_FAILED: i32 = 4;
