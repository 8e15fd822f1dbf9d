use crate::cli::Cli;
use crate::constants::API_KEY_ENV;
use crate::prompt::PromptOptions;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the {0} environment variable is not set; export your Gemini API key and retry")]
    MissingCredential(&'static str),
}

/// Everything the Gemini client needs, resolved once at startup.
#[derive(Clone)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Application configuration derived from CLI arguments and the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` means stdin.
    pub input: Option<PathBuf>,
    pub max_words: usize,
    pub prompt: PromptOptions,
    /// Absent only in `--chunks-only` mode, which never calls the model.
    pub generator: Option<GeneratorConfig>,
    pub output: Option<PathBuf>,
    pub copy: bool,
    pub quiet: bool,
    pub chunks_only: bool,
    pub strict: bool,
}

impl Config {
    /// Resolve a Config from parsed arguments and the process environment.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        Self::from_cli_with_env(cli, |key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_cli`] with an explicit environment lookup.
    pub fn from_cli_with_env(
        cli: Cli,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let generator = if cli.chunks_only {
            None
        } else {
            let api_key = env(API_KEY_ENV)
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .ok_or(ConfigError::MissingCredential(API_KEY_ENV))?;
            Some(GeneratorConfig {
                api_key,
                model: cli.model,
                base_url: cli.base_url,
                timeout: Duration::from_secs(cli.timeout),
            })
        };

        let input = cli.input.filter(|p| p.as_os_str() != "-");

        Ok(Config {
            input,
            max_words: cli.max_words,
            prompt: PromptOptions {
                target_seconds: cli.target_seconds,
            },
            generator,
            output: cli.output,
            copy: cli.copy,
            quiet: cli.quiet,
            chunks_only: cli.chunks_only,
            strict: cli.strict,
        })
    }
}
