use anyhow::{Context, Result};
use clap::Parser;
use shorts_adapter::{
    cli::Cli,
    config::Config,
    constants::EXIT_FRAGMENTS_FAILED,
    generator::GeminiClient,
    io::{clipboard, input},
    output,
    pipeline::RewritePipeline,
    transcript::chunk_transcript,
    ui::TerminalProgress,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Missing credentials stop the run before any input is read.
    let config = Config::from_cli(cli)?;

    let transcript = input::read_transcript(config.input.as_deref())?;
    if transcript.split_whitespace().next().is_none() {
        info!("no transcript supplied; nothing to do");
        return Ok(());
    }

    if config.chunks_only {
        let fragments = chunk_transcript(&transcript, config.max_words);
        print!("{}", output::format_fragments(&fragments));
        return Ok(());
    }

    let generator_config = config
        .generator
        .as_ref()
        .context("generator configuration missing")?;
    let client = GeminiClient::new(generator_config).context("failed to build Gemini client")?;
    info!(model = client.model(), "using Gemini");

    let pipeline = RewritePipeline::new(client, config.prompt);
    let mut progress = TerminalProgress::stderr();
    let report = pipeline
        .adapt(&transcript, config.max_words, &mut progress)
        .await;

    if !report.text.is_empty() {
        if !config.quiet {
            println!("{}", report.text);
        }
        if let Some(path) = &config.output {
            let saved = output::save_script(path, &report.text)?;
            eprintln!("Saved to {}", saved.display());
        }
        if config.copy {
            clipboard::copy_to_clipboard(&report.text, false)?;
        }
    }
    eprintln!("{}", output::format_summary(&report));

    if config.strict && report.has_failures() {
        std::process::exit(EXIT_FRAGMENTS_FAILED);
    }
    Ok(())
}
