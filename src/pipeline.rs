use crate::constants::DEFAULT_MODEL_CONTEXT;
use crate::generator::{GenerationError, TextGenerator};
use crate::prompt::{PromptOptions, build_prompt};
use crate::tokenizer;
use crate::transcript::{AdaptReport, Fragment, FragmentFailure, chunk_transcript};
use tracing::{debug, info, warn};

/// Receives per-fragment progress. Indexes are 0-based.
///
/// For every fragment `fragment_started` fires first, then exactly one of
/// `fragment_finished` or `fragment_failed`, before the next fragment starts.
pub trait ProgressObserver {
    fn fragment_started(
        &mut self,
        index: usize,
        total: usize,
    );

    fn fragment_finished(
        &mut self,
        _index: usize,
        _total: usize,
    ) {
    }

    fn fragment_failed(
        &mut self,
        _index: usize,
        _total: usize,
        _error: &GenerationError,
    ) {
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn fragment_started(
        &mut self,
        _index: usize,
        _total: usize,
    ) {
    }
}

/// Chunk-and-rewrite pipeline over an injected text generator.
pub struct RewritePipeline<G> {
    generator: G,
    prompt: PromptOptions,
    model_context: usize,
}

impl<G: TextGenerator> RewritePipeline<G> {
    pub fn new(
        generator: G,
        prompt: PromptOptions,
    ) -> Self {
        Self {
            generator,
            prompt,
            model_context: DEFAULT_MODEL_CONTEXT,
        }
    }

    /// Prompt size above which a warning is logged.
    pub fn with_model_context(
        mut self,
        tokens: usize,
    ) -> Self {
        self.model_context = tokens;
        self
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Chunk `transcript` and rewrite every fragment.
    pub async fn adapt(
        &self,
        transcript: &str,
        max_words: usize,
        observer: &mut dyn ProgressObserver,
    ) -> AdaptReport {
        let fragments = chunk_transcript(transcript, max_words);
        info!(
            fragments = fragments.len(),
            max_words, "split transcript into fragments"
        );
        self.rewrite(&fragments, observer).await
    }

    /// Rewrite fragments one at a time, in order. A failed fragment is
    /// reported and skipped; it never aborts the rest.
    pub async fn rewrite(
        &self,
        fragments: &[Fragment],
        observer: &mut dyn ProgressObserver,
    ) -> AdaptReport {
        let total = fragments.len();
        let mut adapted = String::new();
        let mut failures = Vec::new();

        for (pos, fragment) in fragments.iter().enumerate() {
            observer.fragment_started(pos, total);
            debug!("Processing fragment {}/{}", pos + 1, total);

            let prompt = build_prompt(&fragment.text, &self.prompt);
            let prompt_tokens = tokenizer::count(&prompt);
            debug!(
                fragment = fragment.index,
                words = fragment.words,
                prompt_tokens,
                "sending fragment to generator"
            );
            if prompt_tokens > self.model_context {
                warn!(
                    "fragment {} prompt is ~{} tokens, above the model context of {}; lower --max-words",
                    pos + 1,
                    prompt_tokens,
                    self.model_context
                );
            }

            match self.generator.generate(&prompt).await {
                Ok(text) => {
                    if text.is_empty() {
                        warn!("fragment {}/{} came back empty", pos + 1, total);
                    } else {
                        adapted.push_str(&text);
                        adapted.push(' ');
                    }
                    observer.fragment_finished(pos, total);
                }
                Err(e) => {
                    warn!("fragment {}/{} failed: {}", pos + 1, total, e);
                    observer.fragment_failed(pos, total, &e);
                    failures.push(FragmentFailure {
                        index: fragment.index,
                        error: e.to_string(),
                    });
                }
            }
        }

        adapted.truncate(adapted.trim_end().len());
        AdaptReport {
            text: adapted,
            fragments: total,
            failures,
        }
    }
}
