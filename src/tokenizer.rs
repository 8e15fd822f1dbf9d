use std::sync::LazyLock;
use tiktoken_rs::{CoreBPE, cl100k_base};

static TOK: LazyLock<Option<CoreBPE>> = LazyLock::new(|| cl100k_base().ok());

/// Estimate the model tokens in a string.
///
/// Gemini does not publish a local tokenizer, so this uses the cl100k BPE as
/// an approximation. Falls back to a whitespace word count if the BPE tables
/// fail to load.
#[inline]
pub fn count(text: &str) -> usize {
    match TOK.as_ref() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => text.split_whitespace().count(),
    }
}
