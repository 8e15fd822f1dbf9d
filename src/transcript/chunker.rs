// Greedy word-bounded chunker
use crate::transcript::types::Fragment;

/// Splits `text` on runs of whitespace and packs the tokens into fragments of
/// at most `max_words` tokens each, filling greedily in order.
///
/// A transcript with no tokens yields no fragments. A `max_words` of zero is
/// treated as one so every fragment still makes progress.
pub fn chunk_transcript(
    text: &str,
    max_words: usize,
) -> Vec<Fragment> {
    let limit = max_words.max(1);
    let mut fragments = Vec::new();
    let mut current: Vec<&str> = Vec::with_capacity(limit.min(4096));

    let mut push_fragment = |words: &mut Vec<&str>| {
        if !words.is_empty() {
            let index = fragments.len();
            fragments.push(Fragment {
                index,
                text: words.join(" "),
                words: words.len(),
            });
            words.clear();
        }
    };

    for token in text.split_whitespace() {
        if current.len() == limit {
            push_fragment(&mut current);
        }
        current.push(token);
    }

    // push final fragment
    push_fragment(&mut current);
    fragments
}
