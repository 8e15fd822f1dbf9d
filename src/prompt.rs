use crate::constants::{DEFAULT_TARGET_SECONDS, NARRATION_WORDS_PER_MINUTE};

/// Knobs for the rewrite instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptOptions {
    /// Length of the narrated video the script is written for.
    pub target_seconds: u32,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            target_seconds: DEFAULT_TARGET_SECONDS,
        }
    }
}

impl PromptOptions {
    /// Words the rewritten fragment should stay under at narration pace.
    pub fn word_budget(&self) -> u64 {
        let seconds = u64::from(self.target_seconds.max(1));
        (seconds * u64::from(NARRATION_WORDS_PER_MINUTE)).div_ceil(60)
    }
}

/// Build the rewrite instruction for one fragment. The fragment text is
/// embedded verbatim.
pub fn build_prompt(
    fragment: &str,
    options: &PromptOptions,
) -> String {
    let seconds = options.target_seconds.max(1);
    let budget = options.word_budget();
    format!(
        "Act as an expert scriptwriter for short vertical videos (YouTube Shorts). \
Adapt the text below into a script for a {seconds}-second narrated video. Follow these rules:\n\
\n\
- Prioritise concision: keep only the essential ideas, in at most {budget} words.\n\
- Use short, direct sentences that each make sense on their own and take a few seconds to read aloud.\n\
- Use clear, simple words; avoid long or complex sentences.\n\
- Write it as a narration, as if telling a story or presenting an idea.\n\
- Avoid naming specific people or places; say \"a person\", \"a place\", \"another character\" \
unless the name is essential to understand the text.\n\
- Keep the central message of the original text.\n\
- The result will be read by a speech synthesizer: no abbreviations, symbols or emoji.\n\
- Output plain text only: no bold, no asterisks, no headings, no bullet points, no markup.\n\
- Write in the same language as the text.\n\
\n\
{fragment}\n\
\n\
Adapted text:\n"
    )
}
