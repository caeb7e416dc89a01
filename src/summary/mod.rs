//! Executive summaries.
//!
//! A [`Summarizer`] is an external text-completion collaborator. Whatever it
//! does, [`summarize`] always yields a summary: transport failures and
//! unparseable answers fall back to [`local_summary`].

mod local;
mod prompt;

pub use local::local_summary;
pub use prompt::{build_prompt, parse_response, PROMPT_TEXT_LIMIT};

use crate::error::Result;
use crate::model::{DocumentStructure, SummaryOutcome};

/// A remote text-completion service.
pub trait Summarizer {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Complete a prompt and return the raw response text.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Summarize a document, falling back to the local summary on any failure.
pub fn summarize(doc: &DocumentStructure, summarizer: Option<&dyn Summarizer>) -> SummaryOutcome {
    let Some(summarizer) = summarizer else {
        log::debug!("No summarizer configured, using local summary");
        return SummaryOutcome::Local(local_summary(doc));
    };

    let prompt = build_prompt(doc);
    match summarizer
        .complete(&prompt)
        .and_then(|response| parse_response(&response))
    {
        Ok(summary) => SummaryOutcome::Remote(summary),
        Err(e) => {
            log::warn!(
                "Summarizer '{}' failed, falling back to local summary: {}",
                summarizer.name(),
                e
            );
            SummaryOutcome::Local(local_summary(doc))
        }
    }
}
