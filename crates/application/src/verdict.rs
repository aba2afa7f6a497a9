//! Judge-verdict interpreter
//!
//! Judges are asked for bare JSON but routinely wrap it in markdown
//! code fences or answer with prose. Verification is best-effort, so a
//! response that cannot be parsed maps to a fixed fallback verdict
//! instead of an error; the fallback path is first-class behavior.

use serde::Deserialize;
use tracing::debug;

/// Score reported when a judge response cannot be parsed
pub const FALLBACK_SCORE: u8 = 85;

/// Feedback reported when a judge response cannot be parsed
pub const FALLBACK_FEEDBACK: &str = "Nie udało się przeanalizować odpowiedzi";

/// Parsed outcome of a verification judge call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Score 0-100
    pub score: u8,
    /// Ordered feedback remarks
    pub feedback: Vec<String>,
}

impl Verdict {
    /// The fixed fallback verdict
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            score: FALLBACK_SCORE,
            feedback: vec![FALLBACK_FEEDBACK.to_string()],
        }
    }
}

/// Wire shape judges are instructed to answer with
///
/// The score is accepted as any JSON number; judges occasionally
/// answer with fractions despite being asked for an integer.
#[derive(Debug, Deserialize)]
struct RawVerdict {
    score: f64,
    feedback: Vec<String>,
}

/// Strip markdown code-fence markers from a judge response
fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Extract a verdict from free-form judge output
///
/// Never fails: malformed JSON, missing fields, or non-JSON content all
/// yield [`Verdict::fallback`]. Scores outside 0-100 are clamped.
#[must_use]
pub fn parse_verdict(raw: &str) -> Verdict {
    let cleaned = strip_code_fences(raw);

    match serde_json::from_str::<RawVerdict>(&cleaned) {
        Ok(parsed) => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let score = parsed.score.round().clamp(0.0, 100.0) as u8;
            Verdict {
                score,
                feedback: parsed.feedback,
            }
        },
        Err(e) => {
            debug!(error = %e, "Judge response could not be parsed, using fallback verdict");
            Verdict::fallback()
        },
    }
}
