//! Speech Generation Pipeline
//!
//! Linear state machine: generate, verify, score, conditionally refine,
//! humanize, finalize. Only the initial generation is fatal; every
//! later stage degrades silently and the run still produces a result.

use std::sync::Arc;

use domain::{
    ApiKeys, GenerationResult, ProviderId, SpeechParams, VerificationAspect, VerificationResult,
};
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::GenerationPort;
use crate::prompts;
use crate::verdict::parse_verdict;

/// Progress status strings emitted at stage transitions
///
/// Emitted synchronously before the corresponding network call starts.
pub mod progress {
    pub const GENERATING: &str = "Generowanie przemówienia...";
    pub const VERIFYING: &str = "Weryfikacja jakości...";
    pub const ANALYZING_STYLE: &str = "Analiza stylu...";
    pub const CHECKING_LOGIC: &str = "Sprawdzanie logiki...";
    pub const REFINING: &str = "Dopracowywanie tekstu...";
    pub const HUMANIZING: &str = "Wygładzanie tekstu...";
    pub const DONE: &str = "Gotowe!";
}

/// Score reported when no verification stage completed
const DEFAULT_SCORE: u8 = 90;

/// Refinement runs when the aggregated score falls below this
const REFINEMENT_THRESHOLD: u8 = 85;

/// Presentation bonus applied after a successful refinement
const REFINEMENT_BONUS: u8 = 5;

/// Ceiling for the boosted score
const MAX_BOOSTED_SCORE: u8 = 98;

/// Orchestrates one speech generation run
///
/// Each invocation is a fresh, independent run; the service holds no
/// state between calls and never guards concurrent invocations.
#[derive(Clone)]
pub struct SpeechService {
    generator: Arc<dyn GenerationPort>,
}

impl std::fmt::Debug for SpeechService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechService").finish_non_exhaustive()
    }
}

impl SpeechService {
    /// Create a service over a generation port
    #[must_use]
    pub fn new(generator: Arc<dyn GenerationPort>) -> Self {
        Self { generator }
    }

    /// Run the full pipeline for one set of parameters
    ///
    /// `on_progress` receives a human-readable status string before
    /// each stage's network call. With `fast_mode` the verification
    /// stage is skipped entirely.
    ///
    /// # Errors
    ///
    /// Fails only when the initial generation stage fails; all later
    /// stages are best-effort.
    #[instrument(skip(self, params, keys, on_progress), fields(topic = %params.topic, fast_mode))]
    pub async fn generate_speech<F>(
        &self,
        params: &SpeechParams,
        keys: &ApiKeys,
        on_progress: F,
        fast_mode: bool,
    ) -> Result<GenerationResult, ApplicationError>
    where
        F: Fn(&str),
    {
        params.ensure_valid()?;

        on_progress(progress::GENERATING);
        let initial = self
            .generator
            .generate(keys, &prompts::generation_prompt(params), ProviderId::Claude)
            .await?;

        let verification = if fast_mode {
            Vec::new()
        } else {
            self.verify(&initial, params, keys, &on_progress).await
        };

        let overall = Self::overall_score(&verification);

        let mut text = initial;
        let mut was_refined = false;

        if overall < REFINEMENT_THRESHOLD && !verification.is_empty() {
            on_progress(progress::REFINING);
            let feedback: Vec<String> = verification
                .iter()
                .flat_map(|r| r.feedback.iter().cloned())
                .collect();
            match self
                .generator
                .generate(
                    keys,
                    &prompts::refinement_prompt(&text, &feedback, params),
                    ProviderId::Claude,
                )
                .await
            {
                Ok(refined) => {
                    text = refined;
                    was_refined = true;
                },
                Err(e) => {
                    warn!(error = %e, "Refinement failed, keeping original text");
                },
            }
        }

        // Final polish pass, regardless of whether refinement ran
        on_progress(progress::HUMANIZING);
        match self
            .generator
            .generate(keys, &prompts::humanization_prompt(&text), ProviderId::Gemini)
            .await
        {
            Ok(polished) => text = polished,
            Err(e) => {
                debug!(error = %e, "Humanization failed, keeping previous text");
            },
        }

        on_progress(progress::DONE);

        Ok(GenerationResult::new(
            text,
            verification,
            Self::reported_score(overall, was_refined),
            was_refined,
        ))
    }

    /// Run the three verification stages, accumulating what succeeds
    async fn verify<F>(
        &self,
        speech: &str,
        params: &SpeechParams,
        keys: &ApiKeys,
        on_progress: &F,
    ) -> Vec<VerificationResult>
    where
        F: Fn(&str),
    {
        let mut results = Vec::new();

        on_progress(progress::VERIFYING);
        self.run_stage(
            VerificationAspect::Naturalness,
            keys,
            &prompts::naturalness_prompt(speech),
            ProviderId::Claude,
            &mut results,
        )
        .await;

        if keys.has_any() {
            on_progress(progress::ANALYZING_STYLE);
            self.run_stage(
                VerificationAspect::Style,
                keys,
                &prompts::style_prompt(speech, params.tone),
                ProviderId::OpenAi,
                &mut results,
            )
            .await;
        }

        if keys.has_any() {
            on_progress(progress::CHECKING_LOGIC);
            self.run_stage(
                VerificationAspect::Logic,
                keys,
                &prompts::logic_prompt(speech),
                ProviderId::Gemini,
                &mut results,
            )
            .await;
        }

        results
    }

    /// Run one judge call; a failed call contributes no result
    async fn run_stage(
        &self,
        aspect: VerificationAspect,
        keys: &ApiKeys,
        prompt: &str,
        preference: ProviderId,
        results: &mut Vec<VerificationResult>,
    ) {
        match self.generator.generate(keys, prompt, preference).await {
            Ok(raw) => {
                let verdict = parse_verdict(&raw);
                results.push(VerificationResult::new(aspect, verdict.score, verdict.feedback));
            },
            Err(e) => {
                warn!(aspect = %aspect, error = %e, "Verification stage failed, skipping");
            },
        }
    }

    /// Rounded mean of verification scores, or the default when empty
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn overall_score(results: &[VerificationResult]) -> u8 {
        if results.is_empty() {
            return DEFAULT_SCORE;
        }
        let sum: u32 = results.iter().map(|r| u32::from(r.score)).sum();
        (f64::from(sum) / results.len() as f64).round() as u8
    }

    /// Score shown to the caller; refinement earns a capped bonus
    ///
    /// A presentation heuristic, not a re-measurement.
    const fn reported_score(overall: u8, was_refined: bool) -> u8 {
        if was_refined {
            let boosted = overall + REFINEMENT_BONUS;
            if boosted > MAX_BOOSTED_SCORE { MAX_BOOSTED_SCORE } else { boosted }
        } else {
            overall
        }
    }
}
