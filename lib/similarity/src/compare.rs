//! Comparison service
//!
//! Scores one baseline header against any number of candidate headers.
//! Validation happens up front so a bad request never produces partial
//! results, and every failure is a client-input [`Error`] for that request
//! only.

use crate::aggregate::{aggregate_distance, explain_distance, DistanceBreakdown};
use colsim_core::{Error, HeaderInput, HeaderTokenizer, Result, TokenList, TokenizerConfig};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score every candidate against the baseline.
///
/// The i-th score belongs to the i-th candidate. Candidates are scored in
/// parallel; an empty candidate is a valid comparison against an empty row.
pub fn compare<B, C>(baseline: &[B], candidates: &[Vec<C>]) -> Result<Vec<usize>>
where
    B: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    validate(baseline, candidates.len())?;

    Ok(candidates
        .par_iter()
        .map(|candidate| aggregate_distance(baseline, candidate))
        .collect())
}

/// Like [`compare`], keeping the full breakdown of each candidate's score
pub fn compare_explained<B, C>(baseline: &[B], candidates: &[Vec<C>]) -> Result<Vec<DistanceBreakdown>>
where
    B: AsRef<str> + Sync,
    C: AsRef<str> + Sync,
{
    validate(baseline, candidates.len())?;

    Ok(candidates
        .par_iter()
        .map(|candidate| explain_distance(baseline, candidate))
        .collect())
}

fn validate<B>(baseline: &[B], candidate_count: usize) -> Result<()> {
    if baseline.is_empty() {
        return Err(Error::EmptyBaseline);
    }
    if candidate_count == 0 {
        return Err(Error::MissingField("compare".to_string()));
    }
    Ok(())
}

/// A comparison request as sent by clients
///
/// Field names follow the JSON API (`baseline`, `compare`, `separator`,
/// `commentPrefix`); the capitalised `Baseline` / `Compare` spellings are
/// accepted too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    /// The header every candidate is compared to
    #[serde(default, alias = "Baseline", skip_serializing_if = "Option::is_none")]
    pub baseline: Option<HeaderInput>,

    /// Candidate headers; `null` entries are reported as missing
    #[serde(default, alias = "Compare", skip_serializing_if = "Option::is_none")]
    pub compare: Option<Vec<Option<HeaderInput>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_prefix: Option<String>,
}

/// Scores for one request, aligned with the request's candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonOutcome {
    pub scores: Vec<usize>,
    /// Present when the caller asked for an explanation
    pub breakdowns: Option<Vec<DistanceBreakdown>>,
}

impl ComparisonRequest {
    pub fn new<B: Into<HeaderInput>>(baseline: B, compare: Vec<HeaderInput>) -> Self {
        Self {
            baseline: Some(baseline.into()),
            compare: Some(compare.into_iter().map(Some).collect()),
            separator: None,
            comment_prefix: None,
        }
    }

    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = Some(separator.to_string());
        self
    }

    pub fn with_comment_prefix(mut self, prefix: &str) -> Self {
        self.comment_prefix = Some(prefix.to_string());
        self
    }

    /// Tokenizer settings carried in the request body
    pub fn tokenizer_config(&self) -> Result<TokenizerConfig> {
        TokenizerConfig::from_parts(self.separator.as_deref(), self.comment_prefix.as_deref())
    }

    /// Run the comparison with the request's own tokenizer settings.
    pub fn execute(&self) -> Result<ComparisonOutcome> {
        self.execute_with(self.tokenizer_config()?, false)
    }

    /// Run the comparison with explicit tokenizer settings.
    ///
    /// Checks run in this order: required fields, tokenizer settings,
    /// baseline, candidates. Nothing is scored unless all of them pass.
    pub fn execute_with(&self, config: TokenizerConfig, explain: bool) -> Result<ComparisonOutcome> {
        let baseline = self.baseline_input()?;
        let candidates = self.candidates()?;

        let tokenizer = HeaderTokenizer::new(config)?;

        let baseline = baseline.tokens(&tokenizer, "baseline")?;
        if baseline.is_empty() {
            return Err(Error::EmptyBaseline);
        }

        let candidates: Vec<TokenList> = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| candidate.tokens(&tokenizer, &format!("compare[{}]", i)))
            .collect::<Result<_>>()?;

        debug!(
            baseline_fields = baseline.len(),
            candidates = candidates.len(),
            "Comparing headers"
        );

        if explain {
            let breakdowns = compare_explained(&baseline, &candidates)?;
            let scores = breakdowns.iter().map(|b| b.score).collect();
            Ok(ComparisonOutcome {
                scores,
                breakdowns: Some(breakdowns),
            })
        } else {
            Ok(ComparisonOutcome {
                scores: compare(&baseline, &candidates)?,
                breakdowns: None,
            })
        }
    }

    /// Check that `baseline` and every `compare` entry are present.
    ///
    /// Runs before tokenizer settings are looked at, so a request missing a
    /// field reports `MissingField` whatever its separator says.
    pub fn check_fields(&self) -> Result<()> {
        self.baseline_input()?;
        self.candidates()?;
        Ok(())
    }

    fn baseline_input(&self) -> Result<&HeaderInput> {
        self.baseline
            .as_ref()
            .ok_or_else(|| Error::MissingField("baseline".to_string()))
    }

    fn candidates(&self) -> Result<Vec<&HeaderInput>> {
        let compare = match self.compare.as_ref() {
            Some(c) if !c.is_empty() => c,
            _ => return Err(Error::MissingField("compare".to_string())),
        };

        compare
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                candidate
                    .as_ref()
                    .ok_or_else(|| Error::MissingField(format!("compare[{}]", i)))
            })
            .collect()
    }
}
