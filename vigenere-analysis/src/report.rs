//! Per-strip analysis results and their human-readable rendering

use std::fmt;

use log::warn;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Result;
use crate::reference::ReferenceDistribution;
use crate::strip::{split_strips, CandidateRanking, FrequencyDistribution};

/// Number of ranked candidates shown per letter in the text report
const DISPLAYED_CANDIDATES: usize = 6;

/// Result of ranking one strip
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StripOutcome {
    Ranked { ranking: CandidateRanking },
    /// The strip could not be ranked; `reason` says why
    Inconclusive { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripAnalysis {
    pub index: usize,
    pub strip: String,
    pub frequencies: Option<FrequencyDistribution>,
    pub outcome: StripOutcome,
}

impl StripAnalysis {
    /// Profile, normalize and rank a single strip.
    ///
    /// Stage failures end up in [`StripOutcome::Inconclusive`].
    pub fn analyze(index: usize, strip: &str, reference: &ReferenceDistribution) -> Self {
        let frequencies = match FrequencyDistribution::profile(strip) {
            Ok(frequencies) => frequencies,
            Err(e) => return Self::inconclusive(index, strip, None, e.to_string()),
        };

        match frequencies.normalize(reference) {
            Ok(normalized) => Self {
                index,
                strip: strip.to_string(),
                outcome: StripOutcome::Ranked {
                    ranking: CandidateRanking::rank(&normalized, reference),
                },
                frequencies: Some(frequencies),
            },
            Err(e) => Self::inconclusive(index, strip, Some(frequencies), e.to_string()),
        }
    }

    fn inconclusive(
        index: usize,
        strip: &str,
        frequencies: Option<FrequencyDistribution>,
        reason: String,
    ) -> Self {
        warn!("Strip {} inconclusive: {}", index, reason);
        Self {
            index,
            strip: strip.to_string(),
            frequencies,
            outcome: StripOutcome::Inconclusive { reason },
        }
    }

    pub fn ranking(&self) -> Option<&CandidateRanking> {
        match &self.outcome {
            StripOutcome::Ranked { ranking } => Some(ranking),
            StripOutcome::Inconclusive { .. } => None,
        }
    }

    /// The strip's most frequent letter together with its ranked candidates
    pub fn dominant_hint(&self) -> Option<(char, &[char])> {
        let (letter, _) = self.frequencies.as_ref()?.dominant()?;
        let ranked = self.ranking()?.get(letter)?;
        Some((letter, ranked))
    }
}

/// Candidate rankings for every strip of one key-length guess
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub key_length: usize,
    pub strips: Vec<StripAnalysis>,
}

impl AnalysisReport {
    /// Whether every strip produced a ranking
    pub fn is_conclusive(&self) -> bool {
        self.strips.iter().all(|s| s.ranking().is_some())
    }
}

/// Split `text` for `key_length` and analyze the strips in parallel
pub fn analyze_strips(
    text: &str,
    key_length: usize,
    reference: &ReferenceDistribution,
) -> Result<AnalysisReport> {
    let strips: Vec<StripAnalysis> = split_strips(text, key_length)?
        .par_iter()
        .enumerate()
        .map(|(index, strip)| StripAnalysis::analyze(index, strip, reference))
        .collect();

    Ok(AnalysisReport { key_length, strips })
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Key length: {}", self.key_length)?;

        for strip in &self.strips {
            writeln!(f)?;
            writeln!(
                f,
                "Strip {} ({} letters): {}",
                strip.index,
                strip.strip.chars().count(),
                strip.strip
            )?;

            match &strip.outcome {
                StripOutcome::Ranked { ranking } => {
                    for (letter, ranked) in ranking.iter() {
                        let percentage = strip
                            .frequencies
                            .as_ref()
                            .and_then(|frequencies| frequencies.get(letter))
                            .unwrap_or(0.0);
                        let shown: String = ranked.iter().take(DISPLAYED_CANDIDATES).collect();
                        writeln!(f, "  {} {:>7.3}% -> {}", letter, percentage, shown)?;
                    }
                }
                StripOutcome::Inconclusive { reason } => {
                    writeln!(f, "  analysis inconclusive: {}", reason)?;
                }
            }
        }

        Ok(())
    }
}
