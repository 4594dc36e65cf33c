//! Core domain types and the risk scoring model for medrisk.
//!
//! This crate provides the types shared across the service:
//!
//! - [`SymptomReport`] — The per-request symptom input
//! - [`RiskResult`] and [`RiskLabel`] — The classification output
//! - [`RiskModel`] — Coefficient table and scoring function
//!
//! # Example
//!
//! ```rust
//! use medrisk_core::{RiskModel, SymptomReport};
//!
//! let report = SymptomReport { fever: true, cough: false, headache: false };
//! let result = RiskModel::default().compute(&report);
//!
//! assert_eq!(result.confidence, 0.57);
//! ```

use serde::{Deserialize, Serialize};

/// A single symptom report, constructed fresh from each request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SymptomReport {
    /// Whether the patient reports a fever.
    pub fever: bool,
    /// Whether the patient reports a cough.
    pub cough: bool,
    /// Whether the patient reports a headache.
    pub headache: bool,
}

/// Discrete risk classification attached to a scored report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLabel {
    /// Probability at or above the decision threshold.
    #[serde(rename = "Likely Sick")]
    LikelySick,
    /// Probability below the decision threshold.
    #[serde(rename = "Low Risk")]
    LowRisk,
}

/// Result of scoring one symptom report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskResult {
    /// Discrete classification label.
    pub prediction: RiskLabel,
    /// Probability-like score in [0, 1], rounded to two decimal places.
    pub confidence: f64,
}

/// Logistic-regression style coefficient table for symptom scoring.
///
/// The default coefficients are fixed rather than trained; the table is
/// held in server state and passed into [`compute`](RiskModel::compute)
/// so a trained replacement can be swapped in without touching the
/// endpoint wiring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskModel {
    /// Baseline log-odds when no symptoms are present.
    pub intercept: f64,
    /// Added to the score when `fever` is set.
    pub fever_weight: f64,
    /// Added to the score when `cough` is set.
    pub cough_weight: f64,
    /// Added to the score when `headache` is set.
    pub headache_weight: f64,
}

/// Probability at or above which a report is labeled [`RiskLabel::LikelySick`].
pub const RISK_THRESHOLD: f64 = 0.5;

impl Default for RiskModel {
    fn default() -> Self {
        Self {
            intercept: -1.2,
            fever_weight: 1.5,
            cough_weight: 0.9,
            headache_weight: 0.6,
        }
    }
}

impl RiskModel {
    /// Scores a symptom report.
    ///
    /// Accumulates the weights of the symptoms that are present on top
    /// of the intercept (absent symptoms contribute nothing), maps the
    /// sum through the logistic function, and labels the report
    /// `Likely Sick` when the probability reaches [`RISK_THRESHOLD`]
    /// (the boundary itself labels sick). The reported confidence is
    /// rounded to two decimals with `f64::round` semantics, i.e. half
    /// away from zero; the label is decided on the unrounded value.
    ///
    /// Total over its input: never fails, no side effects.
    pub fn compute(&self, report: &SymptomReport) -> RiskResult {
        let mut sum = self.intercept;
        if report.fever {
            sum += self.fever_weight;
        }
        if report.cough {
            sum += self.cough_weight;
        }
        if report.headache {
            sum += self.headache_weight;
        }

        let probability = logistic(sum);
        let prediction = if probability >= RISK_THRESHOLD {
            RiskLabel::LikelySick
        } else {
            RiskLabel::LowRisk
        };

        RiskResult {
            prediction,
            confidence: round2(probability),
        }
    }
}

/// Maps any finite input into the open interval (0, 1).
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
