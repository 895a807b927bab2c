//! Weighted grade computation and GPA aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A single scored item (assignment or exam) inside a grade record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreItem {
    pub title: String,
    pub score: f64,
    pub max_score: f64,
    pub weight: f64,
    pub date: Option<chrono::NaiveDateTime>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    /// Band a 0-100 percentage into a letter. Lower bounds are inclusive.
    pub fn from_percentage(pct: f64) -> Self {
        match pct {
            p if p >= 97.0 => Self::APlus,
            p if p >= 93.0 => Self::A,
            p if p >= 90.0 => Self::AMinus,
            p if p >= 87.0 => Self::BPlus,
            p if p >= 83.0 => Self::B,
            p if p >= 80.0 => Self::BMinus,
            p if p >= 77.0 => Self::CPlus,
            p if p >= 73.0 => Self::C,
            p if p >= 70.0 => Self::CMinus,
            p if p >= 67.0 => Self::DPlus,
            p if p >= 60.0 => Self::D,
            _ => Self::F,
        }
    }

    pub fn gpa_points(&self) -> f64 {
        match self {
            Self::APlus | Self::A => 4.0,
            Self::AMinus => 3.7,
            Self::BPlus => 3.3,
            Self::B => 3.0,
            Self::BMinus => 2.7,
            Self::CPlus => 2.3,
            Self::C => 2.0,
            Self::CMinus => 1.7,
            Self::DPlus => 1.3,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LetterGrade {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GradeError {
    ZeroMaxScore { title: String },
}

impl fmt::Display for GradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxScore { title } => {
                write!(f, "max_score must be greater than zero for '{title}'")
            }
        }
    }
}

impl std::error::Error for GradeError {}

/// Weighted average over all items, divided by the raw sum of weights.
/// Weights are not normalized: entering weights that sum to less than 100
/// deflates the final percentage accordingly.
pub fn compute_final_grade(
    assignments: &[ScoreItem],
    exams: &[ScoreItem],
) -> Result<(f64, LetterGrade), GradeError> {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for item in assignments.iter().chain(exams) {
        if item.max_score <= 0.0 {
            return Err(GradeError::ZeroMaxScore {
                title: item.title.clone(),
            });
        }
        weighted += (item.score / item.max_score) * item.weight;
        total_weight += item.weight;
    }
    if total_weight == 0.0 {
        return Ok((0.0, LetterGrade::F));
    }
    let pct = weighted / total_weight * 100.0;
    Ok((pct, LetterGrade::from_percentage(pct)))
}

/// Arithmetic mean of GPA points. A record with no letter grade counts as 0.0.
/// Returns None for an empty term so callers can distinguish "no records"
/// from a genuine 0.0 average.
pub fn compute_gpa(letters: impl IntoIterator<Item = Option<LetterGrade>>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for letter in letters {
        sum += letter.map(|l| l.gpa_points()).unwrap_or(0.0);
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, score: f64, max: f64, weight: f64) -> ScoreItem {
        ScoreItem {
            title: title.to_string(),
            score,
            max_score: max,
            weight,
            date: None,
        }
    }

    #[test]
    fn weighted_average_uses_raw_weight_sum() {
        let assignments = vec![item("hw1", 80.0, 100.0, 30.0)];
        let exams = vec![item("midterm", 90.0, 100.0, 70.0)];
        let (pct, letter) = compute_final_grade(&assignments, &exams).unwrap();
        assert!((pct - 87.0).abs() < 1e-9);
        assert_eq!(letter, LetterGrade::BPlus);
    }

    #[test]
    fn partial_weights_deflate_nothing() {
        // weights summing to 50 still divide by 50, not 100
        let assignments = vec![item("hw1", 90.0, 100.0, 20.0), item("hw2", 80.0, 100.0, 30.0)];
        let (pct, _) = compute_final_grade(&assignments, &[]).unwrap();
        let expected = (0.9 * 20.0 + 0.8 * 30.0) / 50.0 * 100.0;
        assert!((pct - expected).abs() < 1e-9);
    }

    #[test]
    fn mixed_items_band_to_b() {
        // 86.5 sits below the 87.0 B+ cutoff
        let assignments = vec![item("hw", 85.0, 100.0, 50.0)];
        let exams = vec![item("final", 88.0, 100.0, 50.0)];
        let (pct, letter) = compute_final_grade(&assignments, &exams).unwrap();
        assert!((pct - 86.5).abs() < 1e-9);
        assert_eq!(letter, LetterGrade::B);
    }

    #[test]
    fn zero_total_weight_yields_zero_and_f() {
        let (pct, letter) = compute_final_grade(&[], &[]).unwrap();
        assert_eq!(pct, 0.0);
        assert_eq!(letter, LetterGrade::F);

        let zero = vec![item("practice", 50.0, 100.0, 0.0)];
        let (pct, letter) = compute_final_grade(&zero, &[]).unwrap();
        assert_eq!(pct, 0.0);
        assert_eq!(letter, LetterGrade::F);
    }

    #[test]
    fn zero_max_score_is_rejected() {
        let bad = vec![item("quiz", 5.0, 0.0, 10.0)];
        let err = compute_final_grade(&bad, &[]).unwrap_err();
        assert_eq!(
            err,
            GradeError::ZeroMaxScore {
                title: "quiz".to_string()
            }
        );
    }

    #[test]
    fn banding_boundaries() {
        assert_eq!(LetterGrade::from_percentage(97.0), LetterGrade::APlus);
        assert_eq!(LetterGrade::from_percentage(96.999), LetterGrade::A);
        assert_eq!(LetterGrade::from_percentage(93.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_percentage(90.0), LetterGrade::AMinus);
        assert_eq!(LetterGrade::from_percentage(87.0), LetterGrade::BPlus);
        assert_eq!(LetterGrade::from_percentage(83.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_percentage(80.0), LetterGrade::BMinus);
        assert_eq!(LetterGrade::from_percentage(77.0), LetterGrade::CPlus);
        assert_eq!(LetterGrade::from_percentage(73.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_percentage(70.0), LetterGrade::CMinus);
        assert_eq!(LetterGrade::from_percentage(67.0), LetterGrade::DPlus);
        assert_eq!(LetterGrade::from_percentage(60.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_percentage(59.999), LetterGrade::F);
        assert_eq!(LetterGrade::from_percentage(0.0), LetterGrade::F);
    }

    #[test]
    fn banding_is_monotonic() {
        let mut last = LetterGrade::from_percentage(0.0).gpa_points();
        for tenth in 0..=1000 {
            let pct = tenth as f64 / 10.0;
            let points = LetterGrade::from_percentage(pct).gpa_points();
            assert!(points >= last, "gpa points regressed at {pct}");
            last = points;
        }
    }

    #[test]
    fn gpa_is_arithmetic_mean() {
        let gpa = compute_gpa(vec![
            Some(LetterGrade::A),
            Some(LetterGrade::BMinus),
        ])
        .unwrap();
        assert!((gpa - 3.35).abs() < 1e-9);
    }

    #[test]
    fn gpa_counts_missing_letters_as_zero() {
        let gpa = compute_gpa(vec![Some(LetterGrade::A), None]).unwrap();
        assert!((gpa - 2.0).abs() < 1e-9);
    }

    #[test]
    fn gpa_of_empty_term_is_none() {
        assert_eq!(compute_gpa(std::iter::empty()), None);
    }

    #[test]
    fn letter_serde_uses_display_form() {
        let json = serde_json::to_string(&LetterGrade::APlus).unwrap();
        assert_eq!(json, "\"A+\"");
        let back: LetterGrade = serde_json::from_str("\"B-\"").unwrap();
        assert_eq!(back, LetterGrade::BMinus);
    }
}
