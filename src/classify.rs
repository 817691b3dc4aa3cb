use std::fmt;

/// Discrete sentiment band a polarity score falls into.
///
/// Bands carry the display metadata (label, emoji, color) a rendering
/// surface needs; they are derived from scores on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBand {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentBand {
    /// Classify a polarity score with the canonical five-band thresholds.
    ///
    /// Scores outside [-1, 1] are clamped first, so this is total over f64.
    pub fn from_polarity(polarity: f64) -> Self {
        let polarity = polarity.clamp(-1.0, 1.0);

        if polarity >= 0.6 {
            SentimentBand::VeryPositive
        } else if polarity >= 0.2 {
            SentimentBand::Positive
        } else if polarity <= -0.6 {
            SentimentBand::VeryNegative
        } else if polarity <= -0.2 {
            SentimentBand::Negative
        } else {
            SentimentBand::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentBand::VeryPositive => "Very Positive",
            SentimentBand::Positive => "Positive",
            SentimentBand::Neutral => "Neutral",
            SentimentBand::Negative => "Negative",
            SentimentBand::VeryNegative => "Very Negative",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            SentimentBand::VeryPositive => "😊",
            SentimentBand::Positive => "🙂",
            SentimentBand::Neutral => "😐",
            SentimentBand::Negative => "🙁",
            SentimentBand::VeryNegative => "😢",
        }
    }

    /// Display color for this band, as a hex RGB string.
    pub fn color(self) -> &'static str {
        match self {
            SentimentBand::VeryPositive => "#28a745",
            SentimentBand::Positive => "#7fb800",
            SentimentBand::Neutral => "#ffc107",
            SentimentBand::Negative => "#ff6b6b",
            SentimentBand::VeryNegative => "#dc3545",
        }
    }
}

impl fmt::Display for SentimentBand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Banding policy applied to polarity scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// The canonical five-band thresholds.
    FiveBand,
    /// Legacy three-band mode: only the sign of the score matters.
    ThreeBand,
}

impl Default for Policy {
    fn default() -> Self {
        Policy::FiveBand
    }
}

impl Policy {
    pub fn classify(self, polarity: f64) -> SentimentBand {
        match self {
            Policy::FiveBand => SentimentBand::from_polarity(polarity),
            Policy::ThreeBand => {
                let polarity = polarity.clamp(-1.0, 1.0);

                if polarity > 0.0 {
                    SentimentBand::Positive
                } else if polarity < 0.0 {
                    SentimentBand::Negative
                } else {
                    SentimentBand::Neutral
                }
            }
        }
    }
}

/// How opinionated a text reads, derived from its subjectivity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectivityTier {
    HighlySubjective,
    Mixed,
    Objective,
}

impl SubjectivityTier {
    /// Scores outside [0, 1] are clamped first.
    pub fn from_subjectivity(subjectivity: f64) -> Self {
        let subjectivity = subjectivity.clamp(0.0, 1.0);

        if subjectivity > 0.7 {
            SubjectivityTier::HighlySubjective
        } else if subjectivity > 0.3 {
            SubjectivityTier::Mixed
        } else {
            SubjectivityTier::Objective
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SubjectivityTier::HighlySubjective => "highly subjective",
            SubjectivityTier::Mixed => "mixed",
            SubjectivityTier::Objective => "objective",
        }
    }
}

impl fmt::Display for SubjectivityTier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_band_boundaries() {
        assert_eq!(SentimentBand::from_polarity(1.0), SentimentBand::VeryPositive);
        assert_eq!(SentimentBand::from_polarity(0.6), SentimentBand::VeryPositive);
        assert_eq!(SentimentBand::from_polarity(0.59), SentimentBand::Positive);
        assert_eq!(SentimentBand::from_polarity(0.2), SentimentBand::Positive);
        assert_eq!(SentimentBand::from_polarity(0.19), SentimentBand::Neutral);
        assert_eq!(SentimentBand::from_polarity(0.0), SentimentBand::Neutral);
        assert_eq!(SentimentBand::from_polarity(-0.19), SentimentBand::Neutral);
        assert_eq!(SentimentBand::from_polarity(-0.2), SentimentBand::Negative);
        assert_eq!(SentimentBand::from_polarity(-0.59), SentimentBand::Negative);
        assert_eq!(SentimentBand::from_polarity(-0.6), SentimentBand::VeryNegative);
        assert_eq!(SentimentBand::from_polarity(-1.0), SentimentBand::VeryNegative);
    }

    #[test]
    fn bands_cover_the_domain_without_gaps_or_overlaps() {
        // sweeping upwards, the band rank must move monotonically from
        // VeryNegative to VeryPositive, touching every band on the way
        let mut previous = SentimentBand::VeryNegative as u8;
        for i in -1000..=1000 {
            let band = SentimentBand::from_polarity(f64::from(i) / 1000.0);
            let rank = band as u8;
            assert!(rank <= previous, "bands went backwards at {}", i);
            previous = rank;
        }
        assert_eq!(previous, SentimentBand::VeryPositive as u8);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        assert_eq!(SentimentBand::from_polarity(2.0), SentimentBand::VeryPositive);
        assert_eq!(SentimentBand::from_polarity(-7.5), SentimentBand::VeryNegative);
    }

    #[test]
    fn three_band_splits_on_sign() {
        assert_eq!(Policy::ThreeBand.classify(0.001), SentimentBand::Positive);
        assert_eq!(Policy::ThreeBand.classify(0.0), SentimentBand::Neutral);
        assert_eq!(Policy::ThreeBand.classify(-0.001), SentimentBand::Negative);
    }

    #[test]
    fn five_band_is_the_default_policy() {
        assert_eq!(Policy::default(), Policy::FiveBand);
        assert_eq!(Policy::default().classify(0.6), SentimentBand::VeryPositive);
    }

    #[test]
    fn subjectivity_tiers() {
        assert_eq!(
            SubjectivityTier::from_subjectivity(0.8).label(),
            "highly subjective"
        );
        assert_eq!(SubjectivityTier::from_subjectivity(0.5).label(), "mixed");
        assert_eq!(SubjectivityTier::from_subjectivity(0.1).label(), "objective");
    }

    #[test]
    fn subjectivity_boundaries_are_exclusive() {
        assert_eq!(
            SubjectivityTier::from_subjectivity(0.7),
            SubjectivityTier::Mixed
        );
        assert_eq!(
            SubjectivityTier::from_subjectivity(0.3),
            SubjectivityTier::Objective
        );
    }

    #[test]
    fn display_uses_the_label() {
        assert_eq!(SentimentBand::VeryPositive.to_string(), "Very Positive");
        assert_eq!(SubjectivityTier::Mixed.to_string(), "mixed");
    }
}
