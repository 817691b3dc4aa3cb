use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub text: String,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Insertion-ordered log of every distinct text analyzed during a session.
///
/// Texts are compared exactly (case-sensitive, no trimming) and the first
/// submission wins: recording a known text again is a no-op, not an update.
/// Records are never removed or changed, and insertion order is the only
/// order ever exposed.
///
/// One history belongs to one session and one writer. Concurrent sessions
/// each construct their own.
#[derive(Debug, Default)]
pub struct AnalysisHistory {
    records: IndexMap<String, AnalysisRecord>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, unless this exact text has been recorded before.
    pub fn record(&mut self, text: &str, polarity: f64, subjectivity: f64) {
        if self.records.contains_key(text) {
            return;
        }

        self.records.insert(
            text.to_owned(),
            AnalysisRecord {
                text: text.to_owned(),
                polarity,
                subjectivity,
            },
        );
    }

    /// All records, in submission order.
    pub fn all(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.values()
    }

    pub fn get(&self, text: &str) -> Option<&AnalysisRecord> {
        self.records.get(text)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Points for a polarity/subjectivity scatter plot, labelled in
    /// submission order.
    pub fn scatter_points(&self) -> Vec<ScatterPoint> {
        self.records
            .values()
            .enumerate()
            .map(|(index, record)| ScatterPoint {
                polarity: record.polarity,
                subjectivity: record.subjectivity,
                label: format!("Item {}", index + 1),
            })
            .collect()
    }
}

/// One point of the scatter-plot feed handed to a rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: String,
}
