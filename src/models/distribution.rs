use serde::Serialize;

/// Which attribute a distribution was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    Profession,
    Gender,
    Age,
}

impl DistributionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionKind::Profession => "profession",
            DistributionKind::Gender => "gender",
            DistributionKind::Age => "age",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionEntry {
    pub label: String,
    pub count: usize,
}

/// Ordered `(label, count)` pairs, ready to be charted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub kind: DistributionKind,
    pub entries: Vec<DistributionEntry>,
}

impl Distribution {
    pub fn new(kind: DistributionKind, entries: Vec<DistributionEntry>) -> Self {
        Self { kind, entries }
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn first(&self) -> Option<&DistributionEntry> {
        self.entries.first()
    }

    /// Pairs as plain tuples, handy for assertions and exports.
    pub fn pairs(&self) -> Vec<(String, usize)> {
        self.entries
            .iter()
            .map(|e| (e.label.clone(), e.count))
            .collect()
    }

    pub fn max_count(&self) -> usize {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }
}
