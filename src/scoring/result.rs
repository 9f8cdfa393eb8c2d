// The common shape every scorer and adapter produces.

use serde::Serialize;

/// How a detail entry should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    Neutral,
}

impl Tone {
    /// Tone for a category's net point contribution.
    pub fn from_points(points: i32) -> Self {
        match points {
            p if p > 0 => Tone::Positive,
            p if p < 0 => Tone::Negative,
            _ => Tone::Neutral,
        }
    }
}

/// One line of the human-readable breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    pub title: String,
    pub value: String,
    pub tone: Tone,
}

impl DetailEntry {
    pub fn new(title: impl Into<String>, value: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            tone,
        }
    }
}

/// Insertion-ordered set of flag labels.
///
/// Inserting a label that is already present is a no-op, so the same rule
/// label emitted by two categories shows up once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlagSet(Vec<String>);

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a label, returning false if it was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.0.contains(&label) {
            return false;
        }
        self.0.push(label);
        true
    }

    pub fn extend<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.insert(label);
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Points, flags and details contributed by one category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PartialResult {
    pub points: i32,
    pub red_flags: FlagSet,
    pub green_flags: FlagSet,
    pub details: Vec<DetailEntry>,
}

impl PartialResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a matched rule. The sign of `delta` decides which flag set
    /// the label lands in; a zero delta records nothing.
    pub fn record(&mut self, delta: i32, label: impl Into<String>) {
        self.points += delta;
        if delta < 0 {
            self.red_flags.insert(label);
        } else if delta > 0 {
            self.green_flags.insert(label);
        }
    }

    /// Append the category summary, toned by the net points so far.
    pub fn summarize(&mut self, title: impl Into<String>, value: impl Into<String>) {
        let tone = Tone::from_points(self.points);
        self.details.push(DetailEntry::new(title, value, tone));
    }

    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}
