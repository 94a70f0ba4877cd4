use crate::error::CoreError;

/// Type of a detected divergence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceType {
    /// Primary made a lower low the secondary did not confirm (bullish)
    Up,
    /// Primary made a higher high the secondary did not confirm (bearish)
    Down,
}

impl DivergenceType {
    /// Returns the name used in labels.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DivergenceType::Up => "Up",
            DivergenceType::Down => "Down",
        }
    }

    /// Line direction a divergence of this type is validated against.
    #[must_use]
    pub fn direction(&self) -> Direction {
        match self {
            DivergenceType::Up => Direction::Up,
            DivergenceType::Down => Direction::Down,
        }
    }
}

impl std::fmt::Display for DivergenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of a reference line a series has to stay on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// No constraint
    #[default]
    None,
    /// Values must stay on or above the line
    Up,
    /// Values must stay on or below the line
    Down,
}

/// One detected divergence between two series.
///
/// Always satisfies `start_index < end_index`; the only way to build one is
/// through [`Divergence::new`] (deserialization goes through it as well).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "DivergenceRaw")]
pub struct Divergence {
    kind: DivergenceType,
    start_index: usize,
    end_index: usize,
}

#[derive(Debug, Clone, Copy, serde::Deserialize)]
struct DivergenceRaw {
    kind: DivergenceType,
    start_index: usize,
    end_index: usize,
}

impl TryFrom<DivergenceRaw> for Divergence {
    type Error = CoreError;

    fn try_from(raw: DivergenceRaw) -> Result<Self, Self::Error> {
        Divergence::new(raw.kind, raw.start_index, raw.end_index)
    }
}

impl Divergence {
    /// Creates a divergence spanning `start_index..=end_index`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRange`] when `start_index >= end_index`.
    pub fn new(kind: DivergenceType, start_index: usize, end_index: usize) -> Result<Self, CoreError> {
        if start_index >= end_index {
            return Err(CoreError::InvalidRange {
                start: start_index,
                end: end_index,
            });
        }
        Ok(Self {
            kind,
            start_index,
            end_index,
        })
    }

    /// Divergence type.
    #[must_use]
    pub fn kind(&self) -> DivergenceType {
        self.kind
    }

    /// Bar index where the divergence starts.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Bar index where the divergence ends (the evaluated bar).
    #[must_use]
    pub fn end_index(&self) -> usize {
        self.end_index
    }

    /// Number of bars between start and end.
    #[must_use]
    pub fn bars_in_between(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Deterministic key, e.g. `"Up 12 40"`.
    ///
    /// Equal divergences always produce equal labels, so sinks can use it to
    /// deduplicate drawn or stored artifacts.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {} {}", self.kind, self.start_index, self.end_index)
    }
}
