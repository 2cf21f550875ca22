use serde::{Deserialize, Serialize};

/// Paired (x, y) sequence for handoff to a line-plotting renderer.
/// x values are day indices, y values the series being plotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPair {
    pub x: Vec<usize>,
    pub y: Vec<f64>,
}

impl SeriesPair {
    pub fn empty() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Pair values with the default x axis 1..=n.
    pub fn from_values(y: Vec<f64>) -> Self {
        Self {
            x: (1..=y.len()).collect(),
            y,
        }
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }
}
