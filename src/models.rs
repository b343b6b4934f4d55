use serde::{Deserialize, Serialize};

/// One labeled value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub label: String,
    pub value: f64,
}

/// Ordered (label, value) pairs collected in one session.
///
/// Stored as pairs so labels and values can never drift apart in length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    entries: Vec<DataEntry>,
}

impl DataSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.entries.push(DataEntry {
            label: label.into(),
            value,
        });
    }

    pub fn entries(&self) -> &[DataEntry] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for DataSeries {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let mut s = DataSeries::new();
        for (label, value) in iter {
            s.push(label, value);
        }
        s
    }
}

/// Per-slice offsets for a pie chart: all zero, or `0.1` at one 1-based slice.
///
/// A slice number outside `1..=n` leaves every offset at zero.
pub fn explode_offsets(n: usize, slice: Option<usize>) -> Vec<f64> {
    let mut out = vec![0.0; n];
    if let Some(i) = slice.and_then(|s| s.checked_sub(1))
        && let Some(v) = out.get_mut(i)
    {
        *v = 0.1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_values_stay_paired() {
        let s: DataSeries = [("A", 1.0), ("B", 2.0)].into_iter().collect();
        assert_eq!(s.labels(), vec!["A", "B"]);
        assert_eq!(s.values(), vec![1.0, 2.0]);
    }

    #[test]
    fn explode_marks_one_slice() {
        assert_eq!(explode_offsets(3, None), vec![0.0, 0.0, 0.0]);
        assert_eq!(explode_offsets(3, Some(2)), vec![0.0, 0.1, 0.0]);
        assert_eq!(explode_offsets(3, Some(0)), vec![0.0, 0.0, 0.0]);
        assert_eq!(explode_offsets(3, Some(4)), vec![0.0, 0.0, 0.0]);
    }
}
