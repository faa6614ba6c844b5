use serde::{Deserialize, Serialize};

/// The four optional numeric fields carried by every entry.
///
/// The store does not attach any meaning to them: labels and units
/// (urine, stoma, water, walking) live in the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measures {
    pub value1: Option<f64>,
    pub value2: Option<f64>,
    pub value3: Option<f64>,
    pub value4: Option<f64>,
}

impl Measures {
    pub const COUNT: usize = 4;

    pub fn new(
        value1: Option<f64>,
        value2: Option<f64>,
        value3: Option<f64>,
        value4: Option<f64>,
    ) -> Self {
        Self {
            value1,
            value2,
            value3,
            value4,
        }
    }

    pub fn from_array(values: [Option<f64>; 4]) -> Self {
        let [value1, value2, value3, value4] = values;
        Self::new(value1, value2, value3, value4)
    }

    pub fn to_array(self) -> [Option<f64>; 4] {
        [self.value1, self.value2, self.value3, self.value4]
    }

    /// True when at least one field holds a value.
    pub fn has_any(&self) -> bool {
        self.to_array().iter().any(Option::is_some)
    }
}

/// Per-field sums; absent values count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub value1: f64,
    pub value2: f64,
    pub value3: f64,
    pub value4: f64,
}

impl Totals {
    pub fn new(value1: f64, value2: f64, value3: f64, value4: f64) -> Self {
        Self {
            value1,
            value2,
            value3,
            value4,
        }
    }

    pub fn add(&mut self, m: &Measures) {
        self.value1 += m.value1.unwrap_or(0.0);
        self.value2 += m.value2.unwrap_or(0.0);
        self.value3 += m.value3.unwrap_or(0.0);
        self.value4 += m.value4.unwrap_or(0.0);
    }

    pub fn merge(&mut self, other: &Totals) {
        self.value1 += other.value1;
        self.value2 += other.value2;
        self.value3 += other.value3;
        self.value4 += other.value4;
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.value1, self.value2, self.value3, self.value4]
    }
}
