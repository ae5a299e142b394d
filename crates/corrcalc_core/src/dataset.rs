//! User-entered sample collector.
//!
//! A `Dataset` is an ordered list of finite numbers for one variable. Order
//! matters: values pair positionally with the other dataset when sent to the
//! service.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    label: String,
    values: Vec<f64>,
}

impl Dataset {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
        }
    }

    /// Appends `value` if it is finite. Returns whether it was kept.
    pub fn append(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Parses raw user input and appends it.
    ///
    /// Input that does not parse as a finite number leaves the dataset
    /// untouched.
    pub fn append_input(&mut self, input: &str) -> bool {
        match input.trim().parse::<f64>() {
            Ok(value) => self.append(value),
            Err(_) => false,
        }
    }

    /// Removes the value at `index`, shifting later values down.
    /// Out-of-range indices are ignored.
    pub fn remove_at(&mut self, index: usize) -> Option<f64> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Extend<f64> for Dataset {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}
