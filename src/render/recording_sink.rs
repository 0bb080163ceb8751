use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::PresentationSink;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyWrite {
    pub name: String,
    pub value: f64,
}

/// Keeps every write plus the latest value per property, in first-write order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct RecordingSink {
    history: Vec<PropertyWrite>,
    latest: IndexMap<String, f64>,
}

impl RecordingSink {
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        self.latest.get(name).copied()
    }

    #[must_use]
    pub fn history(&self) -> &[PropertyWrite] {
        &self.history
    }

    #[must_use]
    pub fn values_for(&self, name: &str) -> Vec<f64> {
        self.history
            .iter()
            .filter(|write| write.name == name)
            .map(|write| write.value)
            .collect()
    }

    #[must_use]
    pub fn properties(&self) -> Vec<&str> {
        self.latest.keys().map(String::as_str).collect()
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.latest.clear();
    }
}

impl PresentationSink for RecordingSink {
    fn set_property(&mut self, name: &str, value: f64) {
        self.history.push(PropertyWrite {
            name: name.to_owned(),
            value,
        });
        self.latest.insert(name.to_owned(), value);
    }
}
