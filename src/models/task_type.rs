use serde::{Deserialize, Serialize};

/// A loggable work category and its fixed handling time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskType {
    pub name: String,
    /// Minutes per unit, frozen into each row at insert time.
    pub minutes_per_task: f64,
}

impl TaskType {
    pub fn new(name: &str, minutes_per_task: f64) -> Self {
        Self {
            name: name.to_string(),
            minutes_per_task,
        }
    }
}

/// Ordered, closed set of task types known to the entry form.
///
/// The catalog is injected (from config) into every place that needs the
/// per-type minutes, so alternate catalogs can be used in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCatalog {
    types: Vec<TaskType>,
}

impl TaskCatalog {
    pub fn new(types: Vec<TaskType>) -> Self {
        Self { types }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskType> {
        self.types.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.name.as_str())
    }

    /// Exact (case-sensitive) lookup.
    pub fn get(&self, name: &str) -> Option<&TaskType> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn minutes_for(&self, name: &str) -> Option<f64> {
        self.get(name).map(|t| t.minutes_per_task)
    }

    /// Lookup used for CLI input: exact match first, then case-insensitive.
    pub fn resolve(&self, input: &str) -> Option<&TaskType> {
        let input = input.trim();
        self.get(input).or_else(|| {
            self.types
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(input))
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::new(vec![
            TaskType::new("Calls", 10.67),
            TaskType::new("Emails", 3.0),
            TaskType::new("Applications", 5.0),
            TaskType::new("EP Cases", 5.0),
            TaskType::new("TT Cases", 5.0),
            TaskType::new("Push Refund TT", 5.0),
            TaskType::new("No Activity/Future Review/Account Review", 0.0),
        ])
    }
}
