use chrono::NaiveDate;

/// Optional filters for the aggregated task query.
///
/// All present filters are AND-combined. An absent filter is left out of the
/// predicate entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub account_id: Option<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Exact, case-sensitive account match. An empty string means "no filter".
    pub fn account(mut self, account_id: &str) -> Self {
        self.account_id = if account_id.is_empty() {
            None
        } else {
            Some(account_id.to_string())
        };
        self
    }

    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none() && self.account_id.is_none()
    }
}
