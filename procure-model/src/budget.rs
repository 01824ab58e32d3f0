use crate::error::{ModelError, ModelResult};
use crate::ids::DepartmentId;
use procure_sort::{SortValue, Sortable};
use serde::{Deserialize, Serialize};

fn default_warn_threshold() -> f64 {
    0.9
}

/// A department's spending limit for one fiscal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetPreference {
    pub department_id: DepartmentId,
    pub fiscal_year: i32,
    pub limit: f64,
    /// Fraction of `limit` at which spending is flagged, in `0.0..=1.0`.
    #[serde(default = "default_warn_threshold")]
    pub warn_threshold: f64,
}

impl BudgetPreference {
    #[must_use]
    pub fn remaining(&self, spent: f64) -> f64 {
        self.limit - spent
    }

    #[must_use]
    pub fn is_over_threshold(&self, spent: f64) -> bool {
        spent >= self.limit * self.warn_threshold
    }

    #[must_use]
    pub fn is_exceeded(&self, spent: f64) -> bool {
        spent > self.limit
    }

    pub fn validate(&self) -> ModelResult<()> {
        if !self.limit.is_finite() || self.limit < 0.0 {
            return Err(ModelError::invalid("budget preference", "limit must be a non-negative amount"));
        }
        if !(0.0..=1.0).contains(&self.warn_threshold) {
            return Err(ModelError::invalid(
                "budget preference",
                "warn threshold must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

impl Sortable for BudgetPreference {
    fn sort_value(&self, key: &str) -> SortValue<'_> {
        match key {
            "department_id" => self.department_id.into(),
            "fiscal_year" => self.fiscal_year.into(),
            "limit" => self.limit.into(),
            "warn_threshold" => self.warn_threshold.into(),
            _ => SortValue::Null,
        }
    }
}
