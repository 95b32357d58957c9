use serde::{Deserialize, Serialize};

use super::task_filter::{CompositeFilter, ImportanceFilter, SearchFilter, UrgencyFilter};
use crate::editable::{MAX_SCORE, MIN_SCORE};

/// User-entered thresholds and search text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_urgency: u8,
    pub min_importance: u8,
    pub search: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_urgency: MIN_SCORE,
            min_importance: MIN_SCORE,
            search: String::new(),
        }
    }
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        self.min_urgency > MIN_SCORE || self.min_importance > MIN_SCORE || !self.search.is_empty()
    }

    pub fn set_min_urgency(&mut self, value: u8) {
        self.min_urgency = value.clamp(MIN_SCORE, MAX_SCORE);
    }

    pub fn set_min_importance(&mut self, value: u8) {
        self.min_importance = value.clamp(MIN_SCORE, MAX_SCORE);
    }

    pub fn adjust_min_urgency(&mut self, delta: i8) {
        self.set_min_urgency(self.min_urgency.saturating_add_signed(delta));
    }

    pub fn adjust_min_importance(&mut self, delta: i8) {
        self.set_min_importance(self.min_importance.saturating_add_signed(delta));
    }

    pub fn to_filter(&self) -> CompositeFilter {
        CompositeFilter::new()
            .with_filter(Box::new(UrgencyFilter::at_least(self.min_urgency)))
            .with_filter(Box::new(ImportanceFilter::at_least(self.min_importance)))
            .with_filter(Box::new(SearchFilter::new(self.search.clone())))
    }

    /// Short description for panel titles, e.g. `U>=5 + "client"`.
    pub fn summary(&self) -> Option<String> {
        let mut parts = vec![];
        if self.min_urgency > MIN_SCORE {
            parts.push(format!("U>={}", self.min_urgency));
        }
        if self.min_importance > MIN_SCORE {
            parts.push(format!("I>={}", self.min_importance));
        }
        if !self.search.is_empty() {
            parts.push(format!("\"{}\"", self.search));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" + "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.min_urgency, 1);
        assert_eq!(criteria.min_importance, 1);
        assert!(!criteria.is_active());
        assert!(criteria.summary().is_none());
    }

    #[test]
    fn test_adjust_is_clamped() {
        let mut criteria = FilterCriteria::default();
        criteria.adjust_min_urgency(-1);
        assert_eq!(criteria.min_urgency, 1);

        for _ in 0..20 {
            criteria.adjust_min_importance(1);
        }
        assert_eq!(criteria.min_importance, 10);
        assert!(criteria.is_active());
    }

    #[test]
    fn test_summary() {
        let criteria = FilterCriteria {
            min_urgency: 5,
            min_importance: 1,
            search: "client".to_string(),
        };
        assert_eq!(criteria.summary().as_deref(), Some("U>=5 + \"client\""));
    }
}
