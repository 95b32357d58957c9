use focuspath_core::TextBuffer;
use focuspath_domain::FilterCriteria;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    MinUrgency,
    MinImportance,
    Search,
}

impl FilterField {
    pub fn next(self) -> Self {
        match self {
            FilterField::MinUrgency => FilterField::MinImportance,
            FilterField::MinImportance => FilterField::Search,
            FilterField::Search => FilterField::MinUrgency,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FilterField::MinUrgency => FilterField::Search,
            FilterField::MinImportance => FilterField::MinUrgency,
            FilterField::Search => FilterField::MinImportance,
        }
    }
}

/// Filter dialog focus plus the search text being typed. Thresholds are
/// applied to the store as they change.
#[derive(Debug, Clone)]
pub struct FilterDialogState {
    pub field: FilterField,
    pub search: TextBuffer,
}

impl FilterDialogState {
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            field: FilterField::MinUrgency,
            search: TextBuffer::from_text(criteria.search.clone()),
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Step the focused threshold. Returns false on the search field.
    pub fn adjust(&self, criteria: &mut FilterCriteria, delta: i8) -> bool {
        match self.field {
            FilterField::MinUrgency => criteria.adjust_min_urgency(delta),
            FilterField::MinImportance => criteria.adjust_min_importance(delta),
            FilterField::Search => return false,
        }
        true
    }

    /// Put the focused filter back to its default.
    pub fn reset_field(&mut self, criteria: &mut FilterCriteria) {
        let defaults = FilterCriteria::default();
        match self.field {
            FilterField::MinUrgency => criteria.min_urgency = defaults.min_urgency,
            FilterField::MinImportance => criteria.min_importance = defaults.min_importance,
            FilterField::Search => {
                self.search.clear();
                criteria.search.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_and_reset_focused_field() {
        let mut criteria = FilterCriteria::default();
        let mut state = FilterDialogState::new(&criteria);

        assert!(state.adjust(&mut criteria, 3));
        assert_eq!(criteria.min_urgency, 4);

        state.next_field();
        assert!(state.adjust(&mut criteria, 1));
        assert_eq!(criteria.min_importance, 2);

        state.reset_field(&mut criteria);
        assert_eq!(criteria.min_importance, 1);
        assert_eq!(criteria.min_urgency, 4);

        state.next_field();
        assert!(!state.adjust(&mut criteria, 1));
        criteria.search = "milk".to_string();
        state.search.set("milk".to_string());
        state.reset_field(&mut criteria);
        assert!(criteria.search.is_empty());
        assert!(state.search.is_empty());
    }
}
