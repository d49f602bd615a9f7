use chrono::NaiveDate;

use workstage_core::model::{ActionType, TargetType};

use crate::error::FilterError;

/// Filter fields of the audit-log search.
///
/// Cursors handed out by the backend are only valid for the filter set that
/// produced them, so the pager resets its cursor state whenever this changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub action_type: Option<ActionType>,
    pub target_type: Option<TargetType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub user_id: String,
}

impl LogFilter {
    /// Check the filter before any request is dispatched.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::StartAfterEnd` when both dates are set and the
    /// start is later than the end.
    pub fn validate(&self) -> Result<(), FilterError> {
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(FilterError::StartAfterEnd);
            }
        }
        Ok(())
    }

    /// Assemble the filter portion of the search query, omitting blanks.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(action) = self.action_type {
            query.push(("actionType".to_string(), action.as_str().to_string()));
        }
        if let Some(target) = self.target_type {
            query.push(("targetType".to_string(), target.as_str().to_string()));
        }
        if let Some(date) = self.start_date {
            query.push(("startDate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            query.push(("endDate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        let user_id = self.user_id.trim();
        if !user_id.is_empty() {
            query.push(("userId".to_string(), user_id.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_is_valid_and_produces_no_params() {
        let filter = LogFilter::default();
        assert!(filter.validate().is_ok());
        assert!(filter.to_query().is_empty());
    }

    #[test]
    fn inverted_date_range_is_rejected_before_dispatch() {
        let filter = LogFilter {
            start_date: NaiveDate::from_ymd_opt(2024, 5, 2),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            ..LogFilter::default()
        };
        let err = filter.validate().unwrap_err();
        assert_eq!(err, FilterError::StartAfterEnd);
        assert_eq!(err.to_string(), "시작일은 종료일보다 이전이어야 합니다.");
    }

    #[test]
    fn equal_dates_are_allowed() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1);
        let filter = LogFilter {
            start_date: day,
            end_date: day,
            ..LogFilter::default()
        };
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn populated_fields_appear_with_wire_codes() {
        let filter = LogFilter {
            action_type: Some(ActionType::Create),
            target_type: Some(TargetType::Project),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: None,
            user_id: " admin01 ".to_string(),
        };
        let query = filter.to_query();

        assert!(query.contains(&("actionType".to_string(), "CREATE".to_string())));
        assert!(query.contains(&("targetType".to_string(), "PROJECT".to_string())));
        assert!(query.contains(&("startDate".to_string(), "2024-05-01".to_string())));
        assert!(query.contains(&("userId".to_string(), "admin01".to_string())));
        assert!(query.iter().all(|(key, _)| key != "endDate"));
    }
}
