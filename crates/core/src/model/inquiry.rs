use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::InquiryId;

/// Whether an inquiry has been answered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Pending,
    Completed,
}

impl InquiryStatus {
    /// The wire form, as sent in query parameters.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            InquiryStatus::Pending => "PENDING",
            InquiryStatus::Completed => "COMPLETED",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InquiryStatus::Pending => "답변 대기",
            InquiryStatus::Completed => "답변 완료",
        }
    }
}

/// One row of the admin inquiry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: InquiryId,
    pub title: String,
    pub creator_name: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels() {
        assert_eq!(InquiryStatus::Pending.label(), "답변 대기");
        assert_eq!(InquiryStatus::Completed.label(), "답변 완료");
    }

    #[test]
    fn inquiry_decodes_backend_shape() {
        let json = r#"{
            "id": 11,
            "title": "견적 문의드립니다",
            "creatorName": "김민수",
            "status": "PENDING",
            "createdAt": "2024-04-01T02:00:00Z"
        }"#;
        let row: Inquiry = serde_json::from_str(json).unwrap();
        assert_eq!(row.status, InquiryStatus::Pending);
        assert_eq!(row.creator_name, "김민수");
    }
}
