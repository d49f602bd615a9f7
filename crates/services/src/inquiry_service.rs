use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;

use workstage_core::model::{Inquiry, InquiryStatus};

use crate::error::ApiError;
use crate::transport::ApiTransport;

/// Inquiry search endpoint (admin only).
const SEARCH_PATH: &str = "/admin/inquiries/search";

/// Rows per page of the inquiry list.
pub const INQUIRY_PAGE_SIZE: u32 = 10;

/// Filter fields of the admin inquiry search.
///
/// Blank fields are omitted from the query entirely; the backend treats a
/// missing parameter as "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFilter {
    pub title: String,
    pub creator_name: String,
    pub status: Option<InquiryStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl InquiryFilter {
    /// Assemble the query for one page of results.
    ///
    /// Always carries `page`, `size` and the fixed newest-first sort.
    #[must_use]
    pub fn to_query(&self, page: u32) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("size".to_string(), INQUIRY_PAGE_SIZE.to_string()),
            ("sort".to_string(), "createdAt,desc".to_string()),
        ];

        let title = self.title.trim();
        if !title.is_empty() {
            query.push(("title".to_string(), title.to_string()));
        }
        let creator = self.creator_name.trim();
        if !creator.is_empty() {
            query.push(("creatorName".to_string(), creator.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status".to_string(), status.code().to_string()));
        }
        if let Some(date) = self.start_date {
            query.push(("startDate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            query.push(("endDate".to_string(), date.format("%Y-%m-%d").to_string()));
        }
        query
    }
}

/// One page of inquiry search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryPage {
    pub content: Vec<Inquiry>,
    pub total_elements: u64,
}

/// Backend gateway for the admin inquiry list.
#[derive(Clone)]
pub struct InquiryService {
    transport: Arc<dyn ApiTransport>,
}

impl InquiryService {
    #[must_use]
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }

    /// Fetch one page of inquiries matching the filter.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or an undecodable body.
    pub async fn search(&self, filter: &InquiryFilter, page: u32) -> Result<InquiryPage, ApiError> {
        let value = self
            .transport
            .get(SEARCH_PATH, &filter.to_query(page))
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeTransport;
    use serde_json::json;

    #[test]
    fn blank_filters_are_omitted() {
        let filter = InquiryFilter {
            title: "  ".to_string(),
            ..InquiryFilter::default()
        };
        let query = filter.to_query(0);

        assert!(query.iter().all(|(key, _)| key != "title"));
        assert!(query.iter().all(|(key, _)| key != "creatorName"));
        assert!(query.contains(&("page".to_string(), "0".to_string())));
        assert!(query.contains(&("size".to_string(), "10".to_string())));
        assert!(query.contains(&("sort".to_string(), "createdAt,desc".to_string())));
    }

    #[test]
    fn populated_filters_are_trimmed_and_included() {
        let filter = InquiryFilter {
            title: " 견적 ".to_string(),
            creator_name: "김민수".to_string(),
            status: Some(InquiryStatus::Pending),
            start_date: NaiveDate::from_ymd_opt(2024, 4, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 30),
        };
        let query = filter.to_query(2);

        assert!(query.contains(&("title".to_string(), "견적".to_string())));
        assert!(query.contains(&("status".to_string(), "PENDING".to_string())));
        assert!(query.contains(&("startDate".to_string(), "2024-04-01".to_string())));
        assert!(query.contains(&("endDate".to_string(), "2024-04-30".to_string())));
        assert!(query.contains(&("page".to_string(), "2".to_string())));
    }

    #[tokio::test]
    async fn search_decodes_page_shape() {
        let fake = Arc::new(FakeTransport::new());
        fake.respond_with(
            SEARCH_PATH,
            json!({
                "content": [{
                    "id": 11,
                    "title": "견적 문의드립니다",
                    "creatorName": "김민수",
                    "status": "PENDING",
                    "createdAt": "2024-04-01T02:00:00Z"
                }],
                "totalElements": 41
            }),
        );

        let page = InquiryService::new(fake)
            .search(&InquiryFilter::default(), 0)
            .await
            .unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_elements, 41);
    }

    #[tokio::test]
    async fn missing_fields_default_to_empty_page() {
        let fake = Arc::new(FakeTransport::new());
        fake.respond_with(SEARCH_PATH, json!({}));

        let page = InquiryService::new(fake)
            .search(&InquiryFilter::default(), 0)
            .await
            .unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 0);
    }
}
