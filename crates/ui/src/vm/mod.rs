mod approval;
mod project_list;
mod stage_vm;
mod time_fmt;

pub use approval::{approval_percent, can_offer_advance};
pub use project_list::{filter_by_name, page_of, total_pages, PROJECT_PAGE_SIZE};
pub use stage_vm::{StageStatus, StageTimelineVm};
pub use time_fmt::{format_date, format_datetime};
