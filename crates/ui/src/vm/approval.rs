use workstage_core::model::{ApprovalRate, ProjectRole, UserSession};

use super::stage_vm::StageTimelineVm;

/// Approval ratio of a stage as a display percentage.
///
/// `None` renders as 승인요청 없음 rather than 0%.
#[must_use]
pub fn approval_percent(rate: Option<&ApprovalRate>) -> Option<u8> {
    rate.and_then(ApprovalRate::percent)
}

/// Whether the stage-advance control should exist at all for this caller.
///
/// The control is offered only when every approval on the viewed stage is in
/// (exactly 100%), the viewed stage is the current one or the second-to-last
/// one, and the caller is a company admin or the project's client manager.
/// Anyone else simply never sees it.
#[must_use]
pub fn can_offer_advance(
    vm: &StageTimelineVm,
    rate: Option<&ApprovalRate>,
    session: &UserSession,
    project_role: Option<ProjectRole>,
) -> bool {
    if vm.marker().is_terminal() {
        return false;
    }
    if approval_percent(rate) != Some(100) {
        return false;
    }
    if !(session.is_admin() || project_role == Some(ProjectRole::ClientManager)) {
        return false;
    }

    let viewed_is_current = vm
        .viewed_stage()
        .is_some_and(|stage| vm.marker().matches(&stage.name));
    let viewed_is_second_to_last = vm.len() >= 2 && vm.viewed_index() == vm.len() - 2;
    viewed_is_current || viewed_is_second_to_last
}
