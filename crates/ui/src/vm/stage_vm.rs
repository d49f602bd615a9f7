use workstage_core::model::{ProgressMarker, Stage, StageList};

/// Derived status of one stage on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Current,
    Pending,
}

impl StageStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StageStatus::Completed => "완료",
            StageStatus::Current => "진행중",
            StageStatus::Pending => "대기",
        }
    }
}

/// View-model for a project's stage timeline.
///
/// Derives which stage is active and which are complete from the backend's
/// progress marker, and tracks the locally *viewed* stage separately: the
/// user may browse stages without changing what is current on the server.
#[derive(Clone, Debug, PartialEq)]
pub struct StageTimelineVm {
    stages: StageList,
    marker: ProgressMarker,
    viewed: usize,
}

impl StageTimelineVm {
    /// Build the view-model; the viewed stage starts on the current one.
    #[must_use]
    pub fn new(stages: StageList, marker: ProgressMarker) -> Self {
        let viewed = current_index(&stages, marker).unwrap_or(0);
        Self {
            stages,
            marker,
            viewed,
        }
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        self.stages.stages()
    }

    #[must_use]
    pub fn marker(&self) -> ProgressMarker {
        self.marker
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Index of the stage the progress marker points at.
    ///
    /// Falls back to 0 when the marker names no stage in the list (a defined
    /// policy, not an error); `None` when the marker is terminal or the list
    /// is empty.
    #[must_use]
    pub fn current_stage_index(&self) -> Option<usize> {
        current_index(&self.stages, self.marker)
    }

    // ─── Viewed-stage navigation ───────────────────────────────────────────

    #[must_use]
    pub fn viewed_index(&self) -> usize {
        self.viewed
    }

    #[must_use]
    pub fn viewed_stage(&self) -> Option<&Stage> {
        self.stages.get(self.viewed)
    }

    pub fn select(&mut self, index: usize) {
        if index < self.stages.len() {
            self.viewed = index;
        }
    }

    /// View the next stage, clamped to the last one.
    pub fn advance(&mut self) {
        if self.viewed + 1 < self.stages.len() {
            self.viewed += 1;
        }
    }

    /// View the previous stage, clamped to the first one.
    pub fn retreat(&mut self) {
        self.viewed = self.viewed.saturating_sub(1);
    }

    // ─── Completion derivation ─────────────────────────────────────────────

    /// Status of one stage relative to the progress marker.
    #[must_use]
    pub fn status(&self, stage: &Stage) -> StageStatus {
        if self.marker.is_terminal() {
            return StageStatus::Completed;
        }
        if self.marker.matches(&stage.name) {
            return StageStatus::Current;
        }
        match self.current_position() {
            Some(current) if stage.position < current => StageStatus::Completed,
            _ => StageStatus::Pending,
        }
    }

    #[must_use]
    pub fn is_completed(&self, stage: &Stage) -> bool {
        self.status(stage) == StageStatus::Completed
    }

    #[must_use]
    pub fn is_current(&self, stage: &Stage) -> bool {
        self.status(stage) == StageStatus::Current
    }

    /// How many stages are strictly before the current one (all of them once
    /// the marker is terminal).
    #[must_use]
    pub fn completed_count(&self) -> usize {
        if self.stages.is_empty() {
            return 0;
        }
        if self.marker.is_terminal() {
            return self.stages.len();
        }
        match self.current_position() {
            Some(current) => self
                .stages
                .stages()
                .iter()
                .filter(|stage| stage.position < current)
                .count(),
            None => 0,
        }
    }

    /// Completed share of the timeline as a rounded integer percentage.
    #[must_use]
    pub fn overall_progress_rate(&self) -> u32 {
        if self.stages.is_empty() {
            return 0;
        }
        let ratio = self.completed_count() as f64 / self.stages.len() as f64;
        (ratio * 100.0).round() as u32
    }

    /// Position of the stage the marker resolves to, with the same
    /// fallback-to-first policy as `current_stage_index`.
    fn current_position(&self) -> Option<u32> {
        let index = self.current_stage_index()?;
        self.stages.get(index).map(|stage| stage.position)
    }
}

fn current_index(stages: &StageList, marker: ProgressMarker) -> Option<usize> {
    if stages.is_empty() || marker.is_terminal() {
        return None;
    }
    Some(
        stages
            .position_of(|stage| marker.matches(&stage.name))
            .unwrap_or(0),
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
