use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised when decoding a backend progress marker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressMarkerError {
    #[error("unknown progress code: {0}")]
    UnknownCode(String),
}

//
// ─── STAGE CODE ───────────────────────────────────────────────────────────────
//

/// The fixed set of canonical stage codes the backend emits.
///
/// The backend stores the code form (e.g. `요구사항정의`); stage records carry
/// the display label (e.g. `요구사항 정의`). The two differ only by spacing for
/// the first two codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageCode {
    /// 요구사항정의
    Requirements,
    /// 화면설계
    ScreenDesign,
    /// 디자인
    Design,
    /// 퍼블리싱
    Publishing,
    /// 개발
    Development,
    /// 검수
    Inspection,
    /// 완료
    Done,
}

/// One immutable row per stage code: `(code, wire code, display label)`.
///
/// Both lookup directions are answered from this table so the mapping stays
/// total over the enumeration.
const STAGE_CODE_TABLE: [(StageCode, &str, &str); 7] = [
    (StageCode::Requirements, "요구사항정의", "요구사항 정의"),
    (StageCode::ScreenDesign, "화면설계", "화면 설계"),
    (StageCode::Design, "디자인", "디자인"),
    (StageCode::Publishing, "퍼블리싱", "퍼블리싱"),
    (StageCode::Development, "개발", "개발"),
    (StageCode::Inspection, "검수", "검수"),
    (StageCode::Done, "완료", "완료"),
];

impl StageCode {
    /// All stage codes in canonical lifecycle order.
    #[must_use]
    pub fn all() -> [StageCode; 7] {
        [
            StageCode::Requirements,
            StageCode::ScreenDesign,
            StageCode::Design,
            StageCode::Publishing,
            StageCode::Development,
            StageCode::Inspection,
            StageCode::Done,
        ]
    }

    /// The wire form of this code.
    #[must_use]
    pub fn code(self) -> &'static str {
        STAGE_CODE_TABLE
            .iter()
            .find(|(c, _, _)| *c == self)
            .map(|(_, code, _)| *code)
            .unwrap_or_default()
    }

    /// The display label for this code.
    #[must_use]
    pub fn label(self) -> &'static str {
        STAGE_CODE_TABLE
            .iter()
            .find(|(c, _, _)| *c == self)
            .map(|(_, _, label)| *label)
            .unwrap_or_default()
    }

    /// Resolve a wire code to a `StageCode`.
    #[must_use]
    pub fn from_code(raw: &str) -> Option<Self> {
        STAGE_CODE_TABLE
            .iter()
            .find(|(_, code, _)| *code == raw)
            .map(|(c, _, _)| *c)
    }

    /// Resolve a display label back to a `StageCode`.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        STAGE_CODE_TABLE
            .iter()
            .find(|(_, _, label)| *label == raw)
            .map(|(c, _, _)| *c)
    }
}

impl fmt::Display for StageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

//
// ─── PROGRESS MARKER ──────────────────────────────────────────────────────────
//

/// Backend-supplied marker naming the project's currently active stage, or the
/// terminal sentinel once every stage is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMarker {
    Stage(StageCode),
    Completed,
}

/// Wire form of the terminal sentinel.
const COMPLETED_SENTINEL: &str = "COMPLETED";

impl ProgressMarker {
    /// Decode a marker from its wire form.
    ///
    /// # Errors
    ///
    /// Returns `ProgressMarkerError::UnknownCode` for values outside the fixed
    /// code set.
    pub fn from_code(raw: &str) -> Result<Self, ProgressMarkerError> {
        if raw == COMPLETED_SENTINEL {
            return Ok(Self::Completed);
        }
        StageCode::from_code(raw)
            .map(Self::Stage)
            .ok_or_else(|| ProgressMarkerError::UnknownCode(raw.to_string()))
    }

    /// The wire form of this marker.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Stage(code) => code.code(),
            Self::Completed => COMPLETED_SENTINEL,
        }
    }

    /// The display label the marker maps to, if it names a stage.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Stage(code) => Some(code.label()),
            Self::Completed => None,
        }
    }

    /// True once the project has passed its final stage.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether a stage record with the given name is the one this marker
    /// points at.
    ///
    /// Stage records have been observed storing either the display label or
    /// the raw code, so both forms match. The terminal sentinel matches no
    /// stage.
    #[must_use]
    pub fn matches(&self, stage_name: &str) -> bool {
        match self {
            Self::Stage(code) => stage_name == code.label() || stage_name == code.code(),
            Self::Completed => false,
        }
    }
}

impl fmt::Display for ProgressMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ProgressMarker {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ProgressMarker {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_code(&raw).map_err(serde::de::Error::custom)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_label_mapping_is_total_and_bidirectional() {
        for code in StageCode::all() {
            assert_eq!(StageCode::from_code(code.code()), Some(code));
            assert_eq!(StageCode::from_label(code.label()), Some(code));
        }
    }

    #[test]
    fn spaced_labels_resolve_back_to_codes() {
        assert_eq!(
            StageCode::from_label("요구사항 정의"),
            Some(StageCode::Requirements)
        );
        assert_eq!(StageCode::from_label("화면 설계"), Some(StageCode::ScreenDesign));
        assert_eq!(StageCode::from_label("디자인"), Some(StageCode::Design));
    }

    #[test]
    fn marker_decodes_sentinel_and_codes() {
        assert_eq!(
            ProgressMarker::from_code("COMPLETED").unwrap(),
            ProgressMarker::Completed
        );
        assert_eq!(
            ProgressMarker::from_code("디자인").unwrap(),
            ProgressMarker::Stage(StageCode::Design)
        );
        let err = ProgressMarker::from_code("UNKNOWN").unwrap_err();
        assert!(matches!(err, ProgressMarkerError::UnknownCode(_)));
    }

    #[test]
    fn marker_matches_label_or_raw_code() {
        let marker = ProgressMarker::Stage(StageCode::Requirements);
        assert!(marker.matches("요구사항 정의"));
        assert!(marker.matches("요구사항정의"));
        assert!(!marker.matches("디자인"));
    }

    #[test]
    fn terminal_marker_matches_no_stage() {
        assert!(!ProgressMarker::Completed.matches("완료"));
        assert!(ProgressMarker::Completed.is_terminal());
    }

    #[test]
    fn marker_serde_roundtrip() {
        let json = serde_json::to_string(&ProgressMarker::Stage(StageCode::Inspection)).unwrap();
        assert_eq!(json, "\"검수\"");
        let back: ProgressMarker = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProgressMarker::Stage(StageCode::Inspection));
    }
}
