//! Data model for the mutant store consumed by mutview-report.
//!
//! The mutation engine writes its records as a `mutants.json` document; this
//! crate defines the serde types for that document plus the descriptor and
//! configuration values passed back to the engine's diffing interface.

use std::path::PathBuf;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Identifier assigned to a mutant by the mutation engine. Ids are unique per
/// run and define the deterministic processing order of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct MutantId(pub u32);

impl MutantId {
    pub fn as_index(self) -> usize {
        self.0 as usize
    }
}

/// Outcome recorded for a mutant by the test runner.
///
/// The set is closed on this side; tags this crate does not know about
/// deserialize to `Unknown` so that a newer engine degrades the report
/// instead of breaking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutantStatus {
    Survived,
    Timeout,
    Skipped,
    Untested,
    Suspicious,
    Killed,
    Unknown,
}

impl MutantStatus {
    pub fn from_tag(tag: &str) -> MutantStatus {
        match tag {
            "survived" => MutantStatus::Survived,
            "timeout" => MutantStatus::Timeout,
            "skipped" => MutantStatus::Skipped,
            "untested" => MutantStatus::Untested,
            "suspicious" => MutantStatus::Suspicious,
            "killed" => MutantStatus::Killed,
            _ => MutantStatus::Unknown,
        }
    }

    pub fn as_tag(self) -> &'static str {
        match self {
            MutantStatus::Survived => "survived",
            MutantStatus::Timeout => "timeout",
            MutantStatus::Skipped => "skipped",
            MutantStatus::Untested => "untested",
            MutantStatus::Suspicious => "suspicious",
            MutantStatus::Killed => "killed",
            MutantStatus::Unknown => "unknown",
        }
    }
}

impl Serialize for MutantStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for MutantStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(MutantStatus::from_tag(&tag))
    }
}

/// Reference to the source file a mutant was generated in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SourceFileRef {
    pub filename: PathBuf,
}

/// The original line a mutant was generated at.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LineRecord {
    /// Raw text of the line, without its terminator.
    pub line: String,
    /// Zero-based line number within the source file.
    pub line_number: usize,
}

/// One mutant as recorded by the mutation engine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MutantRecord {
    pub id: MutantId,
    pub status: MutantStatus,
    /// Position of this mutant among the mutants generated at the same line.
    /// Indices at a line must be contiguous from zero.
    pub index: usize,
    pub line: LineRecord,
    /// The text the engine substitutes for the owning line when the mutant is
    /// applied. May span several lines.
    pub replacement: String,
    pub sourcefile: SourceFileRef,
}

/// Top-level shape of the store's `mutants.json` document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MutantsInfo {
    pub mutants: Vec<MutantRecord>,
}

/// Identifies one mutation relative to a source file for the diffing
/// interface: the engine materializes the mutant at `line_number` with the
/// given per-line `index`, checking `line` against the source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeMutationId {
    pub line: String,
    pub index: usize,
    pub line_number: usize,
}

/// Engine configuration threaded through the diffing interface. Names listed
/// here are treated as synonyms of built-in constructors when the engine
/// generates mutants; report generation passes an empty configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymConfig {
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tags_round_trip() {
        for status in [
            MutantStatus::Survived,
            MutantStatus::Timeout,
            MutantStatus::Skipped,
            MutantStatus::Untested,
            MutantStatus::Suspicious,
            MutantStatus::Killed,
        ] {
            assert_eq!(MutantStatus::from_tag(status.as_tag()), status);
        }
    }

    #[test]
    fn unrecognized_status_tags_deserialize_to_unknown() {
        let status: MutantStatus = serde_json::from_str("\"exploded\"").unwrap();
        assert_eq!(status, MutantStatus::Unknown);
    }

    #[test]
    fn mutant_records_deserialize() {
        let data = r#"{
            "mutants": [{
                "id": 7,
                "status": "survived",
                "index": 0,
                "line": { "line": "    a + b", "line_number": 4 },
                "replacement": "    a - b",
                "sourcefile": { "filename": "src/calc.rs" }
            }]
        }"#;
        let info: MutantsInfo = serde_json::from_str(data).unwrap();
        assert_eq!(info.mutants.len(), 1);
        assert_eq!(info.mutants[0].id, MutantId(7));
        assert_eq!(info.mutants[0].status, MutantStatus::Survived);
        assert_eq!(info.mutants[0].line.line_number, 4);
    }
}
