//! Per-line aggregation of a file's mutants.

use std::collections::HashMap;

use smallvec::SmallVec;

use mutview_json::{MutantRecord, RelativeMutationId, SynonymConfig};

use crate::ReportError;
use crate::common;
use crate::diff::DiffEngine;

/// One mutant paired with the added-text fragment of its diff.
pub struct LineMutationEntry<'a> {
    pub mutant: &'a MutantRecord,
    pub fragment: String,
}

/// Line number to the mutants generated at that line, in id order. Built
/// fresh per source file and discarded after its page is rendered.
pub type LineMutationMap<'a> = HashMap<usize, SmallVec<[LineMutationEntry<'a>; 2]>>;

/// Extracts the inserted lines of a unified diff, excluding the `+++` header,
/// joined with newlines.
pub fn added_lines(diff: &str) -> String {
    diff.lines()
        .filter(|line| line.starts_with('+') && !line.starts_with("+++"))
        .map(|line| &line[1..])
        .collect::<Vec<_>>()
        .join("\n")
}

/// Groups `mutants` by line, ordered by id for deterministic rendering. Each
/// mutant's diff is requested with the engine's cache bypassed.
///
/// Indices at a line must be contiguous from zero; an entry arriving out of
/// position is reported and dropped rather than aborting the file.
pub fn aggregate<'a>(
    mutants: &[&'a MutantRecord],
    source: &str,
    filename: &str,
    engine: &mut DiffEngine,
    synonyms: &SynonymConfig,
) -> Result<LineMutationMap<'a>, ReportError> {
    let mut sorted = mutants.to_vec();
    sorted.sort_by_key(|m| m.id);

    let mut line_mutations = LineMutationMap::new();
    for mutant in sorted {
        let id = RelativeMutationId {
            line: mutant.line.line.clone(),
            index: mutant.index,
            line_number: mutant.line.line_number,
        };
        let diff = engine.unified_diff(source, filename, &id, synonyms, false)?;
        let fragment = added_lines(&diff);

        let entries = line_mutations.entry(mutant.line.line_number).or_default();
        if mutant.index == entries.len() {
            entries.push(LineMutationEntry { mutant, fragment });
        } else {
            common::print_error(&format!(
                "lost mutation at line {}, index {}: {}",
                mutant.line.line_number, mutant.index, mutant.line.line,
            ));
        }
    }
    Ok(line_mutations)
}
