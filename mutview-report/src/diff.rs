//! Stand-in for the mutation engine's diffing interface.
//!
//! The engine records a replacement text for every mutant; materializing a
//! mutant is substituting that text for the owning line. The report core only
//! ever calls [`DiffEngine::unified_diff`] and never inspects the engine's
//! internals.

use std::collections::HashMap;

use similar::TextDiff;

use mutview_json::{MutantRecord, RelativeMutationId, SynonymConfig};

use crate::ReportError;
use crate::files::split_lines;

pub struct DiffEngine {
    /// Replacement text per (line number, per-line index).
    replacements: HashMap<(usize, usize), String>,
    /// Diffs computed with `update_cache` enabled.
    cache: HashMap<(usize, usize), String>,
}

impl DiffEngine {
    pub fn new(mutants: &[&MutantRecord]) -> Self {
        let replacements = mutants
            .iter()
            .map(|m| ((m.line.line_number, m.index), m.replacement.clone()))
            .collect();
        DiffEngine { replacements, cache: HashMap::new() }
    }

    /// Returns the unified diff of applying the identified mutation to
    /// `source`. With `update_cache` the cache may serve and store results;
    /// without it every call computes a fresh diff.
    pub fn unified_diff(
        &mut self,
        source: &str,
        filename: &str,
        id: &RelativeMutationId,
        _synonyms: &SynonymConfig,
        update_cache: bool,
    ) -> Result<String, ReportError> {
        let key = (id.line_number, id.index);
        if update_cache {
            if let Some(diff) = self.cache.get(&key) {
                return Ok(diff.clone());
            }
        }

        let Some(replacement) = self.replacements.get(&key).cloned() else {
            return Err(ReportError::UnknownMutant { line_number: id.line_number, index: id.index });
        };

        let lines = split_lines(source);
        let Some(&original_line) = lines.get(id.line_number) else {
            return Err(ReportError::UnknownMutant { line_number: id.line_number, index: id.index });
        };
        if original_line != id.line {
            return Err(ReportError::StaleMutant { line_number: id.line_number });
        }

        let mut mutated = lines.clone();
        mutated[id.line_number] = replacement.as_str();
        let original = lines.join("\n");
        let new = mutated.join("\n");

        let text_diff = TextDiff::from_lines(original.as_str(), new.as_str());
        let diff = text_diff.unified_diff().header(filename, filename).to_string();
        if update_cache {
            self.cache.insert(key, diff.clone());
        }
        Ok(diff)
    }
}
