//! Static html report generation for mutation-testing results.
//!
//! Reads the engine's mutant store, then writes one syntax-highlighted,
//! mutant-annotated page per source file plus an index page linking them.
//! One-shot batch operation: no server, no state beyond the export
//! directory.

pub mod common;
pub mod diff;
pub mod files;
pub mod highlight;
pub mod mutations;
pub mod renderer;
pub mod status;

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use mutview_json::{MutantRecord, MutantsInfo, SynonymConfig};

use crate::diff::DiffEngine;
use crate::renderer::PageTemplate;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read mutant data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("no mutant recorded at line {line_number}, index {index}")]
    UnknownMutant { line_number: usize, index: usize },
    #[error("mutant record at line {line_number} does not match the source file")]
    StaleMutant { line_number: usize },
}

pub fn read_mutants(json_dir_path: &Path) -> Result<MutantsInfo, ReportError> {
    let file = File::open(json_dir_path.join("mutants.json"))?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

// Grouping goes through a BTreeMap so files come out in filename order
// regardless of how the store ordered its records.
fn group_by_file(mutants: &[MutantRecord]) -> BTreeMap<&Path, Vec<&MutantRecord>> {
    let mut by_file: BTreeMap<&Path, Vec<&MutantRecord>> = BTreeMap::new();
    for mutant in mutants {
        by_file.entry(mutant.sourcefile.filename.as_path()).or_default().push(mutant);
    }
    by_file
}

/// Generates the full report tree under `export_path` from the store in
/// `json_dir_path`. A file that fails to render is reported and skipped; the
/// remaining files and the index are still written.
pub fn report(json_dir_path: &Path, export_path: &Path, synonyms: &SynonymConfig) -> Result<(), ReportError> {
    let info = read_mutants(json_dir_path)?;
    let by_file = group_by_file(&info.mutants);

    fs::create_dir_all(export_path)?;
    let stylesheet =
        files::write_hashed_asset(export_path, "mutview.css", renderer::STYLE_CSS, common::ASSET_FILE_PREFIX)?;
    let script =
        files::write_hashed_asset(export_path, "mutview.js", renderer::REPORT_JS, common::ASSET_FILE_PREFIX)?;
    let template = PageTemplate::new(stylesheet, script)?;

    let mut index_entries = Vec::new();
    for (filename, mutants) in &by_file {
        println!("[mutview] {}", filename.display());
        match render_file_report(filename, mutants, &template, export_path, synonyms) {
            Ok(report_name) => index_entries.push((report_name, filename.display().to_string())),
            Err(err) => common::print_error(&format!("skipping {}: {}", filename.display(), err)),
        }
    }

    let index_body = renderer::render_index_body(&index_entries);
    let index_page = template.render_page("Mutation files", &index_body)?;
    fs::write(export_path.join("index.html"), index_page)?;
    common::print_success(&format!(
        "{} report pages written to {}",
        index_entries.len(),
        export_path.display(),
    ));
    Ok(())
}

fn render_file_report(
    filename: &Path,
    mutants: &[&MutantRecord],
    template: &PageTemplate,
    export_path: &Path,
    synonyms: &SynonymConfig,
) -> Result<String, ReportError> {
    let source = files::read_file(filename)?;
    let filename_str = filename.display().to_string();

    let mut engine = DiffEngine::new(mutants);
    let line_mutations = mutations::aggregate(mutants, &source, &filename_str, &mut engine, synonyms)?;
    let lines = highlight::highlight(&source).into_display_lines();

    let mut mutant_counter = 0;
    let body = renderer::render_source_body(&lines, &line_mutations, &mut mutant_counter);
    let page = template.render_page(&format!("Mutation report - {}", filename_str), &body)?;

    let report_name = files::hashed_report_filename(filename, common::REPORT_FILE_PREFIX)?;
    let report_path = export_path.join(&report_name);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&report_path, page)?;
    Ok(report_name)
}
