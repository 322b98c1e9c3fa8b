use mutview_json::{LineRecord, MutantId, MutantRecord, MutantStatus, SourceFileRef, SynonymConfig};
use mutview_report::diff::DiffEngine;
use mutview_report::highlight::highlight;
use mutview_report::mutations::{LineMutationMap, aggregate};
use mutview_report::renderer::{PageTemplate, render_index_body, render_source_body};

const SOURCE: &str = "fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n";
const LINE: &str = "    a + b";

fn mutant(id: u32, status: MutantStatus, index: usize, replacement: &str) -> MutantRecord {
    MutantRecord {
        id: MutantId(id),
        status,
        index,
        line: LineRecord { line: LINE.to_owned(), line_number: 1 },
        replacement: replacement.to_owned(),
        sourcefile: SourceFileRef { filename: "src/calc.rs".into() },
    }
}

fn body_for(records: &[MutantRecord]) -> String {
    let refs: Vec<&MutantRecord> = records.iter().collect();
    let mut engine = DiffEngine::new(&refs);
    let map = aggregate(&refs, SOURCE, "src/calc.rs", &mut engine, &SynonymConfig::default()).unwrap();
    let lines = highlight(SOURCE).into_display_lines();
    let mut mutant_counter = 0;
    render_source_body(&lines, &map, &mut mutant_counter)
}

#[test]
fn survived_dominates_the_badge_class() {
    let body = body_for(&[
        mutant(1, MutantStatus::Killed, 0, "    a - b"),
        mutant(2, MutantStatus::Survived, 1, "    a * b"),
    ]);
    assert!(body.contains("#mts 2"));
    assert!(body.contains("txtred"));
    assert!(body.contains("onclick=\"toggle('d1');\""));
}

#[test]
fn mutant_rows_carry_label_counter_and_index() {
    let body = body_for(&[
        mutant(1, MutantStatus::Killed, 0, "    a - b"),
        mutant(2, MutantStatus::Survived, 1, "    a * b"),
    ]);
    assert!(body.contains("Killed mt #1 ndx 0"));
    assert!(body.contains("Survived mt #2 ndx 1"));
    assert!(body.contains("class=\"mt bggreen\""));
    assert!(body.contains("class=\"mt bgred\""));
    // rows show the re-highlighted added fragment
    assert!(body.contains("    a - b<span class=\"r\">"));
}

#[test]
fn all_killed_mutants_make_a_green_badge() {
    let body = body_for(&[mutant(1, MutantStatus::Killed, 0, "    a - b")]);
    assert!(body.contains("#mts 1"));
    assert!(body.contains("txtgreen"));
}

#[test]
fn unmutated_lines_have_no_badge_or_block() {
    let lines = highlight(SOURCE).into_display_lines();
    let map = LineMutationMap::new();
    let mut mutant_counter = 0;
    let body = render_source_body(&lines, &map, &mut mutant_counter);
    assert!(!body.contains("#mts"));
    assert!(!body.contains("class=\"mts\""));
    assert_eq!(mutant_counter, 0);
}

#[test]
fn line_labels_are_fixed_width_and_right_aligned() {
    let lines: Vec<String> = (0..12).map(|i| format!("line{}", i)).collect();
    let map = LineMutationMap::new();
    let mut mutant_counter = 0;
    let body = render_source_body(&lines, &map, &mut mutant_counter);
    // 12 lines: width = digits(12) + 1 = 3
    assert!(body.contains("<p><span class=\"ln\">  0 </span>line0</p>"));
    assert!(body.contains("<p><span class=\"ln\"> 11 </span>line11</p>"));
}

#[test]
fn index_rows_link_reports_and_escape_filenames() {
    let entries = vec![("zz_abc_calc_rs.html".to_owned(), "src/<calc>.rs".to_owned())];
    let body = render_index_body(&entries);
    assert!(body.contains("<a href=\"zz_abc_calc_rs.html\">src/&lt;calc&gt;.rs</a>"));
    assert!(body.contains("<h1>Mutation files</h1>"));
}

#[test]
fn pages_substitute_assets_title_and_body() {
    let template = PageTemplate::new("zx_1_mutview.css".to_owned(), "zx_2_mutview.js".to_owned()).unwrap();
    let page = template.render_page("Mutation report - src/calc.rs", "<p>body</p>").unwrap();
    assert!(page.contains("<title>Mutation report - src/calc.rs</title>"));
    assert!(page.contains("href=\"zx_1_mutview.css\""));
    assert!(page.contains("src=\"zx_2_mutview.js\""));
    assert!(page.contains("<p>body</p>"));
}
