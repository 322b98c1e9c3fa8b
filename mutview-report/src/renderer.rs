//! Assembles highlighted lines and aggregated mutants into report pages.

use std::fmt::Write as _;

use minijinja::{Environment, context};

use crate::highlight::highlight;
use crate::mutations::LineMutationMap;
use crate::status::{Severity, status_label, status_severity};

pub const STYLE_CSS: &str = include_str!("assets/mutview.css");
pub const REPORT_JS: &str = include_str!("assets/mutview.js");

const LAYOUT_HTML_TPL: &str = include_str!("templates/layout.html");

/// The page layout instantiated once per run with the hashed asset filenames.
/// The template itself is immutable; every page render goes through here.
pub struct PageTemplate {
    env: Environment<'static>,
    stylesheet: String,
    script: String,
}

impl PageTemplate {
    pub fn new(stylesheet: String, script: String) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("layout.html", LAYOUT_HTML_TPL)?;
        Ok(PageTemplate { env, stylesheet, script })
    }

    /// Substitutes the title and the pre-escaped page body into the layout.
    pub fn render_page(&self, title: &str, body: &str) -> Result<String, minijinja::Error> {
        let template = self.env.get_template("layout.html")?;
        template.render(context! {
            title => html_escape::encode_text(title).as_ref(),
            stylesheet => self.stylesheet.as_str(),
            script => self.script.as_str(),
            highlighted_code => body,
        })
    }
}

/// Renders the annotated code listing for one source file.
///
/// Every line becomes a paragraph with a fixed-width line-number label. Lines
/// with mutants additionally get a hidden block of per-mutant rows and a
/// toggle badge colored by the combined severity of the line's mutants.
/// `mutant_counter` numbers mutants across the whole file.
pub fn render_source_body(
    lines: &[String],
    line_mutations: &LineMutationMap<'_>,
    mutant_counter: &mut usize,
) -> String {
    let label_width = lines.len().to_string().len() + 1;

    let mut body = String::new();
    for (line_no, line) in lines.iter().enumerate() {
        let mut block = String::new();
        let mut badge = String::new();
        if let Some(entries) = line_mutations.get(&line_no) {
            let mut severity = Severity::Green;
            let _ = writeln!(block, "<div class=\"mts\" id=\"d{}\" style=\"display: none;\">", line_no);
            for (index, entry) in entries.iter().enumerate() {
                let status = entry.mutant.status;
                severity = severity.combine(status_severity(status));
                *mutant_counter += 1;
                let fragment_lines = highlight(&entry.fragment).into_display_lines();
                let first = fragment_lines.first().map(String::as_str).unwrap_or("");
                let _ = writeln!(
                    block,
                    "<p class=\"mt {}\"><span class=\"ln\">{:w$} </span>{}<span class=\"r\">{} mt #{} ndx {}</span></p>",
                    status_severity(status).bg_class(),
                    "",
                    first,
                    status_label(status),
                    *mutant_counter,
                    index,
                    w = label_width,
                );
            }
            block.push_str("</div>\n");
            let _ = write!(
                badge,
                "<span class=\"r {}\" onclick=\"toggle('d{}');\">#mts {}</span>",
                severity.text_class(),
                line_no,
                entries.len(),
            );
        }
        let _ = writeln!(
            body,
            "<p><span class=\"ln\">{:>w$} </span>{}{}</p>",
            line_no,
            line,
            badge,
            w = label_width,
        );
        body.push_str(&block);
    }
    body
}

/// Renders the index listing: one row per source file linking its report.
pub fn render_index_body(entries: &[(String, String)]) -> String {
    let mut body = String::from("<h1>Mutation files</h1>\n<table><thead><tr><th>File</th></tr></thead>\n");
    for (report_name, filename) in entries {
        let _ = writeln!(
            body,
            "<tr><td><a href=\"{}\">{}</a></td></tr>",
            report_name,
            html_escape::encode_text(filename),
        );
    }
    body.push_str("</table>");
    body
}
