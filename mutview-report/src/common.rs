use clap::builder::Styles;

pub static DEFAULT_JSON_DIR: &str = "./mutview-data";
pub static DEFAULT_REPORT_DIR: &str = "./mutview-report";

// Report pages and assets sort after index.html in a directory listing.
pub static REPORT_FILE_PREFIX: &str = "zz_";
pub static ASSET_FILE_PREFIX: &str = "zx_";

pub fn clap_styles() -> Styles {
    use clap::builder::styling::*;
    Styles::styled()
        .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightGreen))).bold())
        .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightGreen))).bold())
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlue))).bold())
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlue))))
}

pub fn print_error(msg: &str) {
    let style = console::Style::new().red().bold();
    eprintln!("{} {}", style.apply_to("✗"), msg);
}

pub fn print_success(msg: &str) {
    let style = console::Style::new().green().bold();
    println!("{} {}", style.apply_to("✓"), msg);
}
