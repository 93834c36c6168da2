//! Terminal output helpers shared by the commands

use console::style;

pub fn print_success(msg: &str) {
    println!("  {} {}", style("✓").green(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("  {} {}", style("✗").red(), style(msg).red());
}

pub fn print_warning(msg: &str) {
    println!("  {} {}", style("⚠").yellow(), style(msg).yellow());
}

pub fn print_info(msg: &str) {
    println!("  {} {}", style("ℹ").blue(), msg);
}

pub fn print_header(title: &str) {
    println!();
    println!(
        "  {} {}",
        style(title).cyan().bold(),
        style("─".repeat(50usize.saturating_sub(title.chars().count()))).cyan()
    );
    println!();
}

pub fn print_section(title: &str) {
    println!();
    println!("  {}", style(title).bold());
    println!("  {}", style("─".repeat(40)).dim());
}

pub fn print_key_value(key: &str, value: &str) {
    println!("  {} {}", style(format!("{key}:")).dim(), value);
}

/// Framed block of text; widths count characters, not bytes.
pub fn print_box(title: &str, content: &[&str]) {
    let width = content
        .iter()
        .map(|s| s.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0)
        + 4;
    let pad = |s: &str| " ".repeat(width - s.chars().count() - 1);
    let edge = |s: &str| style(s.to_string()).dim();

    println!("  {}", edge(&format!("╭{}╮", "─".repeat(width))));
    println!(
        "  {} {}{}{}",
        edge("│"),
        style(title).bold(),
        pad(title),
        edge("│")
    );
    println!("  {}", edge(&format!("├{}┤", "─".repeat(width))));
    for line in content {
        println!("  {} {}{}{}", edge("│"), line, pad(line), edge("│"));
    }
    println!("  {}", edge(&format!("╰{}╯", "─".repeat(width))));
}
