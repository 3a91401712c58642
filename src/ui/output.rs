use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

/// Boxed title line printed at the start of interactive commands
pub fn banner(title: &str) {
    let rule = "=".repeat(title.chars().count() + 4);
    println!("{}", rule.style(theme().dim.clone()));
    println!("  {}", title.style(theme().header.clone()));
    println!("{}", rule.style(theme().dim.clone()));
}

pub fn header(text: &str) {
    println!("{} {}", Icons::ROCKET, text.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn section(icon: &str, title: &str) {
    println!();
    println!("{} {}", icon, title.style(theme().header.clone()));
}

pub fn step(text: &str) {
    println!("  - {}", text);
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}
