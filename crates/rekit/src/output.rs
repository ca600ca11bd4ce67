//! Terminal output for scaffolding results

use camino::Utf8Path;
use console::style;

/// Print a completed step
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print a failure that ends the command
pub fn failure(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a stop that is not a failure, such as an existing component
pub fn notice(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print the banner of a command
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print one labelled setting of the pending operation
pub fn field(label: &str, value: &str) {
    println!("  {}: {}", style(label).dim(), value);
}

/// List written files relative to `root`
pub fn created<'a>(root: &Utf8Path, files: impl IntoIterator<Item = &'a Utf8Path>) {
    for file in files {
        let shown = file.strip_prefix(root).unwrap_or(file);
        println!("  {} {}", style("+").green(), shown);
    }
}

/// Print numbered follow-up commands
pub fn next_steps(steps: &[String]) {
    println!("\n{}", style("Next steps:").bold());
    for (i, step) in steps.iter().enumerate() {
        println!("  {}. {}", i + 1, style(step).cyan());
    }
}
