//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum maze and walk demos",
        style("qmaze").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qmaze-ir           Circuit intermediate representation");
    println!("  qmaze-hal          Backend abstraction layer");
    println!("  qmaze-adapter-sim  Local statevector simulator");
    println!("  qmaze-demos        Maze and walk programs");
    println!("  qmaze-cli          Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/qmaze/qmaze").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
