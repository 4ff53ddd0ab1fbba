//! Latency Comparison - Main CLI Application
//!
//! Renders the average latency of a standalone database instance next to a
//! clustered deployment as a grouped bar chart.

use latency_comparison::{
    app::App,
    cli::Cli,
    error::{AppError, ErrorReporter},
};
use std::io::IsTerminal;
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("This is a bug; please report it together with the command line used.");
        process::exit(1);
    }));

    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        // --help and --version
        Err(Ok(info)) => info.exit(),
        Err(Err(e)) => exit_with(&e, std::io::stderr().is_terminal(), false),
    };

    let verbose = cli.verbose;
    let stderr_color = !cli.no_color && std::io::stderr().is_terminal();

    let app = match App::new(cli) {
        Ok(app) => app,
        Err(e) => exit_with(&e, stderr_color, verbose),
    };

    colored::control::set_override(app.config().enable_color);

    if let Err(e) = app.run() {
        exit_with(&e, app.config().enable_color, app.config().verbose);
    }
}

/// Report the error on stderr and terminate with its exit code
fn exit_with(error: &AppError, use_color: bool, verbose: bool) -> ! {
    colored::control::set_override(use_color);
    ErrorReporter::new(use_color, verbose).report_error(error);
    process::exit(error.exit_code());
}
