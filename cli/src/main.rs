use std::error::Error as _;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{arg, command, value_parser, ArgMatches, Command};
use crossterm::tty::IsTty;
use yansi::Color::Red;
use yansi::Paint;

#[cfg(test)]
mod tests;

const APP_HELP_TEMPLATE: &str = r#"rxc {version}, a regular-expression compiler.

Compiles a simple regex into a complete program that prints all
non-overlapping leftmost matches of the regex against its command-line
argument.

{before-help}{usage-heading}
  {usage}

{all-args}{after-help}
"#;

const EXIT_ERROR: i32 = 1;

fn cli() -> Command {
    command!()
        .arg_required_else_help(true)
        .help_template(APP_HELP_TEMPLATE)
        .arg(arg!(<REGEX> "Regular expression to compile"))
        .arg(
            arg!(-l --"output-lang" <LANG> "Name of the output language")
                .default_value("golang"),
        )
        .arg(
            arg!(-o --"output" <OUTPUT_PATH>
                "File for the generated source, instead of stdout")
            .value_parser(value_parser!(PathBuf)),
        )
}

fn run(args: &ArgMatches) -> anyhow::Result<()> {
    let regex = args.get_one::<String>("REGEX").unwrap();
    let lang = args.get_one::<String>("output-lang").unwrap();

    let target = rxc::find_target(lang)?;
    let code = rxc::compile(regex, target)?;

    match args.get_one::<PathBuf>("output") {
        Some(output_path) => {
            fs::write(output_path, code).with_context(|| {
                format!("can not write `{}`", output_path.display())
            })?;
        }
        None => print!("{code}"),
    }

    Ok(())
}

fn main() {
    // Enable support for ANSI escape codes in Windows. In other
    // platforms this is a no-op.
    if let Err(err) = enable_ansi_support::enable_ansi_support() {
        println!("could not enable ANSI support: {}", err)
    }

    #[cfg(feature = "logging")]
    env_logger::init();

    // If stdout is not a tty (for example, because it was redirected to
    // a file) turn off colors, so that the generated source is not
    // polluted with ANSI escape codes.
    if !io::stdout().is_tty() {
        yansi::disable();
    }

    let args = cli().get_matches();

    if let Err(err) = run(&args) {
        if let Some(source) = err.source() {
            eprintln!("{} {}: {}", "error:".paint(Red).bold(), err, source);
        } else {
            eprintln!("{} {}", "error:".paint(Red).bold(), err);
        }
        process::exit(EXIT_ERROR);
    }
}
