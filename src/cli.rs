// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use crate::commands;
use crate::infra::executor::DEFAULT_INTERPRETER;

fn build_cli() -> Command {
    Command::new("nb2report")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown-structured notebooks into testing scaffolding and HTML reports")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("scaffold")
                .about("Create a new testing scaffolding from a schema notebook")
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help("Name of the framework to test")
                        .value_name("NAME")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("version")
                        .short('v')
                        .long("version")
                        .help("Version of the framework to test")
                        .value_name("VERSION")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("Path to the schema notebook describing the test tree")
                        .value_name("INPUT")
                        .default_value("HOW_TO.ipynb")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .help("Directory the scaffolding is rooted at")
                        .value_name("ROOT")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Execute a testing scaffolding and generate the HTML summary")
                .arg(
                    Arg::new("name")
                        .short('n')
                        .long("name")
                        .help("Name of the framework under test")
                        .value_name("NAME")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("version")
                        .short('v')
                        .long("version")
                        .help("Version of the framework under test")
                        .value_name("VERSION")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("root")
                        .long("root")
                        .help("Directory the scaffolding is rooted at")
                        .value_name("ROOT")
                        .default_value(".")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("interpreter")
                        .long("interpreter")
                        .help("Interpreter command used to evaluate assertion cells")
                        .value_name("COMMAND")
                        .default_value(DEFAULT_INTERPRETER)
                        .action(ArgAction::Set),
                ),
        )
}

pub fn run() -> Result<()> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("scaffold", scaffold_matches)) => {
            let name = scaffold_matches
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_default();
            let version = scaffold_matches
                .get_one::<String>("version")
                .cloned()
                .unwrap_or_default();
            let input = scaffold_matches
                .get_one::<PathBuf>("input")
                .cloned()
                .unwrap_or_default();
            let root = scaffold_matches
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_default();

            commands::scaffold::execute(&name, &version, &input, &root)
        }
        Some(("report", report_matches)) => {
            let name = report_matches
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_default();
            let version = report_matches
                .get_one::<String>("version")
                .cloned()
                .unwrap_or_default();
            let root = report_matches
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_default();
            let interpreter = report_matches
                .get_one::<String>("interpreter")
                .cloned()
                .unwrap_or_default();

            commands::report::execute(&name, &version, &root, &interpreter)
        }
        _ => {
            // Unreachable with subcommand_required; clap prints help.
            Ok(())
        }
    }
}
