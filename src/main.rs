use anyhow::Result;
use std::path::PathBuf;

// Use modules from the library
use toolbelt::cli::build_cli;
use toolbelt::commands;
use toolbelt::core::{init_logging, ErrorRecord, LogConfig};
use toolbelt::platform::Platform;
use toolbelt::ui::prompts;

fn main() {
    let matches = build_cli().get_matches();
    let json_errors = matches.get_flag("json-errors");

    if let Err(e) = run(&matches) {
        if json_errors {
            eprintln!("{}", ErrorRecord::from_anyhow(&e).to_json());
        } else {
            prompts::error(&format!("Error: {:#}", e));
        }
        std::process::exit(1);
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let mut log_config = LogConfig::default();
    if let Some(level) = matches.get_one::<log::LevelFilter>("log-level") {
        log_config = log_config.with_level(*level);
    }
    if let Some(file) = matches.get_one::<String>("log-file") {
        log_config = log_config.with_file(PathBuf::from(file), true);
    }
    init_logging(&log_config)?;

    if matches.get_flag("version") {
        println!("toolbelt version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Detected once, handed to everything that reads keys
    let platform = Platform::detect();
    log::debug!("Detected platform: {:?}", platform);

    match matches.subcommand() {
        Some(("truncate", sub_matches)) => commands::truncate(sub_matches)?,
        Some(("capitalize", sub_matches)) => commands::capitalize(sub_matches)?,
        Some(("strip", sub_matches)) => commands::strip(sub_matches, platform)?,
        Some(("pick", sub_matches)) => commands::pick(sub_matches, platform)?,
        Some(("confirm", sub_matches)) => commands::confirm(sub_matches, platform)?,
        Some(("loading", sub_matches)) => commands::loading(sub_matches)?,
        Some(("read", sub_matches)) => commands::read(sub_matches)?,
        Some(("write", sub_matches)) => commands::write(sub_matches)?,
        Some(("ls", sub_matches)) => commands::ls(sub_matches)?,
        Some(("dpkg-version", sub_matches)) => commands::dpkg_version(sub_matches)?,
        Some(("check-version", sub_matches)) => commands::check_version(sub_matches)?,
        _ => {
            println!("Welcome to toolbelt!");
            println!("Use 'toolbelt --help' for more information.");
        }
    }

    Ok(())
}
