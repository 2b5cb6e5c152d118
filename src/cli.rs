// Command-line definition for the toolbelt binary

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("toolbelt")
        .about("Small helpers shared across command-line apps")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Minimum log level (error, warn, info, debug, trace)")
                .value_parser(clap::value_parser!(log::LevelFilter))
                .default_value("info")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Append log output to FILE instead of stderr")
                .global(true),
        )
        .arg(
            Arg::new("json-errors")
                .long("json-errors")
                .help("Report failures as a JSON object on stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("truncate")
                .about("Truncate text to a maximum length")
                .arg(Arg::new("text").help("Text to truncate").required(true).index(1))
                .arg(
                    Arg::new("length")
                        .short('l')
                        .long("length")
                        .help("Maximum number of characters to keep")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("25"),
                )
                .arg(
                    Arg::new("no-ellipsis")
                        .long("no-ellipsis")
                        .help("Do not append '...' to truncated text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("capitalize")
                .about("Capitalize each word of the text")
                .arg(Arg::new("text").help("Text to capitalize").required(true).index(1))
                .arg(
                    Arg::new("delimiter")
                        .short('d')
                        .long("delimiter")
                        .help("String separating words")
                        .default_value(" "),
                ),
        )
        .subcommand(
            Command::new("strip")
                .about("Read text until EOF and strip every line")
                .arg(
                    Arg::new("default")
                        .long("default")
                        .help("Text to use when nothing is read"),
                ),
        )
        .subcommand(
            Command::new("pick")
                .about("Choose one item from a numbered list")
                .arg(
                    Arg::new("items")
                        .help("Items to choose from")
                        .num_args(0..)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("confirm")
                .about("Ask for a y to continue (exit status 1 on anything else)")
                .arg(
                    Arg::new("prompt")
                        .short('p')
                        .long("prompt")
                        .help("Prompt to display"),
                )
                .arg(
                    Arg::new("enter")
                        .long("enter")
                        .help("Require Enter after the answer")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("loading")
                .about("Show the loading animation while sleeping")
                .arg(
                    Arg::new("seconds")
                        .short('s')
                        .long("seconds")
                        .help("How long the operation takes")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("3"),
                )
                .arg(
                    Arg::new("phrase")
                        .long("phrase")
                        .help("Phrase shown next to the bar")
                        .default_value("Loading..."),
                )
                .arg(
                    Arg::new("fail")
                        .long("fail")
                        .help("Make the operation fail")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-raise")
                        .long("no-raise")
                        .help("Report the failure instead of exiting with an error")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("read")
                .about("Print a text file")
                .arg(Arg::new("path").help("File to read").required(true).index(1))
                .arg(
                    Arg::new("missing-ok")
                        .long("missing-ok")
                        .help("Treat a missing file as empty")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("write")
                .about("Overwrite a text file")
                .arg(Arg::new("path").help("File to write").required(true).index(1))
                .arg(Arg::new("text").help("New contents").required(true).index(2)),
        )
        .subcommand(
            Command::new("ls")
                .about("List a directory from inside it")
                .arg(Arg::new("path").help("Directory to list").required(true).index(1)),
        )
        .subcommand(
            Command::new("dpkg-version")
                .about("Show the installed version of a Debian package")
                .arg(Arg::new("package").help("Package name").required(true).index(1)),
        )
        .subcommand(
            Command::new("check-version")
                .about("Check GitHub for a newer release of an app")
                .arg(Arg::new("app").help("Application name").required(true).index(1))
                .arg(
                    Arg::new("current")
                        .help("Currently installed version")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("exit")
                        .long("exit")
                        .help("Exit with status 1 when outdated")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("ghinfo-dir")
                        .long("ghinfo-dir")
                        .value_name("DIR")
                        .help("Directory with <owner>/<repo> files (default: /etc/ghinfo)"),
                ),
        )
}
