pub mod probe;

use std::process;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "ns")]
#[command(about = "Resolve a hostname and optionally attempt a TCP connect.")]
#[command(disable_help_flag = true)]
pub struct CommandLine {
    /// Attempt to connect
    #[arg(short = 'c', long = "connect")]
    pub connect: bool,

    /// Host name to resolve
    #[arg(value_name = "FQDN")]
    pub host: String,

    /// Port to probe, numeric only
    #[arg(value_name = "PORT", default_value = "80")]
    pub port: String,

    /// This help text
    #[arg(short = 'h', short_alias = '?', long = "help", action = ArgAction::Help)]
    help: Option<bool>,
}

impl CommandLine {
    /// Parses the command line, pinning the exit-code contract: help exits
    /// zero, any argument problem prints usage and exits one.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(commands) => commands,
            Err(err) => {
                let _ = err.print();
                match err.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
                    _ => process::exit(1),
                }
            }
        }
    }
}
