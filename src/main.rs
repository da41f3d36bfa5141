// SPDX-License-Identifier: MPL-2.0
use iced_notify::app::{self, Flags};
use std::path::PathBuf;

const USAGE: &str = "\
iced-notify: toast notification demo

USAGE:
    iced-notify [--config <path>] [--placement <name>]

OPTIONS:
    --config <path>      TOML file with notification defaults
    --placement <name>   right-top | left-top | right-bottom | left-bottom | center
    -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            eprintln!("{err}");
            None
        }
    };
    let placement: Option<String> = match args.opt_value_from_str("--placement") {
        Ok(placement) => placement,
        Err(err) => {
            eprintln!("{err}");
            None
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }

    app::run(Flags {
        config_path,
        placement,
    })
}
