// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use iced_marquee::app::{self, paths, Flags};
use log::LevelFilter;

const HELP: &str = "\
Iced Marquee - movie details from The Movie Database

USAGE:
  iced_marquee [OPTIONS]

OPTIONS:
  --movie <QUERY>      Movie to search for (default: avengers)
  --lang <LOCALE>      Interface language, e.g. en-US or fr
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  TMDB_API_KEY               TMDB v3 API key (required)
  ICED_MARQUEE_CONFIG_DIR    Config directory override
  RUST_LOG                   Log filter, e.g. iced_marquee=debug
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("iced_marquee", LevelFilter::Debug)
        .init();
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        movie: args.opt_value_from_str("--movie")?,
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    if std::env::args().any(|arg| arg == "--help" || arg == "-h") {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
