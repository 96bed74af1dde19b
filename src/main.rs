// SPDX-License-Identifier: MPL-2.0
use iced_catalog::app::{self, Flags};
use std::process::ExitCode;
use tracing::error;

const HELP: &str = "\
iced_catalog - add local files and web services to your data catalog

USAGE:
  iced_catalog [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --i18n-dir <DIR>      Extra directory of Fluent .ftl translations
  -h, --help            Print this help

ENVIRONMENT:
  ICED_CATALOG_CONFIG_DIR   Config directory when --config-dir is absent
  RUST_LOG                  Log filter (default: info)
";

fn configure_logging() {
    use tracing_subscriber::prelude::*;

    // Default to info level if RUST_LOG not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(true)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    configure_logging();

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let err = iced_catalog::error::Error::from(err);
            error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
