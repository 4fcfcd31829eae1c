// SPDX-License-Identifier: MPL-2.0
use cyber_portfolio::app::{self, paths, Flags};

const HELP: &str = "\
Usage: portfolio [OPTIONS]

Options:
  --lang <id>          Interface language (e.g. en-US, fr)
  --section <id>       Section shown at startup
                       (home, skills, projects, certificates, contact)
  --config-dir <dir>   Directory containing settings.toml
  --assets-dir <dir>   Directory containing profile icons
  --no-animations      Disable section transitions
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_string(&mut args, "--lang"),
        section: opt_string(&mut args, "--section"),
        config_dir: opt_string(&mut args, "--config-dir"),
        assets_dir: opt_string(&mut args, "--assets-dir"),
        no_animations: args.contains("--no-animations"),
    };

    for unused in args.finish() {
        tracing::warn!(argument = ?unused, "ignoring unknown argument");
    }

    paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());

    app::run(flags)
}

/// Reads an optional string option, logging and dropping malformed values.
fn opt_string(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str::<_, String>(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, error = %err, "ignoring invalid option value");
            None
        }
    }
}
