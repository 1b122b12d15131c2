// SPDX-License-Identifier: MPL-2.0
use lumbini_site::app::{self, Flags};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
lumbini_site: Lumbini Technologies company site

USAGE:
  lumbini_site [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language, e.g. en-US or fr
  --route <PATH>        Page to open, e.g. /Gallery (unknown paths open Home)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory holding persisted state
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lumbini_site=info"));
    fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        route: args.opt_value_from_str("--route")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    })
}
