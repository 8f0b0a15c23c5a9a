// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Target};
use hotel_showcase::app::{self, paths, Flags};
use hotel_showcase::ui::theming::ThemeMode;
use log::LevelFilter;

const HELP: &str = "\
hotel_showcase

USAGE:
  hotel_showcase [OPTIONS]

OPTIONS:
  --content <FILE>       Content TOML file to display
  --config-dir <DIR>     Directory holding settings.toml
  --theme <MODE>         light, dark or system
  -h, --help             Print this help
";

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("hotel_showcase", LevelFilter::Debug)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        content: args.opt_value_from_str("--content")?,
        theme: args.opt_value_from_str::<_, ThemeMode>("--theme")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
