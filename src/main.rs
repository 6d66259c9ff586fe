// SPDX-License-Identifier: MPL-2.0
use squad_desk::app::{self, paths, Flags};
use squad_desk::logging;
use squad_desk::ui::theming::ThemeMode;

const HELP: &str = "\
SquadDesk: rosters, drills and schedules for coaches

USAGE:
  squad_desk [OPTIONS]

OPTIONS:
  --theme <light|dark|system>  Theme for this session (not saved)
  --data-dir <DIR>             Directory for state and log files
  --config-dir <DIR>           Directory containing settings.toml
  --mock-delay-ms <MS>         Delay of the built-in sample data source
  --api-url <URL>              Load data from this server instead of samples
  -h, --help                   Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        mock_delay_ms: args.opt_value_from_str("--mock-delay-ms")?,
        api_url: args.opt_value_from_str("--api-url")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments {remaining:?}");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("Error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    let _logging = logging::init(paths::get_app_data_dir());

    app::run(flags)
}
