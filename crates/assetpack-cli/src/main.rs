//! assetpack CLI entry point.
//!
//! Parses arguments, loads settings, resolves the build mode once and
//! dispatches to the selected command.

use assetpack_cli::commands::{self, Session};
use assetpack_cli::{cli, error, logger, ui};
use assetpack_config::ToolSettings;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let settings = if args.command.needs_settings() {
        Session::load_settings(args.cwd.as_deref())
    } else {
        Ok(ToolSettings::default())
    };

    let configured_level = settings
        .as_ref()
        .ok()
        .and_then(|settings| settings.log_level.as_deref());
    logger::init_logger(args.verbose, args.quiet, args.no_color, configured_level);
    ui::init_colors(!args.no_color && logger::should_use_colors());

    let session = Session::new(
        Session::resolve_mode(args.mode),
        settings.map_err(error::cli_error_to_miette)?,
    );

    let mut stdout = std::io::stdout().lock();
    let result = match args.command {
        cli::Command::Print(print_args) => {
            commands::print_execute(&session, &print_args, &mut stdout)
        }
        cli::Command::Check => commands::check_execute(&session),
        cli::Command::Route(route_args) => {
            commands::route_execute(&session, &route_args, &mut stdout)
        }
        cli::Command::Schema => commands::schema_execute(&mut stdout),
    };

    result.map_err(error::cli_error_to_miette)
}
