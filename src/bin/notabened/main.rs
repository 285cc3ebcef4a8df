mod cli;

use clap::{crate_name, Parser};
use log::info;
use notabene::config::figment::FigmentExt;
use notabene::error_exit;
use notabene::logging::init_logging;
use rocket::figment::Figment;

use crate::cli::CliConfig;

fn main() {
    init_logging();

    info!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(cli_config.config_file);

    let rocket = match notabene::server::build_rocket(figment) {
        Ok(rocket) => rocket,
        Err(e) => error_exit!("failed to set up the server: {e}"),
    };
    if let Err(e) = rocket::execute(rocket.launch()) {
        error_exit!("failed to launch rocket: {e}");
    }
}
