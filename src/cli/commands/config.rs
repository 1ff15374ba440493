use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        let path = Config::config_file();

        if *print_config {
            if !path.exists() {
                info(format!(
                    "No configuration file at {}: showing defaults.",
                    path.display()
                ));
            }
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        } else {
            println!("{}", path.display());
        }
    }

    Ok(())
}
