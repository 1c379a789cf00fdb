use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { path, .. } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
            return Ok(());
        }

        // Bare `config` and `config --print` both print.
        cfg.print()?;
    }
    Ok(())
}
