use crate::cli::commands::{open_reporting_db, resolve_filter};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filter,
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = open_reporting_db(cfg)?;
        let (filter, as_of) = resolve_filter(&mut pool, filter)?;
        ExportLogic::export(&mut pool, *format, file, &filter, as_of, *force)?;
    }
    Ok(())
}
