use std::io;
use std::path::Path;

use crate::cli::commands::{assemble_all, load_data, project_context};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{PrintOptions, build_document, write_document};
use crate::store::ScheduleStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        file,
        format,
        days,
        detail,
        contacts,
        no_conflicts,
        force,
    } = cmd
    {
        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        let day_ids = match days {
            Some(list) => Some(parse_day_ids(list)?),
            None => None,
        };

        let data = load_data(cfg)?;
        let store = ScheduleStore::from_snapshot(data.schedule.clone());
        let all_days = store.list_days();

        let detect_conflicts = !no_conflicts;
        let views = assemble_all(&all_days, detect_conflicts);

        let ctx = project_context(cfg, &data, &all_days);
        let opts = PrintOptions {
            day_ids,
            detail: *detail,
            contacts: *contacts,
            conflicts: detect_conflicts,
        };

        let doc = build_document(&views, &ctx, &opts);
        write_document(&doc, path, format, *force)?;
    }

    Ok(())
}

/// Parse a comma-separated day id list, e.g. "1,3".
fn parse_day_ids(list: &str) -> AppResult<Vec<i64>> {
    list.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map_err(|_| AppError::Export(format!("Invalid day id: '{part}'")))
        })
        .collect()
}
