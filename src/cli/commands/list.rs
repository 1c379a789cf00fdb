use crate::cli::commands::{assemble_all, load_data, project_context};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{PrintOptions, build_document, text};
use crate::store::ScheduleStore;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        day,
        details,
        no_conflicts,
    } = cmd
    {
        let data = load_data(cfg)?;
        let store = ScheduleStore::from_snapshot(data.schedule.clone());

        let days = match day {
            // Unknown id must fail loudly, not print an empty sheet.
            Some(id) => vec![store.day(*id)?],
            None => store.list_days(),
        };

        if days.is_empty() {
            println!("No schedule days yet. Add one with `runsheet day add <NAME>`.");
            return Ok(());
        }

        let detect_conflicts = !no_conflicts;
        let views = assemble_all(&days, detect_conflicts);

        let conflict_count = views
            .iter()
            .flat_map(|v| &v.events)
            .filter(|e| e.conflict)
            .count();

        let ctx = project_context(cfg, &data, &days);
        let opts = PrintOptions {
            day_ids: None,
            detail: *details,
            contacts: false,
            conflicts: detect_conflicts,
        };

        let doc = build_document(&views, &ctx, &opts);
        print!("{}", text::render_document(&doc, true));

        if conflict_count > 0 {
            warning(format!("{conflict_count} events overlap another event"));
        }
    }

    Ok(())
}
