use crate::cli::commands::{load_data, save_data};
use crate::cli::parser::DayAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::DayPatch;
use crate::store::ScheduleStore;
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use crate::utils::table::Table;

pub fn handle(action: &DayAction, cfg: &Config) -> AppResult<()> {
    match action {
        DayAction::Add { name, date } => {
            let date = match date {
                Some(d) => Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?),
                None => None,
            };

            let mut data = load_data(cfg)?;
            let store = ScheduleStore::from_snapshot(data.schedule);
            let day = store.add_day(name, date)?;
            data.schedule = store.snapshot();
            save_data(cfg, &data)?;

            success(format!("Day '{}' added with id {}", day.name, day.id));
        }

        DayAction::Edit {
            id,
            name,
            date,
            clear_date,
            order,
        } => {
            let date_change = if *clear_date {
                Some(None)
            } else {
                match date {
                    Some(d) => {
                        Some(Some(parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?))
                    }
                    None => None,
                }
            };

            let patch = DayPatch {
                name: name.clone(),
                date: date_change,
                sort_order: *order,
            };

            let mut data = load_data(cfg)?;
            let store = ScheduleStore::from_snapshot(data.schedule);
            let day = store.update_day(*id, patch)?;
            data.schedule = store.snapshot();
            save_data(cfg, &data)?;

            success(format!("Day {} updated", day.id));
        }

        DayAction::Del { id } => {
            let mut data = load_data(cfg)?;
            let store = ScheduleStore::from_snapshot(data.schedule);
            store.remove_day(*id)?;
            data.schedule = store.snapshot();
            save_data(cfg, &data)?;

            success(format!("Day {id} deleted (including its events)"));
        }

        DayAction::List => {
            let data = load_data(cfg)?;
            let store = ScheduleStore::from_snapshot(data.schedule);
            let days = store.list_days();

            if days.is_empty() {
                println!("No schedule days yet. Add one with `runsheet day add <NAME>`.");
                return Ok(());
            }

            let mut table = Table::new(vec!["id", "name", "date", "events"]);
            for d in &days {
                table.add_row(vec![
                    d.id.to_string(),
                    d.name.clone(),
                    d.date.map(|x| x.to_string()).unwrap_or_default(),
                    d.events.len().to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
