use crate::cli::commands::{load_data, save_data};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::template::default_day_program;
use crate::errors::AppResult;
use crate::store::ScheduleStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Template { day } = cmd {
        let mut data = load_data(cfg)?;
        let store = ScheduleStore::from_snapshot(data.schedule);

        let created = store.create_bulk_events(*day, default_day_program())?;
        data.schedule = store.snapshot();
        save_data(cfg, &data)?;

        success(format!(
            "Applied the default program: {} events added to day {}",
            created.len(),
            day
        ));
    }

    Ok(())
}
