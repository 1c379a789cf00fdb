use crate::cli::commands::{load_data, save_data};
use crate::cli::parser::EventAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{EventPatch, NewEvent};
use crate::store::ScheduleStore;
use crate::ui::messages::success;

pub fn handle(action: &EventAction, cfg: &Config) -> AppResult<()> {
    match action {
        EventAction::Add {
            day,
            title,
            start,
            end,
            location,
            notes,
            owner,
            visibility,
        } => {
            let input = NewEvent {
                title: title.clone(),
                start_time: start.clone(),
                end_time: end.clone(),
                location: location.clone(),
                description: notes.clone(),
                owner: owner.clone(),
                visibility: visibility.clone(),
            };

            let mut data = load_data(cfg)?;
            let store = ScheduleStore::from_snapshot(data.schedule);
            let event = store.add_event(*day, input)?;
            data.schedule = store.snapshot();
            save_data(cfg, &data)?;

            success(format!(
                "Event '{}' added with id {} ({})",
                event.title, event.id, event.start_time
            ));
        }

        EventAction::Edit {
            id,
            title,
            start,
            end,
            clear_end,
            location,
            notes,
            owner,
            visibility,
            order,
        } => {
            // An empty string passed to an optional field clears it in
            // the store; --clear-end does the same without arguing about
            // shell quoting.
            let end_change = if *clear_end {
                Some(None)
            } else {
                end.clone().map(Some)
            };

            let patch = EventPatch {
                title: title.clone(),
                start_time: start.clone(),
                end_time: end_change,
                location: location.clone().map(Some),
                description: notes.clone().map(Some),
                owner: owner.clone().map(Some),
                visibility: visibility.clone().map(Some),
                sort_order: *order,
            };

            let mut data = load_data(cfg)?;
            let store = ScheduleStore::from_snapshot(data.schedule);
            let event = store.update_event(*id, patch)?;
            data.schedule = store.snapshot();
            save_data(cfg, &data)?;

            success(format!("Event {} updated", event.id));
        }

        EventAction::Del { id } => {
            let mut data = load_data(cfg)?;
            let store = ScheduleStore::from_snapshot(data.schedule);
            store.remove_event(*id)?;
            data.schedule = store.snapshot();
            save_data(cfg, &data)?;

            success(format!("Event {id} deleted"));
        }
    }

    Ok(())
}
