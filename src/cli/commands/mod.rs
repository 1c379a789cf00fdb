pub mod backup;
pub mod config;
pub mod day;
pub mod event;
pub mod export;
pub mod init;
pub mod list;
pub mod template;
pub mod vendor;

use std::path::PathBuf;

use crate::config::Config;
use crate::core::assembler::{DayView, assemble_day};
use crate::errors::AppResult;
use crate::export::ProjectContext;
use crate::models::ScheduleDay;
use crate::persist::{self, ProjectData};
use crate::utils::date::resolve_locale;
use crate::utils::path::expand_tilde;

pub(crate) fn data_path(cfg: &Config) -> PathBuf {
    expand_tilde(&cfg.data_file)
}

pub(crate) fn load_data(cfg: &Config) -> AppResult<ProjectData> {
    persist::load(&data_path(cfg))
}

pub(crate) fn save_data(cfg: &Config, data: &ProjectData) -> AppResult<()> {
    persist::save(&data_path(cfg), data)
}

/// Assemble every day in display order.
pub(crate) fn assemble_all(days: &[ScheduleDay], detect_conflicts: bool) -> Vec<DayView> {
    days.iter().map(|d| assemble_day(d, detect_conflicts)).collect()
}

/// Projection context from config plus data file: couple and venue come
/// from the config, the header date is the first dated day, and only
/// booked vendors are handed to the projector.
pub(crate) fn project_context(cfg: &Config, data: &ProjectData, days: &[ScheduleDay]) -> ProjectContext {
    ProjectContext {
        couple: cfg.couple.clone(),
        wedding_date: days.iter().find_map(|d| d.date),
        location: (!cfg.location.is_empty()).then(|| cfg.location.clone()),
        vendors: data.vendors.iter().filter(|v| v.is_booked()).cloned().collect(),
        locale: resolve_locale(&cfg.locale),
    }
}
