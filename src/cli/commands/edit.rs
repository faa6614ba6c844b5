use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::SqliteStore;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult};
use crate::models::{EntryPatch, ValueChange};
use crate::ui::messages::success;
use crate::utils::date::parse_date_arg;
use crate::utils::formatting::parse_measure;
use crate::utils::time::parse_optional_time;

/// Change an entry in place.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        time,
        values,
        clear,
    } = cmd
    {
        let mut patch = EntryPatch {
            date: date.as_deref().map(parse_date_arg).transpose()?,
            time: parse_optional_time(time.as_ref())?,
            ..Default::default()
        };

        for (idx, raw) in values.as_array().into_iter().enumerate() {
            let cleared = clear.iter().any(|f| f.index() == idx);
            patch.values[idx] = value_change(idx, raw.map(String::as_str), cleared)?;
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        let updated = EditLogic::apply(&mut store, *id, &patch)?;

        audit(store.conn(), "edit", &id.to_string(), "Entry updated");
        success(format!(
            "Entry #{} updated ({} {}).",
            updated.id,
            updated.date_str(),
            updated.local_time().format("%H:%M")
        ));
    }

    Ok(())
}

/// A value given as empty or zero clears the field, like `--clear`.
fn value_change(idx: usize, raw: Option<&str>, cleared: bool) -> AppResult<ValueChange> {
    match (raw, cleared) {
        (Some(_), true) => Err(AppError::Validation(format!(
            "value{} is both set and cleared",
            idx + 1
        ))),
        (None, true) => Ok(ValueChange::Clear),
        (None, false) => Ok(ValueChange::Keep),
        (Some(s), false) => Ok(match parse_measure(s)? {
            Some(v) => ValueChange::Set(v),
            None => ValueChange::Clear,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parser::MeasureField;

    #[test]
    fn value_changes() {
        assert_eq!(value_change(0, None, false).unwrap(), ValueChange::Keep);
        assert_eq!(value_change(0, None, true).unwrap(), ValueChange::Clear);
        assert_eq!(value_change(0, Some("2.5"), false).unwrap(), ValueChange::Set(2.5));
        assert_eq!(value_change(0, Some("0"), false).unwrap(), ValueChange::Clear);
        assert!(value_change(1, Some("3"), true).is_err());
        assert!(value_change(1, Some("x"), false).is_err());
    }

    #[test]
    fn clear_field_indexes() {
        assert_eq!(MeasureField::V3.index(), 2);
    }
}
