use crate::db::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, EntryPatch};

pub struct EditLogic;

impl EditLogic {
    /// Apply `patch` to entry `id` in place. The identifier never changes.
    pub fn apply<S: EntryStore>(store: &mut S, id: i64, patch: &EntryPatch) -> AppResult<Entry> {
        if patch.is_empty() {
            return Err(AppError::Validation(
                "nothing to change: pass --date, --time, a value or --clear".into(),
            ));
        }
        store.update(id, patch)
    }
}
