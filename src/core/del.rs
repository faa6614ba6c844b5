use crate::db::EntryStore;
use crate::errors::AppResult;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete entry `id`. Returns `false` when there was nothing to delete.
    pub fn apply<S: EntryStore>(store: &mut S, id: i64) -> AppResult<bool> {
        store.delete_one(id)
    }
}
