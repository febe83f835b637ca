//! DKIM rules: a key record must exist at the selector.

use super::messages::{dkim_not_found, DKIM_VALID};
use crate::dns::SelectionOutcome;
use crate::models::ValidationVerdict;

// Selection concatenates every record at the selector name, so anything
// present counts as one key record. The key itself is not verified.
pub(super) fn validate(selection: &SelectionOutcome, selector: &str) -> ValidationVerdict {
    match selection {
        SelectionOutcome::None => ValidationVerdict::fail(dkim_not_found(selector)),
        SelectionOutcome::Single(_) | SelectionOutcome::Multiple(_) => {
            ValidationVerdict::pass(DKIM_VALID)
        }
    }
}
