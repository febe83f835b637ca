//! SPF rules: presence and uniqueness only.

use super::messages::{SPF_MULTIPLE, SPF_NOT_FOUND, SPF_VALID};
use crate::dns::SelectionOutcome;
use crate::models::ValidationVerdict;

pub(super) fn validate(selection: &SelectionOutcome) -> ValidationVerdict {
    match selection {
        SelectionOutcome::None => ValidationVerdict::fail(SPF_NOT_FOUND),
        SelectionOutcome::Multiple(_) => ValidationVerdict::fail(SPF_MULTIPLE),
        SelectionOutcome::Single(_) => ValidationVerdict::pass(SPF_VALID),
    }
}
