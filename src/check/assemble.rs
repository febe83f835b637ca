//! Result assembly.

use crate::dns::{select_records, RawLookup, SelectionOutcome};
use crate::error_handling::ErrorType;
use crate::models::{CheckRequest, CheckResult, Status, ValidationVerdict};
use crate::parse::parse_record;
use crate::policy::validate;

/// An assembled result and the outcome category it falls in.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The check result
    pub result: CheckResult,
    /// `None` for a clean pass
    pub error_type: Option<ErrorType>,
}

/// Composes selection, parsing and validation of `lookup` into a result.
///
/// Pure: no I/O, no clock other than the result timestamp.
///
/// - A failed lookup gives `status=error` with the failure as message and
///   nothing else.
/// - Zero qualifying records give the protocol's "not found" verdict.
/// - Several qualifying records are all listed in `records`.
/// - A single record is carried as `raw_record`. Its parsed fields are kept
///   only when the verdict is `pass` or `warning`.
pub fn evaluate(request: &CheckRequest, lookup: &RawLookup) -> Evaluation {
    if let Some(error) = &lookup.error {
        return Evaluation {
            result: CheckResult::new(request, ValidationVerdict::from_lookup_error(error)),
            error_type: Some(ErrorType::from(error)),
        };
    }

    let selection = select_records(request.protocol(), lookup);
    match &selection {
        SelectionOutcome::None => Evaluation {
            result: CheckResult::new(request, validate(request, &selection, None)),
            error_type: Some(ErrorType::NoQualifyingRecord),
        },
        SelectionOutcome::Multiple(records) => Evaluation {
            result: CheckResult::new(request, validate(request, &selection, None))
                .with_records(records.clone()),
            error_type: Some(ErrorType::AmbiguousRecordSet),
        },
        SelectionOutcome::Single(record) => {
            let (fields, parsed) = parse_record(request.protocol(), record);
            let verdict = validate(request, &selection, Some(&fields));
            let result = CheckResult::new(request, verdict).with_raw_record(record.clone());
            match result.status() {
                Status::Pass | Status::Warning => Evaluation {
                    result: result.with_parsed(fields, parsed),
                    error_type: None,
                },
                Status::Fail | Status::Error => Evaluation {
                    result,
                    error_type: Some(ErrorType::MalformedPolicy),
                },
            }
        }
    }
}
