use crate::monitor::{EvaluationResult, Status};
use crate::probe::ProbeError;

/// Reserved warn;crit;min;max slots, left empty.
const PERFDATA_SLOTS: &str = ";;;;";

/// `STATUS: a=1 b=2 | a=1;;;; b=2;;;;`
pub fn status_line(result: &EvaluationResult) -> String {
    let display = result
        .pairs()
        .map(|(label, value)| format!("{}={}", label, value))
        .collect::<Vec<_>>()
        .join(" ");

    let perfdata = result
        .pairs()
        .map(|(label, value)| format!("{}={}{}", label, value, PERFDATA_SLOTS))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}: {} | {}", result.status, display, perfdata)
}

pub fn failure_line(status: Status, message: &str) -> String {
    format!("{}: {}", status, message.replace('\n', " "))
}

/// The single console line for a finished run, with the status that picks the exit code.
pub fn outcome(result: Result<EvaluationResult, ProbeError>) -> (Status, String) {
    match result {
        Ok(result) => (result.status, status_line(&result)),
        Err(error) => {
            log::error!("check_failed error={}", error);
            let status = error.status();
            (status, failure_line(status, &error.to_string()))
        }
    }
}
