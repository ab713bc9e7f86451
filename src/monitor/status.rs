use std::fmt;

/// Aggregate verdict reported to the monitoring console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

const EXIT_CODES: [(Status, i32); 4] = [
    (Status::Ok, 0),
    (Status::Warning, 1),
    (Status::Critical, 2),
    (Status::Unknown, 3),
];

impl Status {
    pub fn exit_code(self) -> i32 {
        EXIT_CODES
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, code)| *code)
            .unwrap_or(3)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
