use thiserror::Error;

use crate::system::{CommandError, run_command};

use super::snapshot::RawMetrics;

/// Mirth Connect subtree under the enterprise arc (`SNMPv2-SMI::enterprises.41212.11`).
pub const MIRTH_OID_PREFIX: &str = ".1.3.6.1.4.1.41212.11";
const SNMPWALK: &str = "snmpwalk";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("{program} exited with status {status}: {stderr}")]
    Failed {
        program: String,
        status: i32,
        stderr: String,
    },
    #[error("agent returned no values under the Mirth subtree")]
    Empty,
}

pub trait MetricsProvider {
    async fn collect_metrics(&mut self) -> Result<RawMetrics, QueryError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnmpVersion {
    V1,
    V2c,
    V3,
}

impl SnmpVersion {
    pub fn from_number(version: u8) -> Option<Self> {
        match version {
            1 => Some(Self::V1),
            2 => Some(Self::V2c),
            3 => Some(Self::V3),
            _ => None,
        }
    }

    fn as_arg(self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2c => "2c",
            Self::V3 => "3",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsmCredentials {
    pub security_level: String,
    pub security_name: Option<String>,
    pub auth_protocol: Option<String>,
    pub auth_password: Option<String>,
    pub privacy_protocol: Option<String>,
    pub privacy_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnmpTarget {
    pub host: String,
    pub port: u16,
    pub version: SnmpVersion,
    pub community: String,
    pub usm: UsmCredentials,
}

impl SnmpTarget {
    fn walk_args(&self) -> Vec<String> {
        let mut args = vec![
            "-On".to_string(),
            "-Oq".to_string(),
            "-v".to_string(),
            self.version.as_arg().to_string(),
        ];

        match self.version {
            SnmpVersion::V1 | SnmpVersion::V2c => {
                args.push("-c".to_string());
                args.push(self.community.clone());
            }
            SnmpVersion::V3 => {
                args.push("-l".to_string());
                args.push(self.usm.security_level.clone());
                for (flag, value) in [
                    ("-u", &self.usm.security_name),
                    ("-a", &self.usm.auth_protocol),
                    ("-A", &self.usm.auth_password),
                    ("-x", &self.usm.privacy_protocol),
                    ("-X", &self.usm.privacy_password),
                ] {
                    if let Some(value) = value {
                        args.push(flag.to_string());
                        args.push(value.clone());
                    }
                }
            }
        }

        args.push(format!("{}:{}", self.host, self.port));
        args.push(MIRTH_OID_PREFIX.to_string());
        args
    }
}

/// Walks the Mirth subtree with the net-snmp command line tools.
pub struct SnmpWalkProvider {
    target: SnmpTarget,
    timeout_secs: u64,
}

impl SnmpWalkProvider {
    pub fn new(target: SnmpTarget, timeout_secs: u64) -> Self {
        Self {
            target,
            timeout_secs,
        }
    }
}

impl MetricsProvider for SnmpWalkProvider {
    async fn collect_metrics(&mut self) -> Result<RawMetrics, QueryError> {
        let args = self.target.walk_args();
        log::debug!(
            "snmp_walk_start host={} port={} version={}",
            self.target.host,
            self.target.port,
            self.target.version.as_arg()
        );

        let output = run_command(SNMPWALK, &args, self.timeout_secs).await?;
        if !output.success() {
            return Err(QueryError::Failed {
                program: SNMPWALK.to_string(),
                status: output.status,
                stderr: output.stderr.trim().to_string(),
            });
        }

        let values = parse_walk_output(&output.stdout);
        if values.is_empty() {
            return Err(QueryError::Empty);
        }

        log::debug!("snmp_walk_done values={}", values.len());
        Ok(values)
    }
}

/// Parses `-On -Oq` output (`.1.3.6...41212.11.<n> <value>`), keyed by the last OID arc.
pub(crate) fn parse_walk_output(stdout: &str) -> RawMetrics {
    let mut values = RawMetrics::new();

    for line in stdout.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let Some((oid, value)) = line.split_once(char::is_whitespace) else {
            log::debug!("snmp_walk_line_skipped reason=no_value line={}", line);
            continue;
        };

        let Some(suffix) = oid
            .strip_prefix(MIRTH_OID_PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
        else {
            log::debug!("snmp_walk_line_skipped reason=outside_subtree oid={}", oid);
            continue;
        };

        let Some(index) = suffix
            .rsplit('.')
            .next()
            .and_then(|arc| arc.parse::<u32>().ok())
        else {
            log::debug!("snmp_walk_line_skipped reason=bad_index oid={}", oid);
            continue;
        };

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
            .unwrap_or(value);
        values.insert(index, value.to_string());
    }

    values
}

#[cfg(test)]
pub(crate) struct MockMetricsProvider {
    sequence: Vec<Result<RawMetrics, QueryError>>,
}

#[cfg(test)]
impl MockMetricsProvider {
    pub(crate) fn new(sequence: Vec<Result<RawMetrics, QueryError>>) -> Self {
        Self { sequence }
    }
}

#[cfg(test)]
impl MetricsProvider for MockMetricsProvider {
    async fn collect_metrics(&mut self) -> Result<RawMetrics, QueryError> {
        if self.sequence.is_empty() {
            return Err(QueryError::Empty);
        }

        self.sequence.remove(0)
    }
}
