use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, ThresholdConfig};
use crate::monitor::{
    LCCA_6_HOUR, SIGNATURE_6_HOUR, SnmpTarget, SnmpVersion, ThresholdSpec, Thresholds,
    UsmCredentials,
};

/// Call the SNMP agent to gather message counters from Mirth Connect.
#[derive(Debug, Clone, Parser)]
#[command(name = "check_mirth", disable_version_flag = true)]
pub struct Cli {
    /// Host name of the SNMP agent.
    pub hostname: String,

    /// SNMP port to connect to.
    #[arg(short = 'p', long = "port", default_value_t = 161)]
    pub port: u16,

    /// SNMP version (1, 2, 3).
    #[arg(short = 'v', default_value_t = 3)]
    pub version: u8,

    /// SNMP community string (versions 1 and 2).
    #[arg(short = 'C', long = "community", default_value = "public")]
    pub community: String,

    /// SNMPv3 security level (noAuthNoPriv|authNoPriv|authPriv).
    #[arg(short = 'l', default_value = "noAuthNoPriv")]
    pub sec_level: String,

    /// SNMPv3 security name (user name).
    #[arg(short = 'u')]
    pub sec_name: Option<String>,

    /// SNMPv3 authentication protocol (MD5 or SHA).
    #[arg(short = 'a')]
    pub auth_protocol: Option<String>,

    /// SNMPv3 authentication pass phrase.
    #[arg(short = 'A')]
    pub auth_password: Option<String>,

    /// SNMPv3 privacy protocol (DES or AES).
    #[arg(short = 'x')]
    pub priv_protocol: Option<String>,

    /// SNMPv3 privacy pass phrase.
    #[arg(short = 'X')]
    pub priv_password: Option<String>,

    /// Seconds the whole check may run before it reports CRITICAL.
    #[arg(
        short = 't',
        long = "timeout",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Verbose diagnostics on stderr; repeat for more.
    #[arg(short = 'V', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Warning threshold for lcca-6-hour.
    #[arg(long = "lcca-warning", allow_negative_numbers = true)]
    pub lcca_warning: Option<i64>,

    /// Critical threshold for lcca-6-hour.
    #[arg(long = "lcca-critical", allow_negative_numbers = true)]
    pub lcca_critical: Option<i64>,

    /// Warning threshold for signature-6-hour.
    #[arg(long = "signature-warning", allow_negative_numbers = true)]
    pub signature_warning: Option<i64>,

    /// Critical threshold for signature-6-hour.
    #[arg(long = "signature-critical", allow_negative_numbers = true)]
    pub signature_critical: Option<i64>,

    /// TOML file with the weekly exclusion schedule and default thresholds.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Flags win over the config file, field by field.
    pub fn thresholds(&self, file: &ThresholdConfig) -> Thresholds {
        Thresholds::default()
            .with(
                LCCA_6_HOUR,
                ThresholdSpec::new(
                    self.lcca_warning.or(file.lcca_warning),
                    self.lcca_critical.or(file.lcca_critical),
                ),
            )
            .with(
                SIGNATURE_6_HOUR,
                ThresholdSpec::new(
                    self.signature_warning.or(file.signature_warning),
                    self.signature_critical.or(file.signature_critical),
                ),
            )
    }

    pub fn snmp_target(&self) -> Result<SnmpTarget, ConfigError> {
        let version = SnmpVersion::from_number(self.version).ok_or_else(|| {
            ConfigError::Validation(format!("unknown SNMP version {}", self.version))
        })?;

        Ok(SnmpTarget {
            host: self.hostname.clone(),
            port: self.port,
            version,
            community: self.community.clone(),
            usm: UsmCredentials {
                security_level: self.sec_level.clone(),
                security_name: self.sec_name.clone(),
                auth_protocol: self.auth_protocol.clone(),
                auth_password: self.auth_password.clone(),
                privacy_protocol: self.priv_protocol.clone(),
                privacy_password: self.priv_password.clone(),
            },
        })
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
