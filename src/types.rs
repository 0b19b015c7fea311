use std::fmt;
use std::str::FromStr;

use nix::libc;

/// Syslog facility an entry's stderr is relayed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facility {
    Auth,
    AuthPriv,
    Cron,
    Daemon,
    Ftp,
    Kern,
    Lpr,
    Mail,
    News,
    Syslog,
    User,
    Uucp,
    Local0,
    Local1,
    Local2,
    Local3,
    Local4,
    Local5,
    Local6,
    Local7,
}

impl Facility {
    pub fn code(self) -> libc::c_int {
        match self {
            Facility::Auth => libc::LOG_AUTH,
            Facility::AuthPriv => libc::LOG_AUTHPRIV,
            Facility::Cron => libc::LOG_CRON,
            Facility::Daemon => libc::LOG_DAEMON,
            Facility::Ftp => libc::LOG_FTP,
            Facility::Kern => libc::LOG_KERN,
            Facility::Lpr => libc::LOG_LPR,
            Facility::Mail => libc::LOG_MAIL,
            Facility::News => libc::LOG_NEWS,
            Facility::Syslog => libc::LOG_SYSLOG,
            Facility::User => libc::LOG_USER,
            Facility::Uucp => libc::LOG_UUCP,
            Facility::Local0 => libc::LOG_LOCAL0,
            Facility::Local1 => libc::LOG_LOCAL1,
            Facility::Local2 => libc::LOG_LOCAL2,
            Facility::Local3 => libc::LOG_LOCAL3,
            Facility::Local4 => libc::LOG_LOCAL4,
            Facility::Local5 => libc::LOG_LOCAL5,
            Facility::Local6 => libc::LOG_LOCAL6,
            Facility::Local7 => libc::LOG_LOCAL7,
        }
    }
}

impl FromStr for Facility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auth" => Ok(Facility::Auth),
            "authpriv" => Ok(Facility::AuthPriv),
            "cron" => Ok(Facility::Cron),
            "daemon" => Ok(Facility::Daemon),
            "ftp" => Ok(Facility::Ftp),
            "kern" => Ok(Facility::Kern),
            "lpr" => Ok(Facility::Lpr),
            "mail" => Ok(Facility::Mail),
            "news" => Ok(Facility::News),
            "syslog" => Ok(Facility::Syslog),
            "user" => Ok(Facility::User),
            "uucp" => Ok(Facility::Uucp),
            "local0" => Ok(Facility::Local0),
            "local1" => Ok(Facility::Local1),
            "local2" => Ok(Facility::Local2),
            "local3" => Ok(Facility::Local3),
            "local4" => Ok(Facility::Local4),
            "local5" => Ok(Facility::Local5),
            "local6" => Ok(Facility::Local6),
            "local7" => Ok(Facility::Local7),
            other => Err(format!("unknown syslog facility: {other}")),
        }
    }
}

/// Syslog severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Emerg,
    Alert,
    Crit,
    Err,
    Warning,
    Notice,
    Info,
    Debug,
}

impl Severity {
    pub fn code(self) -> libc::c_int {
        match self {
            Severity::Emerg => libc::LOG_EMERG,
            Severity::Alert => libc::LOG_ALERT,
            Severity::Crit => libc::LOG_CRIT,
            Severity::Err => libc::LOG_ERR,
            Severity::Warning => libc::LOG_WARNING,
            Severity::Notice => libc::LOG_NOTICE,
            Severity::Info => libc::LOG_INFO,
            Severity::Debug => libc::LOG_DEBUG,
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, <Self as FromStr>::Err> {
        match s.trim().to_lowercase().as_str() {
            "emerg" | "panic" => Ok(Severity::Emerg),
            "alert" => Ok(Severity::Alert),
            "crit" => Ok(Severity::Crit),
            "err" | "error" => Ok(Severity::Err),
            "warning" | "warn" => Ok(Severity::Warning),
            "notice" => Ok(Severity::Notice),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            other => Err(format!("unknown syslog level: {other}")),
        }
    }
}

/// `facility.level` pair given to `--syslog`, e.g. `user.info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyslogTarget {
    pub facility: Facility,
    pub severity: Severity,
}

impl SyslogTarget {
    /// Combined priority value passed to `syslog(3)`.
    pub fn priority(self) -> libc::c_int {
        self.facility.code() | self.severity.code()
    }
}

impl FromStr for SyslogTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (facility, severity) = s
            .split_once('.')
            .ok_or_else(|| format!("expected FACILITY.LEVEL, got: {s}"))?;
        Ok(SyslogTarget {
            facility: facility.parse()?,
            severity: severity.parse()?,
        })
    }
}

impl fmt::Display for SyslogTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let facility = format!("{:?}", self.facility).to_lowercase();
        let severity = format!("{:?}", self.severity).to_lowercase();
        write!(f, "{facility}.{severity}")
    }
}

/// Where captured child stderr goes.
///
/// - `Stderr`: our own stderr, each line prefixed with the entry label.
/// - `Syslog`: the system log, using the entry label as the ident.
///
/// When no relay is configured the child simply inherits our stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayTarget {
    Stderr,
    Syslog(SyslogTarget),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_facility_and_level() {
        let target: SyslogTarget = "user.info".parse().unwrap();
        assert_eq!(target.facility, Facility::User);
        assert_eq!(target.severity, Severity::Info);
        assert_eq!(target.priority(), libc::LOG_USER | libc::LOG_INFO);

        let target: SyslogTarget = "LOCAL3.Warn".parse().unwrap();
        assert_eq!(target.facility, Facility::Local3);
        assert_eq!(target.severity, Severity::Warning);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "nosuch.info".parse::<SyslogTarget>().unwrap_err();
        assert!(err.contains("facility"), "{err}");

        let err = "daemon.loud".parse::<SyslogTarget>().unwrap_err();
        assert!(err.contains("level"), "{err}");

        assert!("daemon".parse::<SyslogTarget>().is_err());
    }
}
