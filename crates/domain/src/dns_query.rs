use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::Arc;

/// How a query token is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Hostname(Arc<str>),
}

impl QueryKind {
    /// IPv4 first, then IPv6, anything else is a hostname.
    pub fn classify(token: &str) -> Self {
        if let Ok(v4) = token.parse::<Ipv4Addr>() {
            return QueryKind::Ipv4(v4);
        }
        if let Ok(v6) = token.parse::<Ipv6Addr>() {
            return QueryKind::Ipv6(v6);
        }
        QueryKind::Hostname(Arc::from(token))
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self {
            QueryKind::Ipv4(v4) => Some(IpAddr::V4(*v4)),
            QueryKind::Ipv6(v6) => Some(IpAddr::V6(*v6)),
            QueryKind::Hostname(_) => None,
        }
    }

    pub fn is_reverse(&self) -> bool {
        self.address().is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::Ipv4(_) => "ipv4",
            QueryKind::Ipv6(_) => "ipv6",
            QueryKind::Hostname(_) => "hostname",
        }
    }
}

/// A single input token together with its classification.
/// Uses `Arc<str>` so the text can be shared between the report and the log record.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub text: Arc<str>,
    pub kind: QueryKind,
}

impl DnsQuery {
    pub fn new(token: &str) -> Self {
        Self {
            text: Arc::from(token),
            kind: QueryKind::classify(token),
        }
    }
}

/// Splits an input line into query tokens.
///
/// Everything from the first line terminator on is dropped, tokens are
/// separated by spaces or tabs and empty tokens are skipped.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    let end = line.find(['\r', '\n']).unwrap_or(line.len());
    line[..end]
        .split([' ', '\t'])
        .filter(|token| !token.is_empty())
}

/// Address family requested from a forward lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressFamily {
    #[default]
    Any,
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::Any => "any",
            AddressFamily::Ipv4 => "ipv4",
            AddressFamily::Ipv6 => "ipv6",
        }
    }

    pub fn accepts(&self, ip: &IpAddr) -> bool {
        match self {
            AddressFamily::Any => true,
            AddressFamily::Ipv4 => ip.is_ipv4(),
            AddressFamily::Ipv6 => ip.is_ipv6(),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "any" | "unspec" => Ok(AddressFamily::Any),
            "ipv4" | "inet" | "4" => Ok(AddressFamily::Ipv4),
            "ipv6" | "inet6" | "6" => Ok(AddressFamily::Ipv6),
            other => Err(format!("unknown address family: {other}")),
        }
    }
}
