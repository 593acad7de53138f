use crate::errors::DomainError;
use ipnetwork::IpNetwork;
use std::net::IpAddr;
use std::sync::LazyLock;

/// Networks reserved for local or internal use, which rarely have public PTR records.
const SPECIAL_RANGES: &[(&str, &str)] = &[
    ("127.0.0.0/8", "loopback"),
    ("10.0.0.0/8", "private"),
    ("172.16.0.0/12", "private"),
    ("192.168.0.0/16", "private"),
    ("::1/128", "loopback"),
    ("fc00::/7", "unique local"),
];

static DEFAULT_TABLE: LazyLock<Result<SpecialRangeTable, DomainError>> =
    LazyLock::new(|| SpecialRangeTable::new(SPECIAL_RANGES.iter().copied()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialRange {
    pub network: IpNetwork,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct SpecialRangeTable {
    ranges: Vec<SpecialRange>,
}

impl SpecialRangeTable {
    pub fn new<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'static str)>,
    ) -> Result<Self, DomainError> {
        let mut ranges = Vec::new();

        for (cidr, label) in entries {
            let network: IpNetwork = cidr
                .parse()
                .map_err(|e| DomainError::InvalidSpecialRange(format!("{}: {}", cidr, e)))?;
            ranges.push(SpecialRange { network, label });
        }

        Ok(Self { ranges })
    }

    /// The loopback and private table checked before every reverse lookup.
    pub fn standard() -> Result<&'static SpecialRangeTable, DomainError> {
        DEFAULT_TABLE.as_ref().map_err(Clone::clone)
    }

    pub fn find(&self, ip: IpAddr) -> Option<&SpecialRange> {
        self.ranges.iter().find(|range| range.network.contains(ip))
    }

    pub fn is_special(&self, ip: IpAddr) -> bool {
        self.find(ip).is_some()
    }
}
