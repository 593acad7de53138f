use std::net::IpAddr;

/// Result text recorded for any failed lookup.
pub const NOT_FOUND: &str = "Not found information.";

/// Successful hostname -> addresses lookup.
///
/// `addresses` keeps the order returned by the resolver and is never empty:
/// the first entry is the official address, the rest are aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardLookup {
    pub canonical_name: Option<String>,
    pub addresses: Vec<IpAddr>,
}

impl ForwardLookup {
    pub fn new(canonical_name: Option<String>, addresses: Vec<IpAddr>) -> Option<Self> {
        if addresses.is_empty() {
            return None;
        }
        Some(Self {
            canonical_name,
            addresses,
        })
    }

    pub fn official(&self) -> IpAddr {
        self.addresses[0]
    }

    pub fn aliases(&self) -> &[IpAddr] {
        &self.addresses[1..]
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();
        if let Some(cname) = &self.canonical_name {
            summary.push_str(&format!("CNAME: {} | ", cname));
        }
        summary.push_str(&format!("Official IP: {}", self.official()));
        for alias in self.aliases() {
            summary.push_str(&format!(", {}", alias));
        }
        summary
    }
}

/// Successful address -> name lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseLookup {
    pub name: String,
}

impl ReverseLookup {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn summary(&self) -> String {
        format!("Official name: {}", self.name)
    }
}

/// What a single query produced. Never cached, dropped once logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Reverse(ReverseLookup),
    Forward(ForwardLookup),
    NotFound,
}

impl QueryOutcome {
    pub fn is_found(&self) -> bool {
        !matches!(self, QueryOutcome::NotFound)
    }

    /// Free-text result written to the query log.
    pub fn summary(&self) -> String {
        match self {
            QueryOutcome::Reverse(reverse) => reverse.summary(),
            QueryOutcome::Forward(forward) => forward.summary(),
            QueryOutcome::NotFound => NOT_FOUND.to_string(),
        }
    }
}
