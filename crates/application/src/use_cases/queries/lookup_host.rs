use crate::ports::NameResolver;
use ferrous_lookup_domain::{AddressFamily, DomainError, ForwardLookup, ReverseLookup};
use std::io::Write;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::debug;

/// Result of a single command-line lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostReport {
    Forward(ForwardLookup),
    Reverse(ReverseLookup),
}

impl HostReport {
    pub fn render(&self, out: &mut dyn Write) -> std::io::Result<()> {
        match self {
            HostReport::Forward(forward) => {
                writeln!(out, "Official IP: {}", forward.official())?;
                writeln!(out, "Alias IP: ")?;
                for alias in forward.aliases() {
                    writeln!(out, "{}", alias)?;
                }
            }
            HostReport::Reverse(reverse) => {
                // getnameinfo yields a single name
                writeln!(out, "Official name: {}", reverse.name)?;
                writeln!(out, "Alias name: (none)")?;
            }
        }
        Ok(())
    }
}

/// One-shot lookup: a name starting with a letter is resolved forward,
/// anything else must be an address literal and is resolved in reverse.
pub struct LookupHostUseCase {
    resolver: Arc<dyn NameResolver>,
}

impl LookupHostUseCase {
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self { resolver }
    }

    pub fn execute(
        &self,
        argument: Option<&str>,
        family: AddressFamily,
    ) -> Result<HostReport, DomainError> {
        let argument = argument.ok_or(DomainError::MissingQuery)?;

        if argument.starts_with(|c: char| c.is_ascii_alphabetic()) {
            debug!(hostname = argument, %family, "Forward lookup");
            let forward = self.resolver.lookup_host(argument, family)?;
            return Ok(HostReport::Forward(forward));
        }

        let ip = parse_address(argument, family)?;
        debug!(ip = %ip, "Reverse lookup");
        let reverse = self.resolver.lookup_addr(ip)?;
        Ok(HostReport::Reverse(reverse))
    }
}

fn parse_address(literal: &str, family: AddressFamily) -> Result<IpAddr, DomainError> {
    let parsed = match family {
        AddressFamily::Ipv4 => literal.parse::<Ipv4Addr>().map(IpAddr::V4).ok(),
        AddressFamily::Ipv6 | AddressFamily::Any => literal.parse::<IpAddr>().ok(),
    };
    parsed
        .filter(|ip| family.accepts(ip))
        .ok_or_else(|| DomainError::InvalidIpAddress(literal.to_string()))
}
