use dns_lookup::{getaddrinfo, getnameinfo, AddrInfoHints};
use ferrous_lookup_application::ports::NameResolver;
use ferrous_lookup_domain::{AddressFamily, DomainError, ForwardLookup, ReverseLookup};
use std::io;
use std::net::{IpAddr, SocketAddr};
use tracing::debug;

/// `NameResolver` backed by the C library (`getaddrinfo` / `getnameinfo`),
/// so `/etc/hosts`, NSS and the configured DNS servers all apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }

    fn hints(family: AddressFamily) -> AddrInfoHints {
        let address = match family {
            AddressFamily::Any => libc::AF_UNSPEC,
            AddressFamily::Ipv4 => libc::AF_INET,
            AddressFamily::Ipv6 => libc::AF_INET6,
        };
        AddrInfoHints {
            socktype: libc::SOCK_STREAM,
            protocol: 0,
            address,
            flags: libc::AI_CANONNAME,
        }
    }
}

impl NameResolver for SystemResolver {
    fn lookup_host(
        &self,
        hostname: &str,
        family: AddressFamily,
    ) -> Result<ForwardLookup, DomainError> {
        let entries = getaddrinfo(Some(hostname), None, Some(Self::hints(family))).map_err(|e| {
            let err = io::Error::from(e);
            debug!(hostname, error = %err, "getaddrinfo failed");
            DomainError::NotFound(format!("{}: {}", hostname, err))
        })?;

        let mut canonical_name = None;
        let mut addresses = Vec::new();
        for entry in entries {
            let info = entry.map_err(|e| DomainError::ResolverError(e.to_string()))?;
            if canonical_name.is_none() {
                canonical_name = info.canonname;
            }
            addresses.push(info.sockaddr.ip());
        }

        debug!(
            hostname,
            %family,
            count = addresses.len(),
            cname = canonical_name.as_deref().unwrap_or("-"),
            "getaddrinfo complete"
        );

        ForwardLookup::new(canonical_name, addresses)
            .ok_or_else(|| DomainError::NotFound(hostname.to_string()))
    }

    fn lookup_addr(&self, ip: IpAddr) -> Result<ReverseLookup, DomainError> {
        let socket = SocketAddr::new(ip, 0);
        let (host, _service) = getnameinfo(&socket, 0).map_err(|e| {
            let err = io::Error::from(e);
            debug!(ip = %ip, error = %err, "getnameinfo failed");
            DomainError::NotFound(format!("{}: {}", ip, err))
        })?;

        debug!(ip = %ip, hostname = %host, "getnameinfo complete");
        Ok(ReverseLookup::new(host))
    }
}
