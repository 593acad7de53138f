use ferrous_lookup_domain::{AddressFamily, DomainError, ForwardLookup, ReverseLookup};
use std::net::IpAddr;

/// Blocking access to the system name-resolution service.
///
/// Both calls block until the resolver answers or gives up. A lookup that
/// finds nothing returns `DomainError::NotFound`.
pub trait NameResolver: Send + Sync {
    /// Forward lookup with the canonical-name flag set.
    fn lookup_host(
        &self,
        hostname: &str,
        family: AddressFamily,
    ) -> Result<ForwardLookup, DomainError>;

    /// Reverse lookup of a single address.
    fn lookup_addr(&self, ip: IpAddr) -> Result<ReverseLookup, DomainError>;
}
