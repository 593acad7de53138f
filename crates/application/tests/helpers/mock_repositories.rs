#![allow(dead_code)]

use ferrous_lookup_application::ports::{NameResolver, QueryLogRepository};
use ferrous_lookup_domain::{
    AddressFamily, DomainError, ForwardLookup, LogRecord, ReverseLookup,
};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock NameResolver
// ============================================================================

#[derive(Clone, Default)]
pub struct MockNameResolver {
    hosts: Arc<Mutex<HashMap<String, ForwardLookup>>>,
    addrs: Arc<Mutex<HashMap<IpAddr, ReverseLookup>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(self, hostname: &str, cname: Option<&str>, addresses: &[&str]) -> Self {
        let addresses = addresses.iter().map(|a| a.parse().unwrap()).collect();
        let lookup = ForwardLookup::new(cname.map(str::to_string), addresses).unwrap();
        self.hosts
            .lock()
            .unwrap()
            .insert(hostname.to_string(), lookup);
        self
    }

    pub fn with_addr(self, ip: &str, name: &str) -> Self {
        self.addrs
            .lock()
            .unwrap()
            .insert(ip.parse().unwrap(), ReverseLookup::new(name));
        self
    }

    /// Every call in order, as `host:<name>:<family>` or `addr:<ip>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl NameResolver for MockNameResolver {
    fn lookup_host(
        &self,
        hostname: &str,
        family: AddressFamily,
    ) -> Result<ForwardLookup, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("host:{hostname}:{family}"));

        let hosts = self.hosts.lock().unwrap();
        let lookup = hosts
            .get(hostname)
            .ok_or_else(|| DomainError::NotFound(hostname.to_string()))?;
        let addresses = lookup
            .addresses
            .iter()
            .copied()
            .filter(|ip| family.accepts(ip))
            .collect();
        ForwardLookup::new(lookup.canonical_name.clone(), addresses)
            .ok_or_else(|| DomainError::NotFound(hostname.to_string()))
    }

    fn lookup_addr(&self, ip: IpAddr) -> Result<ReverseLookup, DomainError> {
        self.calls.lock().unwrap().push(format!("addr:{ip}"));

        self.addrs
            .lock()
            .unwrap()
            .get(&ip)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(ip.to_string()))
    }
}

// ============================================================================
// Mock QueryLogRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryQueryLog {
    records: Arc<Mutex<Vec<LogRecord>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl InMemoryQueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let log = Self::default();
        *log.should_fail.lock().unwrap() = true;
        log
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl QueryLogRepository for InMemoryQueryLog {
    fn append(&self, record: &LogRecord) -> Result<(), DomainError> {
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::QueryLogError("disk full".to_string()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
