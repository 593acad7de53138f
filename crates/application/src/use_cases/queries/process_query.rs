use crate::ports::{NameResolver, QueryLogRepository};
use ferrous_lookup_domain::{
    tokenize, AddressFamily, DnsQuery, DomainError, ForwardLookup, LogRecord, QueryKind,
    QueryOutcome, ReverseLookup, SpecialRange, SpecialRangeTable,
};
use std::io::Write;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const SPECIAL_ADDRESS_WARNING: &str = "Warning: special IP address - may not have DNS record";
pub const NOT_FOUND_LINE: &str = "Result: Not found information.";
pub const BLOCK_FOOTER: &str = "--------------------------";

/// Everything a single processed query produced.
#[derive(Debug, Clone)]
pub struct QueryReport {
    pub query: DnsQuery,
    pub special_range: Option<SpecialRange>,
    pub outcome: QueryOutcome,
    pub elapsed: Duration,
}

impl QueryReport {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Classifies, resolves, prints and logs one query at a time.
pub struct ProcessQueryUseCase {
    resolver: Arc<dyn NameResolver>,
    query_log: Arc<dyn QueryLogRepository>,
    special_ranges: &'static SpecialRangeTable,
}

impl ProcessQueryUseCase {
    pub fn new(
        resolver: Arc<dyn NameResolver>,
        query_log: Arc<dyn QueryLogRepository>,
        special_ranges: &'static SpecialRangeTable,
    ) -> Self {
        Self {
            resolver,
            query_log,
            special_ranges,
        }
    }

    /// Processes every token of `line` in order.
    ///
    /// A failed lookup never stops the line; only a failure to write to `out` does.
    pub fn process_line(
        &self,
        line: &str,
        out: &mut dyn Write,
    ) -> Result<Vec<QueryReport>, DomainError> {
        tokenize(line)
            .map(|token| self.execute(token, out))
            .collect()
    }

    pub fn execute(&self, token: &str, out: &mut dyn Write) -> Result<QueryReport, DomainError> {
        let query = DnsQuery::new(token);
        writeln!(out, "\n--- Query: {} ---", query.text)?;

        let (special_range, outcome, elapsed) = match &query.kind {
            QueryKind::Ipv4(v4) => self.resolve_address(IpAddr::V4(*v4), out)?,
            QueryKind::Ipv6(v6) => self.resolve_address(IpAddr::V6(*v6), out)?,
            QueryKind::Hostname(name) => {
                let (outcome, elapsed) = self.resolve_hostname(name, out)?;
                (None, outcome, elapsed)
            }
        };

        self.record(&query, &outcome);

        let report = QueryReport {
            query,
            special_range,
            outcome,
            elapsed,
        };
        writeln!(out, "Query time: {:.4} ms", report.elapsed_ms())?;
        writeln!(out, "{}", BLOCK_FOOTER)?;

        Ok(report)
    }

    fn resolve_address(
        &self,
        ip: IpAddr,
        out: &mut dyn Write,
    ) -> Result<(Option<SpecialRange>, QueryOutcome, Duration), DomainError> {
        let special_range = self.special_ranges.find(ip).copied();
        if let Some(range) = &special_range {
            debug!(ip = %ip, network = %range.network, label = range.label, "Special address");
            writeln!(out, "{}", SPECIAL_ADDRESS_WARNING)?;
            out.flush()?;
        }

        let start = Instant::now();
        let result = self.resolver.lookup_addr(ip);
        let elapsed = start.elapsed();

        let outcome = match result {
            Ok(reverse) => {
                render_reverse(&reverse, out)?;
                QueryOutcome::Reverse(reverse)
            }
            Err(e) => {
                debug!(ip = %ip, error = %e, "Reverse lookup failed");
                writeln!(out, "{}", NOT_FOUND_LINE)?;
                QueryOutcome::NotFound
            }
        };

        Ok((special_range, outcome, elapsed))
    }

    fn resolve_hostname(
        &self,
        hostname: &str,
        out: &mut dyn Write,
    ) -> Result<(QueryOutcome, Duration), DomainError> {
        let start = Instant::now();
        let result = self.resolver.lookup_host(hostname, AddressFamily::Any);
        let elapsed = start.elapsed();

        let outcome = match result {
            Ok(forward) => {
                render_forward(&forward, out)?;
                QueryOutcome::Forward(forward)
            }
            Err(e) => {
                debug!(hostname, error = %e, "Forward lookup failed");
                writeln!(out, "{}", NOT_FOUND_LINE)?;
                QueryOutcome::NotFound
            }
        };

        Ok((outcome, elapsed))
    }

    fn record(&self, query: &DnsQuery, outcome: &QueryOutcome) {
        let record = LogRecord::now(Arc::clone(&query.text), outcome.summary());
        if let Err(e) = self.query_log.append(&record) {
            warn!(
                error = %e,
                query = %query.text,
                "Failed to append query log record (non-critical)"
            );
        }
    }
}

fn render_reverse(reverse: &ReverseLookup, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Official name: {}", reverse.name)
}

fn render_forward(forward: &ForwardLookup, out: &mut dyn Write) -> std::io::Result<()> {
    if let Some(cname) = &forward.canonical_name {
        writeln!(out, "Canonical name (CNAME): {}", cname)?;
    }
    writeln!(out, "Official IP: {}", forward.official())?;
    if !forward.aliases().is_empty() {
        writeln!(out, "Alias IP:")?;
        for alias in forward.aliases() {
            writeln!(out, "  {}", alias)?;
        }
    }
    Ok(())
}
