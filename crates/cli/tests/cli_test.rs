use std::io::{Read, Write};
use std::net::{Ipv4Addr, TcpListener, TcpStream};
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

fn lookup() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ferrous-lookup"))
}

fn host() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ferrous-host"))
}

fn hello() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ferrous-hello"))
}

fn run_with_stdin(mut command: Command, stdin: &str) -> Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

// ============================================================================
// ferrous-lookup
// ============================================================================

#[test]
fn test_interactive_empty_line_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("resolver.log");

    let mut command = lookup();
    command.arg("--log-file").arg(&log);
    let output = run_with_stdin(command, "\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Interactive resolution mode."));
    assert!(stdout.contains("Exited."));
    assert!(!log.exists());
}

#[test]
fn test_batch_missing_file_fails_without_queries() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("resolver.log");

    let output = lookup()
        .arg("--log-file")
        .arg(&log)
        .arg(dir.path().join("missing.txt"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot open input file"));
    assert!(output.stdout.is_empty());
    assert!(!log.exists());
}

#[test]
fn test_two_positional_arguments_is_usage_error() {
    let output = lookup().args(["a.txt", "b.txt"]).output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_batch_logs_one_line_per_query() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("resolver.log");
    let input = dir.path().join("queries.txt");
    std::fs::write(&input, "localhost\n\nno-such-host.invalid\n").unwrap();

    let output = lookup()
        .arg("--log-file")
        .arg(&log)
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--- Query: localhost ---"));
    assert!(stdout.contains("--- Query: no-such-host.invalid ---"));
    assert!(stdout.contains("Result: Not found information."));

    let content = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("QUERY: \"localhost\" -> RESULT: \""));
    assert!(lines[1].ends_with("QUERY: \"no-such-host.invalid\" -> RESULT: \"Not found information.\""));
}

/// `[YYYY-MM-DD HH:MM:SS] ` with digits in every numeric slot.
fn has_timestamp_prefix(line: &str) -> bool {
    let bytes = line.as_bytes();
    if bytes.len() < 22 {
        return false;
    }
    let shape = b"[dddd-dd-dd dd:dd:dd] ";
    shape.iter().zip(bytes).all(|(&want, &got)| match want {
        b'd' => got.is_ascii_digit(),
        _ => got == want,
    })
}

#[test]
fn test_log_lines_start_with_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("resolver.log");
    let input = dir.path().join("queries.txt");
    std::fs::write(&input, "localhost no-such-host.invalid\n").unwrap();

    let output = lookup()
        .arg("--log-file")
        .arg(&log)
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());

    let content = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        assert!(has_timestamp_prefix(line), "bad timestamp: {line}");
        assert_eq!(&line[22..30], "QUERY: \"");
    }
}

#[test]
fn test_timestamp_shape_helper() {
    assert!(has_timestamp_prefix("[2026-10-18 09:05:01] QUERY: \"a\""));
    assert!(!has_timestamp_prefix("[2026-10-18T09:05:01] QUERY"));
    assert!(!has_timestamp_prefix("[26-10-18 09:05:01] QUERY: \"a\""));
    assert!(!has_timestamp_prefix("QUERY: \"a\""));
}

#[test]
fn test_batch_loopback_warns_before_result() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("resolver.log");
    let input = dir.path().join("queries.txt");
    std::fs::write(&input, "127.0.0.1\n").unwrap();

    let output = lookup()
        .arg("--log-file")
        .arg(&log)
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let header = stdout.find("--- Query: 127.0.0.1 ---").unwrap();
    let warning = stdout
        .find("Warning: special IP address - may not have DNS record")
        .unwrap();
    let result = stdout
        .find("Official name: ")
        .or_else(|| stdout.find("Result: Not found information."))
        .unwrap();
    assert!(header < warning && warning < result);
    assert_eq!(stdout.matches("Warning: special IP address").count(), 1);

    let content = std::fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("QUERY: \"127.0.0.1\" -> RESULT: \""));
}

#[test]
fn test_usage_error_does_not_create_log() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("resolver.log");

    let output = lookup()
        .arg("--log-file")
        .arg(&log)
        .args(["a", "b"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!log.exists());
}

// ============================================================================
// ferrous-host
// ============================================================================

#[test]
fn test_host_without_argument() {
    let output = host().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "You forgot to add arguments!\n"
    );
}

#[test]
fn test_host_invalid_address() {
    let output = host().arg("300.0.0.1").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "Invalid address\n");
}

#[test]
fn test_host_localhost_forward() {
    let output = host().arg("localhost").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Official IP: 127."));
    assert!(stdout.contains("Alias IP: \n"));
}

// ============================================================================
// ferrous-hello
// ============================================================================

fn free_port() -> u16 {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    listener.local_addr().unwrap().port()
}

fn spawn_hello(port: u16) -> Child {
    hello()
        .args(["--bind", "127.0.0.1", "--port", &port.to_string()])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap()
}

fn connect_with_retry(port: u16) -> TcpStream {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        match TcpStream::connect((Ipv4Addr::LOCALHOST, port)) {
            Ok(stream) => return stream,
            Err(e) if Instant::now() >= deadline => panic!("server never came up: {e}"),
            Err(_) => thread::sleep(Duration::from_millis(50)),
        }
    }
}

#[test]
fn test_hello_serves_one_request_and_exits() {
    let port = free_port();
    let child = spawn_hello(port);

    let mut stream = connect_with_retry(port);
    stream.write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        response,
        "HTTP/1.1 200 OK\r\nContent-Length: 13\r\nContent-Type: text/plain\r\n\r\nHello, world!"
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    let listening = stdout.find(&format!("Listening on 127.0.0.1:{port}")).unwrap();
    let start = stdout.find("---- request start ----\nGET / HTTP/1.1\r\n").unwrap();
    let end = stdout.find("---- request end ----").unwrap();
    let handled = stdout.find("Connection handled, server exiting.").unwrap();
    assert!(listening < start && start < end && end < handled);
}

#[test]
fn test_hello_client_gone_after_request_still_exits_cleanly() {
    let port = free_port();
    let child = spawn_hello(port);

    let mut stream = connect_with_retry(port);
    stream.write_all(b"GET / HTTP/1.0\r\n\r\n").unwrap();
    drop(stream);

    // Whether or not the response reaches the closed client, the run ends normally.
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("---- request end ----"));
    assert!(stdout.ends_with("Connection handled, server exiting.\n"));
}

#[test]
fn test_hello_client_closing_without_request_fails() {
    let port = free_port();
    let child = spawn_hello(port);

    let stream = connect_with_retry(port);
    drop(stream);

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Connection handled"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("client closed connection before sending data"));
}
