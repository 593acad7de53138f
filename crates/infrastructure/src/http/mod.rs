pub mod hello_server;

pub use hello_server::{build_response, HelloServer, ServeError, ServedRequest};
