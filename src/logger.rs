use crate::config::Config;
use chrono::Local;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Crawler fixture started");
    println!("Listening on: http://{addr}");
    println!("Artificial page delay: {}ms", config.fixture.delay_ms);
    println!("Asset file: {}", config.fixture.asset_path.display());
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

/// One line per request path; the fixture's only telemetry.
pub fn log_request_path(path: &str) {
    println!(
        "[{}] [Request] {path}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z")
    );
}

pub fn log_response(status: u16, size: usize) {
    println!("[Response] {status} ({size} bytes)");
}

pub fn log_warning(msg: &str) {
    eprintln!("[Warning] {msg}");
}
