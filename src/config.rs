use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Application-level constants
pub const APP_NAME: &str = "Concorda";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Account seeded into a fresh credit ledger so the service is usable
/// right after startup
pub const DEMO_USER: &str = "demo-user";
pub const DEMO_STARTING_CREDITS: i64 = 10;

/// Default tracing filter when RUST_LOG is not set
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Default listen address for the HTTP API
pub fn default_bind_addr() -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8000)
}
