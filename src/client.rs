use std::time::Duration;

use once_cell::sync::Lazy;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub static BLOCKING_CLIENT: Lazy<reqwest::blocking::Client> = Lazy::new(|| {
    build_blocking_client(REQUEST_TIMEOUT).expect("failed to build blocking reqwest client")
});

pub fn build_blocking_client(timeout: Duration) -> reqwest::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("router-locations/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()
}
