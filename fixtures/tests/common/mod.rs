#![allow(dead_code)]

use strategy_fixtures::{NetworkProfile, TestEnvironment};

pub const MAINNET: &str = include_str!("../../profiles/mainnet.toml");

/// The mainnet profile with `from` replaced by `to` in its TOML source.
pub fn patched_profile(from: &str, to: &str) -> NetworkProfile {
    assert!(MAINNET.contains(from), "profile has no `{from}`");
    NetworkProfile::from_toml_str(&MAINNET.replace(from, to)).unwrap()
}

pub async fn start() -> TestEnvironment {
    TestEnvironment::start(NetworkProfile::mainnet().unwrap())
        .await
        .expect("environment should start")
}

pub async fn start_with(profile: NetworkProfile) -> TestEnvironment {
    TestEnvironment::start(profile)
        .await
        .expect("environment should start")
}
