// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use wpc_core::FakePageHandler;

#[yare::parameterized(
    guid_suffix_stripped = {
        "unix:path=/run/user/1000/bus,guid=1234deadbeef",
        "unix:path=/run/user/1000/bus",
    },
    multiple_segments = {
        "unix:abstract=/tmp/dbus-x,guid=aa,extra=bb",
        "unix:abstract=/tmp/dbus-x",
    },
    bare_address_unchanged = { "unix:path=/tmp/bus", "unix:path=/tmp/bus" },
    empty = { "", "" },
)]
fn first_segment_strips_everything_after_the_first_comma(raw: &str, expected: &str) {
    assert_eq!(first_segment(raw), expected);
}

#[test]
fn jar_artifacts_run_through_java() {
    let cmd = automation_server_command(Path::new("/opt/selenium-server.jar"));
    let std_cmd = cmd.as_std();

    assert_eq!(std_cmd.get_program(), "java");
    let args: Vec<_> = std_cmd.get_args().collect();
    assert_eq!(args, ["-jar", "/opt/selenium-server.jar"]);
}

#[test]
fn other_artifacts_are_executed_directly() {
    let cmd = automation_server_command(Path::new("/usr/bin/geckodriver"));
    let std_cmd = cmd.as_std();

    assert_eq!(std_cmd.get_program(), "/usr/bin/geckodriver");
    assert_eq!(std_cmd.get_args().count(), 0);
}

#[test]
#[serial]
fn notifyd_command_passes_the_raw_address() {
    std::env::remove_var("WPC_NOTIFYD_BINARY");
    let mut config = CrawlerConfig::new("/opt/selenium.jar", "/tmp/profile");
    config.notifyd_binary = Some(PathBuf::from("/opt/wpc-notifyd"));

    let cmd = notifyd_command(&config, "unix:path=/tmp/bus,guid=ff");
    let std_cmd = cmd.as_std();

    assert_eq!(std_cmd.get_program(), "/opt/wpc-notifyd");
    let args: Vec<_> = std_cmd.get_args().collect();
    assert_eq!(args, ["--bus-address", "unix:path=/tmp/bus,guid=ff"]);
}

#[test]
#[serial]
fn notifyd_binary_env_override_wins_over_discovery() {
    std::env::set_var("WPC_NOTIFYD_BINARY", "/custom/notifyd");
    let config = CrawlerConfig::new("/opt/selenium.jar", "/tmp/profile");

    let cmd = notifyd_command(&config, "unix:path=/tmp/bus");
    assert_eq!(cmd.as_std().get_program(), "/custom/notifyd");
    std::env::remove_var("WPC_NOTIFYD_BINARY");
}

#[test]
fn config_defaults_to_headless_and_the_local_endpoint() {
    let config = CrawlerConfig::new("/opt/selenium.jar", "/tmp/profile");
    assert!(config.headless);
    assert_eq!(config.webdriver_url, DEFAULT_WEBDRIVER_URL);
    assert!(config.notifyd_binary.is_none());
}

#[tokio::test]
#[serial]
async fn start_without_a_bus_address_fails_fast() {
    std::env::remove_var("DBUS_SESSION_BUS_ADDRESS");
    let config = CrawlerConfig::new("/opt/selenium.jar", "/tmp/profile");

    let err = Crawler::start(config, FakePageHandler::new())
        .await
        .expect_err("startup must fail without a bus");

    assert!(matches!(err, SetupError::BusAddressMissing));
    assert!(err.to_string().contains("DBUS_SESSION_BUS_ADDRESS"));
}

#[tokio::test]
#[serial]
async fn start_with_an_unspawnable_notifyd_surfaces_the_spawn_error() {
    std::env::set_var("DBUS_SESSION_BUS_ADDRESS", "unix:path=/tmp/nonexistent-bus");
    let profile = tempfile::tempdir().unwrap();
    let mut config = CrawlerConfig::new("/opt/selenium.jar", profile.path());
    config.notifyd_binary = Some(PathBuf::from("/nonexistent/wpc-notifyd"));

    let err = Crawler::start(config, FakePageHandler::new())
        .await
        .expect_err("startup must fail when notifyd cannot spawn");

    assert!(matches!(err, SetupError::Supervisor(_)));
    assert!(err.to_string().contains("notification-service"));
    std::env::remove_var("DBUS_SESSION_BUS_ADDRESS");
}

#[tokio::test]
#[serial]
async fn start_with_a_missing_profile_fails_before_spawning_anything() {
    std::env::set_var("DBUS_SESSION_BUS_ADDRESS", "unix:path=/tmp/nonexistent-bus");
    let config = CrawlerConfig::new("/opt/selenium.jar", "/definitely/not/a/profile");

    let err = Crawler::start(config, FakePageHandler::new())
        .await
        .expect_err("startup must fail without a profile");

    assert!(matches!(err, SetupError::ProfileNotFound(_)));
    std::env::remove_var("DBUS_SESSION_BUS_ADDRESS");
}
