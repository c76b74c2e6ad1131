use crate::prelude::*;

#[test]
fn missing_required_arguments_is_a_usage_error() {
    let output = wpc_cmd().output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    let text = stderr(&output);
    assert!(text.contains("--server"), "got: {text}");
    assert!(text.contains("--profile"), "got: {text}");
}

#[test]
fn wpc_without_a_session_bus_fails_with_a_clear_error() {
    let output = wpc_cmd()
        .env_remove("DBUS_SESSION_BUS_ADDRESS")
        .args(["--server", "/tmp/selenium.jar", "--profile", "/tmp/prof"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let text = stderr(&output);
    assert!(text.contains("DBUS_SESSION_BUS_ADDRESS"), "got: {text}");
}

#[test]
fn notifyd_without_a_bus_address_fails_with_a_clear_error() {
    let output = notifyd_cmd()
        .env_remove("DBUS_SESSION_BUS_ADDRESS")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let text = stderr(&output);
    assert!(text.contains("bus address"), "got: {text}");
}
