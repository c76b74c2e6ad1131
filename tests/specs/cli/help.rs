use crate::prelude::*;

#[test]
fn wpc_help_documents_the_session_bus_requirement() {
    let output = wpc_cmd().arg("--help").output().unwrap();

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("--server"), "got: {text}");
    assert!(text.contains("--profile"), "got: {text}");
    assert!(text.contains("--gui"), "got: {text}");
    assert!(text.contains("dbus-run-session"), "got: {text}");
}

#[test]
fn wpc_version_prints_the_package_version() {
    let output = wpc_cmd().arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("wpc"));
}

#[test]
fn notifyd_help_documents_the_bus_address_flag() {
    let output = notifyd_cmd().arg("--help").output().unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("--bus-address"));
}

#[test]
fn notifyd_rejects_unknown_arguments() {
    let output = notifyd_cmd().arg("--bogus").output().unwrap();

    assert!(!output.status.success());
    assert!(stderr(&output).contains("unexpected argument"));
}
