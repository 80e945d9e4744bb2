#![cfg(unix)]

use checksmith_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_list_groups_without_executing() {
    let world = TestWorld::new();
    // A check with a side effect proves list never runs anything
    let marker = world.root().join("executed.marker");
    world
        .add_check(
            "security-redis-auth.sh",
            &format!("#!/usr/bin/env bash\ntouch '{}'\n", marker.display()),
        )
        .unwrap();
    world
        .add_shell_check("nested/monitoring-grafana-alerts.sh", &["PASS|x|y"])
        .unwrap();

    world
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Discovered 2 checks"))
        .stdout(predicate::str::contains("security-redis-auth"))
        .stdout(predicate::str::contains("monitoring-grafana-alerts"))
        // Empty categories are reported, not omitted
        .stdout(predicate::str::contains("communication"))
        .stdout(predicate::str::contains("(no checks)"));

    assert!(!marker.exists(), "list must not execute checks");
}

#[test]
fn test_piped_list_output_has_no_ansi_escapes() {
    let world = TestWorld::new();
    world
        .add_shell_check("security-redis-auth.sh", &["PASS|redis_auth|ok"])
        .unwrap();

    world
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}").not());
}
