use checksmith_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_template_list_shows_registry_contents() {
    let world = TestWorld::new();

    world
        .command()
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template registry version: 1"))
        .stdout(predicate::str::contains("ID: bash-default"))
        .stdout(predicate::str::contains("ID: powershell-default"))
        .stdout(predicate::str::contains("Categories  : (all)"));
}

#[test]
fn test_template_list_is_stable_across_runs() {
    let world = TestWorld::new();

    let first = world
        .command()
        .args(["template", "list"])
        .output()
        .unwrap();
    let second = world
        .command()
        .args(["template", "list"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_template_validate_accepts_fixture_registry() {
    let world = TestWorld::new();

    world
        .command()
        .args(["template", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template bash-default: OK"))
        .stdout(predicate::str::contains("All templates validated successfully."))
        .stdout(predicate::str::contains("\u{1b}").not());
}

#[test]
fn test_template_validate_reports_missing_file() {
    let world = TestWorld::new();
    let broken_registry = world.root().join("broken-registry.json");
    std::fs::write(
        &broken_registry,
        r#"{"version": 1, "templates": [{
            "id": "ghost", "label": "Ghost", "interpreter": "bash",
            "extension": "sh", "path": "ghost.sh.tmpl", "categories": [],
            "placeholders": ["TITLE", "GIVEN", "WHEN", "THEN", "CHECK_ID", "COMMAND_HINT"]}]}"#,
    )
    .unwrap();

    world
        .command()
        .env("CHECKSMITH_REGISTRY", &broken_registry)
        .args(["template", "validate"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Template ghost issues:"))
        .stdout(predicate::str::contains("template file missing"));
}

#[test]
fn test_template_commands_fail_without_registry() {
    let world = TestWorld::new();

    world
        .command()
        .env("CHECKSMITH_REGISTRY", world.root().join("absent.json"))
        .args(["template", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("registry"));
}
