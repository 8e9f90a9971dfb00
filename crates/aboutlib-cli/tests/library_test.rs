use aboutlib_testing::TestWorld;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_library_list_plain() {
    let world = TestWorld::new();

    let result = world.run(&["library", "list"]).unwrap();

    assert!(result.success());
    let lines: Vec<&str> = result.stdout().lines().collect();
    assert!(lines[0].starts_with("LIBRARY"));
    assert!(lines[2].starts_with("kotlin     0.0.1"));
    assert!(lines[3].starts_with("android    0.1.0"));
}

#[test]
fn test_library_list_json() {
    let world = TestWorld::new().json();

    let result = world.run(&["library", "list"]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["kotlin", "android"]);
}

#[test]
fn test_library_about_prints_raw_text() {
    let world = TestWorld::new();

    let result = world.run(&["library", "about", "Kotlin"]).unwrap();

    assert!(result.success());
    assert_eq!(result.stdout(), "Kotlin library. Version 0.0.1\n");
}

#[allow(deprecated)]
#[test]
fn test_library_about_requires_name() {
    Command::cargo_bin("aboutlib")
        .unwrap()
        .args(["library", "about"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<NAME>"));
}
