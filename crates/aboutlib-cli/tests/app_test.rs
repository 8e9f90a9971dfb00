use aboutlib_testing::TestWorld;

#[test]
fn test_app_press_then_quit() {
    let world = TestWorld::new();

    let result = world.run_with_stdin(&["app"], "\nq\n").unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    insta::assert_snapshot!(result.stdout(), @r"
    aboutlib - kotlin
    [ Show description ]  Enter: press, q: quit
    About library:
    Kotlin library. Version 0.0.1
    ");
}

#[test]
fn test_app_with_android_library() {
    let world = TestWorld::new().with_config("[host]\npackage_name = \"com.morfly.bazel\"\n");

    let result = world
        .run_with_stdin(&["app", "--library", "android"], "press\n")
        .unwrap();

    assert!(result.success());
    assert!(
        result
            .stdout()
            .contains("About library:\ncom.morfly.bazel: Android library. Version 0.1.0\n")
    );
}

#[test]
fn test_app_stops_at_eof() {
    let world = TestWorld::new();

    let result = world.run_with_stdin(&["app"], "").unwrap();

    assert!(result.success());
    assert!(!result.stdout().contains("About library:"));
}
