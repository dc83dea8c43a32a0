// crates/annotate_sources/tests/integration_cli.rs

mod end_to_end_tests {
    use assert_cmd::Command;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    const LINE: &str = "// Updated: 2025-12-27\n";

    /// The binary walks ./src relative to its working directory.
    #[test]
    fn test_annotates_src_tree() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("src/a.js").write_str("let x=1;").unwrap();
        temp.child("src/components/b.jsx").write_str("const y=2;").unwrap();
        temp.child("src/c.txt").write_str("ignore me").unwrap();
        temp.child("outside.js").write_str("untouched();").unwrap();

        Command::cargo_bin("annotate_sources")
            .unwrap()
            .current_dir(temp.path())
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stdout("Found 2 files to update\nUpdated: a.js\nUpdated: b.jsx\nDone!\n");

        temp.child("src/a.js").assert(format!("{}let x=1;", LINE));
        temp.child("src/components/b.jsx").assert(format!("{}const y=2;", LINE));
        temp.child("src/c.txt").assert("ignore me");
        temp.child("outside.js").assert("untouched();");

        temp.close().unwrap();
    }

    /// Running twice leaves the tree as the first run left it.
    #[test]
    fn test_second_run_reports_no_updates() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("src/index.js").write_str("main();\n").unwrap();

        Command::cargo_bin("annotate_sources")
            .unwrap()
            .current_dir(temp.path())
            .assert()
            .success();

        Command::cargo_bin("annotate_sources")
            .unwrap()
            .current_dir(temp.path())
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stdout(predicate::str::contains("Found 1 files to update"))
            .stdout(predicate::str::contains("Updated:").not());

        temp.child("src/index.js").assert(format!("{}main();\n", LINE));
        temp.close().unwrap();
    }

    /// Per-file failures still exit successfully and are reported once, on
    /// stdout only.
    #[test]
    fn test_exit_success_with_bad_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("src/bad.js").write_binary(b"\xff\xff").unwrap();
        temp.child("src/good.js").write_str("ok();").unwrap();

        Command::cargo_bin("annotate_sources")
            .unwrap()
            .current_dir(temp.path())
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stdout(predicate::str::contains("bad.js: could not read file:"))
            .stdout(predicate::str::contains("Updated: good.js"))
            .stdout(predicate::str::ends_with("Done!\n"))
            .stderr("");

        assert_eq!(std::fs::read(temp.child("src/bad.js").path()).unwrap(), b"\xff\xff");
        temp.close().unwrap();
    }

    /// Without a src directory the run is empty but still succeeds.
    #[test]
    fn test_missing_src_directory() {
        let temp = assert_fs::TempDir::new().unwrap();

        Command::cargo_bin("annotate_sources")
            .unwrap()
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout("Found 0 files to update\nDone!\n");

        temp.close().unwrap();
    }
}
