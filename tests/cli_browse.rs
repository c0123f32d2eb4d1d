//! Integration tests for `picktest tree`, `picktest items` and
//! `picktest snapshot`

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

const COLLECTED: &str = "\
# collected with pytest --collect-only -q
pkg/mod_a.py::test_x[1]
pkg/mod_a.py::test_x[2]
pkg/mod_b.py::TestBoth::test_m[a-dog]
pkg/mod_b.py::TestBoth::test_m[b-dog]
pkg/mod_b.py::TestBoth::test_m[a-cat]
pkg/mod_b.py::test_y
";

fn setup() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("collected.txt"), COLLECTED).unwrap();
    fs::create_dir_all(dir.path().join("home")).unwrap();
    dir
}

fn picktest(dir: &TempDir) -> Command {
    let home = dir.path().join("home");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_picktest"));
    cmd.current_dir(dir.path())
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("PICKTEST_SOURCE", dir.path().join("collected.txt"))
        .env("PICKTEST_SNAPSHOTS", dir.path().join("snapshots.toml"))
        .env("NO_COLOR", "1")
        .env("TERM", "dumb")
        .env_remove("RUST_LOG");
    cmd
}

fn run(dir: &TempDir, args: &[&str]) -> String {
    let output: Output = picktest(dir).args(args).output().unwrap();
    assert!(
        output.status.success(),
        "picktest {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn tree_output_snapshot() {
    let dir = setup();
    let out = run(&dir, &["tree"]);

    insta::assert_snapshot!(out.trim_end(), @r"
    . (6 tests)
    `-- pkg (package, 6)
        |-- mod_a (module, 2)
        |   `-- test_x (params, 2)
        |       |-- _1
        |       `-- _2
        `-- mod_b (module, 4)
            |-- TestBoth (class, 3)
            |   `-- test_m (params, 3)
            |       |-- a_cat
            |       |-- a_dog
            |       `-- b_dog
            `-- test_y
    ");
}

#[test]
fn tree_below_filtered_expression() {
    let dir = setup();
    let out = run(&dir, &["tree", "pkg.mod_b@a", "--depth", "2"]);

    assert_eq!(
        out,
        "pkg.mod_b@a (2 tests)\n`-- TestBoth (class, 2)\n    `-- test_m (params, 2)\n"
    );
}

#[test]
fn tree_json_lists_nodes() {
    let dir = setup();
    let out = run(&dir, &["tree", "pkg.mod_a", "--json"]);
    let events: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(events[0]["event"], "tree");
    assert_eq!(events[0]["count"], 2);
    assert_eq!(events[1]["path"], "pkg.mod_a.test_x");
    assert_eq!(events[1]["kind"], "params");
    assert_eq!(events[2]["name"], "_1");
    assert_eq!(events[2]["depth"], 2);
}

#[test]
fn items_lists_effective_tests() {
    let dir = setup();
    let out = run(&dir, &["items", "pkg.mod_b.TestBoth.test_m@a"]);

    assert_eq!(
        out,
        "0  pkg/mod_b.py::TestBoth::test_m[a-dog]  @a@dog\n\
         1  pkg/mod_b.py::TestBoth::test_m[a-cat]  @a@cat\n"
    );
}

#[test]
fn items_lists_params() {
    let dir = setup();
    let out = run(&dir, &["items", "--params", "pkg.mod_b"]);

    assert_eq!(out, "@a\n@b\n@cat\n@dog\n");
}

#[test]
fn items_reversed_slice() {
    let dir = setup();
    let out = run(&dir, &["items", "pkg.mod_a.test_x[::-1]"]);

    assert_eq!(
        out,
        "0  pkg/mod_a.py::test_x[2]  @_2\n1  pkg/mod_a.py::test_x[1]  @_1\n"
    );
}

#[test]
fn snapshot_list_show_delete() {
    let dir = setup();
    assert_eq!(
        run(&dir, &["snapshot", "list"]),
        "No saved selections.\nRun `picktest select <EXPR>... --save <NAME>` to save one.\n"
    );

    run(&dir, &["select", "pkg.mod_a", "--save", "params"]);

    let listed = run(&dir, &["snapshot", "list"]);
    assert!(listed.starts_with("params    2 tests  "), "{}", listed);

    assert_eq!(
        run(&dir, &["snapshot", "show", "params"]),
        "pkg/mod_a.py::test_x[1]\npkg/mod_a.py::test_x[2]\n"
    );

    run(&dir, &["snapshot", "delete", "params"]);
    let output = picktest(&dir)
        .args(["snapshot", "delete", "params"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no saved selection named 'params'"));
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let dir = setup();
    fs::write(dir.path().join(".picktest.toml"), "[run]\ncomand = \"pytest\"\n").unwrap();

    let output = picktest(&dir).args(["items"]).output().unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown config key 'comand'"), "{}", stderr);
    assert!(stderr.contains("Did you mean 'command'?"), "{}", stderr);
}
