//! End-to-end CLI integration tests.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn mathcalc(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mathcalc").expect("binary not found");
    cmd.env("MATHCALC_DB", db);
    cmd
}

fn temp_db() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("e2e.sqlite3");
    (dir, db)
}

#[test]
fn help_flag() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mathcalc"));
}

#[test]
fn pow_2_10() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["pow", "--base", "2", "--exp", "10"])
        .assert()
        .success()
        .stdout("1024\n");
}

#[test]
fn fib_10() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["fib", "10"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn fact_0() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["fact", "0"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn fact_20_is_exact() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["fact", "20"])
        .assert()
        .success()
        .stdout("2432902008176640000\n");
}

#[test]
fn verbose_table() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["fact", "5", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Details"))
        .stdout(predicate::str::contains("fact(5)=120"));
}

#[test]
fn negative_exponent_fails() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["pow", "--base", "2", "--exp", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn negative_index_fails() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["fib", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn history_shows_logged_computations() {
    let (_dir, db) = temp_db();
    mathcalc(&db).args(["fib", "10"]).assert().success();
    mathcalc(&db)
        .args(["pow", "--base", "2", "--exp", "10"])
        .assert()
        .success();

    mathcalc(&db)
        .args(["history", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fib"))
        .stdout(predicate::str::contains("55"))
        .stdout(predicate::str::contains("pow"))
        .stdout(predicate::str::contains("1024"));
}

#[test]
fn history_on_empty_database() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No computations found."));
}

#[test]
fn large_fibonacci() {
    let (_dir, db) = temp_db();
    mathcalc(&db)
        .args(["fib", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "43466557686937456435688527675040625802564",
        ));
}
