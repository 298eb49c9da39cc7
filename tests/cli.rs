mod common;

use std::fs;

use assert_cmd::Command;

use common::{oi_row, write_image, OI_HEADER};

#[test]
fn runs() {
    let mut cmd = Command::cargo_bin("openimages-pen").unwrap();
    cmd.assert().success();
}

#[test]
fn outputs_tool_name() {
    let mut cmd = Command::cargo_bin("openimages-pen").unwrap();
    cmd.arg("-V");
    cmd.assert().success().stdout("openimages-pen 0.1.0\n");
}

// Load subcommand tests

fn write_train_split(root: &std::path::Path) {
    write_image(&root.join("images/train"), "0001", 101, 101);
    fs::write(
        root.join("train-annotations-bbox.csv"),
        format!(
            "{OI_HEADER}{}{}",
            oi_row("0001", 0.0, 1.0, 0.0, 1.0, "0"),
            oi_row("0001", 0.1, 0.5, 0.1, 0.5, "0"),
        ),
    )
    .expect("write train csv");
}

#[test]
fn load_summarizes_split() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_train_split(temp.path());

    let mut cmd = Command::cargo_bin("openimages-pen").unwrap();
    cmd.args(["load", "pen_train", "--root"]).arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Records:    1"))
        .stdout(predicates::str::contains("Boxes:      2"));
}

#[test]
fn load_json_dumps_records() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_train_split(temp.path());

    let mut cmd = Command::cargo_bin("openimages-pen").unwrap();
    cmd.args(["load", "pen_train", "--json", "--root"])
        .arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"image_id\": \"0001\""))
        .stdout(predicates::str::contains("XYXY_ABS"));
}

#[test]
fn load_unknown_split_fails() {
    let temp = tempfile::tempdir().expect("tempdir");

    let mut cmd = Command::cargo_bin("openimages-pen").unwrap();
    cmd.args(["load", "pen_dev", "--root"]).arg(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("No dataset registered"));
}

#[test]
fn load_missing_csv_fails() {
    let temp = tempfile::tempdir().expect("tempdir");

    let mut cmd = Command::cargo_bin("openimages-pen").unwrap();
    cmd.args(["load", "pen_train", "--root"]).arg(temp.path());
    cmd.assert().failure();
}

// Splits subcommand tests

#[test]
fn splits_lists_predefined_table() {
    let mut cmd = Command::cargo_bin("openimages-pen").unwrap();
    cmd.args(["splits", "--root", "datasets"]);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("pen_train"))
        .stdout(predicates::str::contains("train-annotations-bbox.csv"))
        .stdout(predicates::str::contains("pen_test"));
}
