use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CLEAN_DOC: &str = "\
---
title: \"A post\"
categories: [blog]
tags: [rust]
tools: []
summary: \"short\"
catchphrase: \"snappy\"
layout: post
draft: false
math: false
date: \"2024-06-01\"
---

## Setup
";

#[test]
fn check_reports_issues_and_exits_zero() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("content");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("clean.md"), CLEAN_DOC).unwrap();
    fs::write(root.join("bad.md"), "# Top\n\n```ruby\nputs 1\n```\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdt"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()); // no config -> defaults
    cmd.args(["check", root.to_str().unwrap()]);

    // Issues are advisory: the process still succeeds.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[H1 HEADER] # Top"))
        .stdout(predicate::str::contains("[INVALID LANG] ```ruby"))
        .stdout(predicate::str::contains("FRONTMATTER_MISSING"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("1 clean, 1 with issues (of 2 total)"));
}

#[test]
fn check_json_report() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("content");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("bad.md"), "# Top\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdt"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["check", root.to_str().unwrap(), "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"with_issues\": 1"))
        .stdout(predicate::str::contains("\"path\": \"bad.md\""))
        .stdout(predicate::str::contains("[H1 HEADER] # Top"));
}

#[test]
fn check_quiet_lists_only_offending_paths() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("content");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("clean.md"), CLEAN_DOC).unwrap();
    fs::write(root.join("bad.md"), "# Top\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdt"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["check", root.to_str().unwrap(), "--quiet"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bad.md"))
        .stdout(predicate::str::contains("clean.md").not());
}

#[test]
fn check_never_modifies_files() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("content");
    fs::create_dir_all(&root).unwrap();
    let messy = "# Top\n\n---\n\n##### **Code**\n";
    fs::write(root.join("messy.md"), messy).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdt"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["check", root.to_str().unwrap()]);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(root.join("messy.md")).unwrap(), messy);
}

#[test]
fn check_without_root_or_profile_is_a_usage_error() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdt"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("check");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no corpus root"));
}
