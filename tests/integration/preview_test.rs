//! CLI tests for the preview and codes commands

use predicates::prelude::*;

use crate::helpers::TestEnv;

#[test]
fn preview_without_colors_prints_plain_text() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preview", "§6Gold §lBold"])
        .assert()
        .success()
        .stdout("Gold Bold\n");
}

#[test]
fn preview_with_colors_uses_truecolor() {
    let env = TestEnv::new();
    env.cmd()
        .env_remove("NO_COLOR")
        .args(["preview", "§cHot"])
        .assert()
        .success()
        .stdout("\u{1b}[0;38;2;255;85;85mHot\u{1b}[0m\n");
}

#[test]
fn color_can_be_disabled_in_config() {
    let env = TestEnv::new();
    env.write_config("[formatting]\ncolor = false\n");
    env.cmd()
        .env_remove("NO_COLOR")
        .args(["preview", "§cHot"])
        .assert()
        .success()
        .stdout("Hot\n");
}

#[test]
fn preview_plain_and_html() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preview", "--plain", "§aA§rB"])
        .assert()
        .success()
        .stdout("AB\n");
    env.cmd()
        .args(["preview", "--html", "§l<x>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("font-weight: bold"))
        .stdout(predicate::str::contains("&lt;x&gt;"));
}

#[test]
fn preview_segments_describes_runs() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preview", "--segments", "§6Gold §lBold"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. \"Gold \" #FFAA00 (Gold) -"))
        .stdout(predicate::str::contains("2. \"Bold\" #FFAA00 (Gold) bold"));
}

#[test]
fn preview_ampersand_mode() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preview", "--plain", "-a", "&aSalt & Pepper"])
        .assert()
        .success()
        .stdout("Salt & Pepper\n");
}

#[test]
fn preview_warns_about_unknown_codes() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preview", "A§zB"])
        .assert()
        .success()
        .stdout("AB\n")
        .stderr(predicate::str::contains("Unknown formatting code §z at position 1"));
}

#[test]
fn literal_policy_keeps_unknown_codes() {
    let env = TestEnv::new();
    env.write_config("[formatting]\nunknown_codes = \"literal\"\n");
    env.cmd()
        .args(["preview", "A§zB"])
        .assert()
        .success()
        .stdout("A§zB\n");
}

#[test]
fn plain_conflicts_with_html() {
    let env = TestEnv::new();
    env.cmd()
        .args(["preview", "--plain", "--html", "x"])
        .assert()
        .failure();
}

#[test]
fn codes_lists_the_table() {
    let env = TestEnv::new();
    env.cmd()
        .arg("codes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Colors:"))
        .stdout(predicate::str::contains("§6  Gold"))
        .stdout(predicate::str::contains("#FFAA00"))
        .stdout(predicate::str::contains("§k  Obfuscated"))
        .stdout(predicate::str::contains("§r  Reset"));
}
