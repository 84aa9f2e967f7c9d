use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn write_cfg(path: &std::path::Path, body: &str) {
    fs::write(path, format!("<config>\n{body}\n</config>\n")).unwrap();
}

#[test]
fn xml_target_name_and_single_pass_are_used() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg_path = base.join("config.xml");
    write_cfg(
        &cfg_path,
        "  <target_name>bucket</target_name>\n  <single_pass>true</single_pass>\n  <log_level>quiet</log_level>",
    );
    let root = base.join("root");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a/1.txt"), b"1").unwrap();
    fs::write(root.join("b/2.txt"), b"2").unwrap();

    let out = Command::new(cargo::cargo_bin!("dir_flatten"))
        .env("DIR_FLATTEN_CONFIG", &cfg_path)
        .arg(&root)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(root.join("bucket/1.txt").is_file());
    assert!(root.join("bucket/2.txt").is_file());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("RUN 1 of 1"), "{stdout}");
}

#[test]
fn cli_flag_overrides_xml_target_name() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg_path = base.join("config.xml");
    write_cfg(&cfg_path, "  <target_name>bucket</target_name>");
    let root = base.join("root");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("a/1.txt"), b"1").unwrap();

    let out = Command::new(cargo::cargo_bin!("dir_flatten"))
        .env("DIR_FLATTEN_CONFIG", &cfg_path)
        .arg(&root)
        .arg("--target-name")
        .arg("abc")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    assert!(root.join("abc/1.txt").is_file());
    assert!(!root.join("bucket").exists());
}

#[test]
fn unknown_xml_field_fails_before_touching_root() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let cfg_path = base.join("config.xml");
    write_cfg(&cfg_path, "  <download_base>/tmp</download_base>");
    let root = base.join("root");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("a/1.txt"), b"1").unwrap();

    let out = Command::new(cargo::cargo_bin!("dir_flatten"))
        .env("DIR_FLATTEN_CONFIG", &cfg_path)
        .arg(&root)
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid configuration"));
    assert!(root.join("a/1.txt").is_file());
    assert!(!root.join("abc").exists());
}

#[test]
fn print_config_reports_env_path_and_exits() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("custom.xml");

    let out = Command::new(cargo::cargo_bin!("dir_flatten"))
        .env("DIR_FLATTEN_CONFIG", &cfg_path)
        .arg("--print-config")
        .arg(td.path().join("never-read"))
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("DIR_FLATTEN_CONFIG"), "{stdout}");
    assert!(stdout.contains(&cfg_path.display().to_string()), "{stdout}");
}

#[test]
fn log_file_receives_run_summary() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let log = base.join("logs/flatten.log");
    let root = base.join("root");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("a/1.txt"), b"1").unwrap();

    let out = Command::new(cargo::cargo_bin!("dir_flatten"))
        .env("DIR_FLATTEN_CONFIG", base.join("none.xml"))
        .arg(&root)
        .arg("--log-level")
        .arg("info")
        .arg("--log-file")
        .arg(&log)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let contents = fs::read_to_string(&log).expect("log file written");
    assert!(contents.contains("Flatten run finished"), "{contents}");
}
