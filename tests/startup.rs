use std::process::{Command, Output};

fn start(vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sales-api"))
        .current_dir(std::env::temp_dir())
        .env_clear()
        .envs(vars.iter().copied())
        .output()
        .unwrap()
}

#[test]
fn missing_database_url_exits_with_failure() {
    let output = start(&[("STORE", "postgres")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DATABASE_URL must be set"), "stderr: {stderr}");
}

#[test]
fn invalid_pool_size_exits_with_failure() {
    let output = start(&[("STORE", "memory"), ("DB_MAX_CONNECTIONS", "0")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DB_MAX_CONNECTIONS"), "stderr: {stderr}");
}
