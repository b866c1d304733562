use assert_cmd::cargo;
use predicates::prelude::*;

type StdResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn add_two_decimals() -> StdResult {
    let mut cmd = cargo::cargo_bin_cmd!("strcalc");
    cmd.arg("-p").arg("32").arg("add").arg("100").arg("27").assert().success().stdout(predicate::str::contains("127"));
    Ok(())
}

#[test]
fn add_overflows_into_negative_at_8_bits() -> StdResult {
    let mut cmd = cargo::cargo_bin_cmd!("strcalc");
    cmd.arg("-p")
        .arg("8")
        .arg("add")
        .arg("127")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("-128"));
    Ok(())
}

#[test]
fn mul_in_hex_prints_in_hex() -> StdResult {
    let mut cmd = cargo::cargo_bin_cmd!("strcalc");
    cmd.arg("-p")
        .arg("64")
        .arg("-b")
        .arg("16")
        .arg("mul")
        .arg("1a")
        .arg("2b")
        .assert()
        .success();
    Ok(())
}

#[test]
fn divide_by_zero_fails() -> StdResult {
    let mut cmd = cargo::cargo_bin_cmd!("strcalc");
    cmd.arg("-p")
        .arg("32")
        .arg("div")
        .arg("10")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("division by zero"));
    Ok(())
}

#[test]
fn shift_right_arithmetic_reports_in_debug_log() -> StdResult {
    let mut cmd = cargo::cargo_bin_cmd!("strcalc");
    cmd.env("RUST_LOG", "debug")
        .arg("-p")
        .arg("32")
        .arg("shr")
        .arg("-2147483647")
        .arg("--count")
        .arg("1")
        .arg("--bitsize")
        .arg("32")
        .arg("--signed")
        .arg("--arithmetic")
        .assert()
        .success();
    Ok(())
}

#[test]
fn min_signed_8_bit_prints_minus_128() -> StdResult {
    let mut cmd = cargo::cargo_bin_cmd!("strcalc");
    cmd.arg("-p")
        .arg("16")
        .arg("min")
        .arg("--bitsize")
        .arg("8")
        .arg("--signed")
        .assert()
        .success()
        .stdout(predicate::str::contains("-128"));
    Ok(())
}

#[test]
fn print_hex_upper() -> StdResult {
    let mut cmd = cargo::cargo_bin_cmd!("strcalc");
    cmd.arg("-p")
        .arg("32")
        .arg("print")
        .arg("171")
        .arg("--out-base")
        .arg("16")
        .arg("--upper")
        .assert()
        .success()
        .stdout(predicate::str::contains("AB"));
    Ok(())
}

#[test]
fn unsupported_base_is_rejected() -> StdResult {
    let mut cmd = cargo::cargo_bin_cmd!("strcalc");
    cmd.arg("-p")
        .arg("32")
        .arg("-b")
        .arg("5")
        .arg("add")
        .arg("1")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported base"));
    Ok(())
}
