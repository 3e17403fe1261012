use assert_cmd::Command;

/// Command builder for the adspecta binary with a hermetic environment.
pub fn adspecta() -> Command {
    let mut cmd = Command::cargo_bin("adspecta").expect("adspecta binary builds");
    cmd.env_remove("ADSPECTA_API_URL");
    cmd
}
