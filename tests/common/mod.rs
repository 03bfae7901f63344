use assert_cmd::Command;
use std::path::Path;

pub fn chronolog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chronolog").unwrap();
    cmd.env_remove("CHRONOLOG_ROOT");
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("API_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized diary at `root`
#[allow(dead_code)]
pub fn chronolog_in(root: &Path) -> Command {
    let mut cmd = chronolog_cmd();
    cmd.current_dir(root);
    cmd
}

#[allow(dead_code)]
pub fn init_diary(root: &Path) {
    chronolog_cmd().arg("init").arg(root).assert().success();
}
