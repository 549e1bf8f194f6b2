#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER_LINE: &str =
    "Nome,CPF/CNPJ,Data de nascimento,Telefone,Número do processo,Tipo do processo,Descrição";

/// Binary with HOME (and APPDATA) pointed at an empty per-process directory,
/// so a developer's own `~/.gerenciador/gerenciador.conf` never leaks in.
pub fn ger() -> Command {
    ger_with_home(&isolated_home())
}

pub fn ger_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("gerenciador");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env("USERPROFILE", home)
        .env_remove("GERENCIADOR_LOG");
    cmd
}

fn isolated_home() -> PathBuf {
    let home = std::env::temp_dir().join(format!("gerenciador_home_{}", std::process::id()));
    fs::create_dir_all(&home).expect("create isolated home");
    home
}

/// Write a config file into `home` the way `init` lays it out.
pub fn write_config(home: &Path, yaml: &str) {
    let dir = if cfg!(target_os = "windows") {
        home.join("gerenciador")
    } else {
        home.join(".gerenciador")
    };
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("gerenciador.conf"), yaml).expect("write config");
}

/// Scratch directory plus the data file path inside it. Keep the TempDir alive
/// for the whole test or the directory is removed.
pub fn setup_data_file(name: &str) -> (TempDir, String) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path: PathBuf = dir.path().join(format!("{name}_clientes.csv"));
    (dir, path.to_string_lossy().to_string())
}

/// `gerenciador --file <path> <args...>`
pub fn ger_on(file: &str, args: &[&str]) -> Command {
    let mut cmd = ger();
    cmd.arg("--file").arg(file).args(args);
    cmd
}

/// Initialize the data file and add two clients used by many tests
pub fn init_with_data(file: &str) {
    ger_on(file, &["--test", "init"]).assert().success();

    ger_on(
        file,
        &[
            "add",
            "--name",
            "Ana",
            "--tax-id",
            "123.456.789-00",
            "--birthdate",
            "01/02/1990",
            "--phone",
            "(11) 98888-7777",
            "--process-number",
            "0001234-56.2024.8.26.0100",
            "--type",
            "Civil",
            "--description",
            "Cobrança de aluguel",
        ],
    )
    .assert()
    .success();

    ger_on(
        file,
        &[
            "add",
            "--name",
            "Bruno",
            "--tax-id",
            "12.345.678/0001-90",
            "--type",
            "trabalhista",
        ],
    )
    .assert()
    .success();
}

pub fn read_lines(file: &str) -> Vec<String> {
    fs::read_to_string(Path::new(file))
        .expect("read data file")
        .lines()
        .map(String::from)
        .collect()
}
