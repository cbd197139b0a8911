use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn tdl_help_works() {
    Command::cargo_bin("tdl")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("To-Do List"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = [
        "add", "list", "toggle", "edit", "rm", "clear", "export", "import", "remind", "watch",
        "theme", "lang",
    ];

    for cmd in subcommands {
        Command::cargo_bin("tdl")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}
