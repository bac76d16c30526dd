use std::{fs, path::PathBuf};

use hasm::{run, HasmParameters};

fn write_source(name: &str, text: &str) -> String {
    let path: PathBuf = std::env::temp_dir().join(name);
    fs::write(&path, text).unwrap();
    path.display().to_string()
}

fn params(args: &[&str]) -> HasmParameters {
    HasmParameters::from_args(std::iter::once("hasm").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_writes_tables_to_output() {
    let source = write_source("hasm_run_single.asm", "L: LOAD N\nJMP L\nN: SPACE\n");
    let output = std::env::temp_dir().join("hasm_run_single.txt");
    let output_name = output.display().to_string();

    run(&params(&[&source, "-o", &output_name])).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with(&format!("{}\nusage table\nN 0:8\nL 1:4\n", source)));
    assert!(written.contains("definition table\nL 0:0\nN 2:0\n"));
    assert!(written.contains("global symbols\n"));
}

#[test]
fn test_link_error_fails_run() {
    let source = write_source("hasm_run_undefined.asm", "LOAD MISSING\nSTOP\n");

    let err = run(&params(&[&source])).unwrap_err();
    assert_eq!(err.to_string(), "linking");
    assert!(format!("{:#}", err).contains("undefined symbol `MISSING`"));
}

#[test]
fn test_assemble_only_skips_linking() {
    let source = write_source("hasm_run_unlinked.asm", "LOAD MISSING\nSTOP\n");
    let output = std::env::temp_dir().join("hasm_run_unlinked.json");
    let output_name = output.display().to_string();

    run(&params(&[&source, "-c", "--json", "-o", &output_name])).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["modules"][0]["usages"]["MISSING"][0]["offset"], 5);
    assert!(value.get("globals").is_none());
}

#[test]
fn test_duplicate_definition_is_not_fatal() {
    let source = write_source("hasm_run_duplicate.asm", "L: STOP\nL: SPACE\n");
    let output = std::env::temp_dir().join("hasm_run_duplicate.txt");
    let output_name = output.display().to_string();

    run(&params(&[&source, "-o", &output_name])).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("definition table\nL 0:0\nglobal symbols\nL "));
}
