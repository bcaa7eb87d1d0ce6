use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("7")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");

    let attempts = v["attempts"].as_u64().unwrap();
    assert!((17..=120).contains(&attempts));
    assert_eq!(v["misses"].as_u64().unwrap(), attempts - 17);
    assert_eq!(v["destroyed_order"].as_array().unwrap().len(), 5);
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .arg("12345")
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
