//! Cross-process determinism: spawns `trace_fixture` under several
//! environment variants and asserts all produce identical output.
//!
//! Each process gets fresh `HashMap` seeds, so this catches any ordering
//! that leaks from hashing into the path or the trace bytes.

use std::process::Command;

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)], args: &[&str]) -> String {
    let bin = env!("CARGO_BIN_EXE_trace_fixture");

    let mut command = Command::new(bin);
    command.current_dir(work_dir).args(args);
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });
    assert!(
        output.status.success(),
        "trace_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

fn assert_variants_agree(args: &[&str]) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tmp = tempfile::tempdir().unwrap();
    let tmp_dir = tmp.path().to_string_lossy().to_string();

    let baseline = run_variant(manifest_dir, &[], args);
    let variants = [
        run_variant(&tmp_dir, &[], args),
        run_variant(manifest_dir, &[("LC_ALL", "C")], args),
        run_variant(manifest_dir, &[("LANG", "tr_TR.UTF-8")], args),
        run_variant(manifest_dir, &[("RUST_LOG", "trace")], args),
    ];
    for (i, v) in variants.iter().enumerate() {
        assert_eq!(&baseline, v, "variant {i} diverged");
    }
    baseline
}

#[test]
fn connected_query_is_identical_across_processes() {
    let out = assert_variants_agree(&[]);
    assert!(out.contains("degrees=2\n"), "{out}");
    assert!(out.contains("path=104257>102,112384>158\n"), "{out}");
    assert!(out.lines().next().unwrap().starts_with("trace_digest=sha256:"));
}

#[test]
fn disconnected_query_is_identical_across_processes() {
    let out = assert_variants_agree(&["914612", "158"]);
    assert!(out.contains("degrees=-1\n"), "{out}");
    assert!(out.contains("total_expansions=1\n"), "{out}");
}

#[test]
fn repeated_runs_in_one_directory_agree() {
    let dir = env!("CARGO_MANIFEST_DIR");
    let first = run_variant(dir, &[], &["144", "158"]);
    for _ in 0..3 {
        assert_eq!(run_variant(dir, &[], &["144", "158"]), first);
    }
}
