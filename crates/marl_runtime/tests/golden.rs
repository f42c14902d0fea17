//! Golden-file runner: evaluate every `tests/golden/*.marl` module and
//! compare its export against the `.json` manifest next to it. Set
//! `MARL_UPDATE_GOLDEN=1` to rewrite the manifests.

use std::fs;
use std::path::PathBuf;

use marl_driver::Driver;
use marl_runtime::{Runtime, export};

fn golden_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

#[test]
fn golden_modules_export_expected_json() {
    let dir = golden_dir();
    let update = std::env::var("MARL_UPDATE_GOLDEN").is_ok();

    let mut sources: Vec<PathBuf> = fs::read_dir(&dir)
        .expect("golden directory")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "marl"))
        .collect();
    sources.sort();
    assert!(
        sources.len() >= 4,
        "expected golden modules in {}",
        dir.display()
    );

    let driver = Driver::new();
    for path in sources {
        let name = path.display();
        let src = fs::read_to_string(&path).expect("read golden source");
        let compiled = driver.compile_text(&path.to_string_lossy(), &src);
        let errors: Vec<_> = compiled
            .diagnostics
            .iter()
            .filter(|d| d.is_error())
            .collect();
        assert!(errors.is_empty(), "{name}: {errors:#?}");

        let mut rt = Runtime::new();
        let value = rt
            .load_module(&compiled.program)
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        let json = export(&value);

        let manifest = path.with_extension("json");
        if update {
            fs::write(&manifest, format!("{json:#}\n")).expect("write manifest");
            continue;
        }
        let expected_text = fs::read_to_string(&manifest)
            .unwrap_or_else(|e| panic!("{}: {e}", manifest.display()));
        let expected: serde_json::Value =
            serde_json::from_str(&expected_text).expect("parse manifest");
        assert_eq!(json, expected, "export mismatch for {name}");
    }
}
