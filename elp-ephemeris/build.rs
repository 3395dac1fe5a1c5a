//! Compiles the ELP2000-82B tables into the library when `data/elp82b` holds
//! all 36 files. Otherwise the generated module declares no embedded set and
//! the tables are read from disk at runtime.
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;

const TABLE_COUNT: u8 = 36;

fn main() -> io::Result<()> {
    let manifest_dir = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("CARGO_MANIFEST_DIR is not set"))?;
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is not set"))?;

    let data_dir = manifest_dir.join("data").join("elp82b");
    println!("cargo:rerun-if-changed={}", data_dir.display());

    let files: Vec<PathBuf> = (1..=TABLE_COUNT)
        .map(|n| data_dir.join(format!("ELP{}", n)))
        .collect();
    for file in &files {
        println!("cargo:rerun-if-changed={}", file.display());
    }

    let mut module = String::new();
    if files.iter().all(|f| f.is_file()) {
        module.push_str("pub(crate) static EMBEDDED: Option<[&str; 36]> = Some([\n");
        for file in &files {
            // Debug formatting quotes and escapes the path for the macro.
            let _ = writeln!(module, "    include_str!({:?}),", file.display().to_string());
        }
        module.push_str("]);\n");
    } else {
        let present = files.iter().filter(|f| f.is_file()).count();
        if present > 0 {
            println!(
                "cargo:warning=data/elp82b holds {} of {} ELP files; nothing embedded",
                present, TABLE_COUNT
            );
        }
        module.push_str("pub(crate) static EMBEDDED: Option<[&str; 36]> = None;\n");
    }

    fs::write(out_dir.join("embedded_tables.rs"), module)
}
