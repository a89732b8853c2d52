use std::fs::create_dir_all;

use clap_complete::{generate_to, shells};

include!("src/parser.rs");

fn main() {
    println!("cargo:rerun-if-changed=src/parser.rs");

    if std::env::var("DOCS_RS").is_ok() {
        return; // only build when we're not generating docs
    }

    let outdir = "shell_completions";

    if create_dir_all(outdir).is_err() {
        // read-only source tree
        return;
    }

    let mut app = initialize();

    let _ = generate_to(shells::Bash, &mut app, "imgscout", outdir);
    let _ = generate_to(shells::Fish, &mut app, "imgscout", outdir);
    let _ = generate_to(shells::Zsh, &mut app, "imgscout", outdir);
    let _ = generate_to(shells::PowerShell, &mut app, "imgscout", outdir);
    let _ = generate_to(shells::Elvish, &mut app, "imgscout", outdir);
}
