use std::collections::HashSet;
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct CatalogFile {
    brand: String,
    redirect_url: String,
    hero_image: String,
    rows: Vec<RowEntry>,
}

#[derive(Deserialize)]
struct RowEntry {
    title: String,
    items: Vec<String>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");
    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=VITRINE_CATALOG_PATH");
    println!("cargo:rerun-if-env-changed=VITRINE_REDIRECT_URL");
    println!("cargo:rerun-if-env-changed=TRUNK_PUBLIC_VITRINE_REDIRECT_URL");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let catalog_path = resolve_catalog_path(workspace_root);
    println!("cargo:rerun-if-changed={}", catalog_path.display());

    let contents = fs::read_to_string(&catalog_path).unwrap_or_else(|err| {
        panic!(
            "failed to read site catalog at {}: {err}",
            catalog_path.display()
        )
    });

    let catalog: CatalogFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse site catalog at {}: {err}",
            catalog_path.display()
        )
    });

    if catalog.rows.is_empty() {
        panic!("site catalog {} has no rows", catalog_path.display());
    }

    validate_rows(&catalog.rows, &catalog_path);

    let redirect_url = redirect_override().unwrap_or_else(|| catalog.redirect_url.trim().to_string());
    if redirect_url.is_empty() {
        panic!("redirect_url cannot be empty in {}", catalog_path.display());
    }

    let mut output = String::new();
    writeln!(&mut output, "pub const BRAND: &str = {};", rust_string(catalog.brand.trim())).unwrap();
    writeln!(
        &mut output,
        "pub const DEFAULT_REDIRECT_URL: &str = {};",
        rust_string(&redirect_url)
    )
    .unwrap();
    writeln!(
        &mut output,
        "pub const HERO_IMAGE: &str = {};",
        rust_string(catalog.hero_image.trim())
    )
    .unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "pub const CATALOG_ROWS: &[CatalogRow] = &[").unwrap();

    for row in &catalog.rows {
        writeln!(&mut output, "    CatalogRow {{").unwrap();
        writeln!(&mut output, "        title: {},", rust_string(row.title.trim())).unwrap();
        writeln!(&mut output, "        items: &[").unwrap();
        for item in &row.items {
            writeln!(&mut output, "            {},", rust_string(item.trim())).unwrap();
        }
        writeln!(&mut output, "        ],").unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("site_catalog.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn redirect_override() -> Option<String> {
    ["VITRINE_REDIRECT_URL", "TRUNK_PUBLIC_VITRINE_REDIRECT_URL"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn resolve_catalog_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("VITRINE_CATALOG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("content/catalog.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn validate_rows(rows: &[RowEntry], catalog_path: &Path) {
    let mut titles = HashSet::new();

    for row in rows {
        if row.title.trim().is_empty() {
            panic!("row title cannot be empty in {}", catalog_path.display());
        }
        if row.items.is_empty() {
            panic!(
                "row '{}' has no items in {}",
                row.title,
                catalog_path.display()
            );
        }
        if row.items.iter().any(|item| item.trim().is_empty()) {
            panic!(
                "row '{}' has an empty item src in {}",
                row.title,
                catalog_path.display()
            );
        }
        if !titles.insert(row.title.trim().to_string()) {
            panic!(
                "duplicate row title '{}' in {}",
                row.title,
                catalog_path.display()
            );
        }
    }
}
