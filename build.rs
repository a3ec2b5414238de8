fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/translit/default_tables.toml",
        include_str!("src/translit/default_tables.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if let Err(e) = toml::from_str::<toml::Table>(content) {
        panic!("{path} contains invalid TOML: {e}");
    }
}
