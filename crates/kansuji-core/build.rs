fn main() {
    // Validate embedded TOML files at compile time.
    validate_toml(
        "src/reading/default_readings.toml",
        include_str!("src/reading/default_readings.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
