use std::fs;

fn main() {
    // Validate the bundled lecture catalog at compile time
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    let lectures = table
        .get("lectures")
        .and_then(|v| v.as_array())
        .expect("default_config.toml must declare at least one [[lectures]] entry");

    for lecture in lectures {
        for key in ["id", "title", "file", "pdf"] {
            if lecture.get(key).is_none() {
                panic!("default_config.toml: lecture entry is missing `{}`", key);
            }
        }
    }
}
