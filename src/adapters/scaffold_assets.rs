use include_dir::{Dir, include_dir};

static SCAFFOLD_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scaffold");

/// Starter `cli-tools.yml`.
pub const STARTER_CONFIG: &str = "cli-tools.yml";
/// Starter `entrypoint.sh`.
pub const STARTER_ENTRYPOINT: &str = "entrypoint.sh";

pub fn scaffold_file_content(path: &str) -> Option<&'static str> {
    SCAFFOLD_DIR.get_file(path).and_then(|file| file.contents_utf8())
}
