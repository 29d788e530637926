use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "koi.config.yaml";
const STORE_DIR_NAME: &str = ".koi";
const STORE_FILE_NAME: &str = "variables.json";

pub fn clean_path_str(s: &str) -> &str {
    #[cfg(windows)]
    {
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return stripped;
        }
    }
    s
}

pub fn clean_path(path: &Path) -> String {
    let s = path.display().to_string();
    clean_path_str(&s).to_string()
}

/// `~/.koi/variables.json`
pub fn default_variables_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(STORE_DIR_NAME).join(STORE_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variables_path_layout() {
        if let Some(path) = default_variables_path() {
            assert!(path.ends_with(".koi/variables.json"));
        }
    }

    #[test]
    fn test_clean_path_plain() {
        assert_eq!(clean_path(Path::new("a/b.yaml")), "a/b.yaml");
    }
}
