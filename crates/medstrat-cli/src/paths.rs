use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "medstrat.yaml";

/// Resolve which config file to use.
///
/// Priority:
/// 1. `--config` flag / `MEDSTRAT_CONFIG` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `medstrat.yaml`
/// 3. None, meaning built-in defaults
pub fn resolve_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, CONFIG_FILE)
}

fn find_upward(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let p = PathBuf::from("/tmp/custom.yaml");
        assert_eq!(resolve_config(Some(&p)), Some(p));
    }

    #[test]
    fn finds_config_in_parent() {
        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "version: 1\n").unwrap();
        assert_eq!(
            find_upward(&nested, CONFIG_FILE),
            Some(dir.path().join(CONFIG_FILE))
        );
    }

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::TempDir::new().unwrap();
        assert_eq!(find_upward(dir.path(), "definitely-not-here.yaml"), None);
    }
}
