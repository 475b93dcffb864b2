use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RecentQueries {
    pub queries: Vec<String>,
}

pub fn get_config_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("pigment");
        path.push("recent_queries.toml");
        path
    })
}

pub fn load_recent_queries() -> Vec<String> {
    get_config_path()
        .map(|path| load_from(&path))
        .unwrap_or_default()
}

pub fn save_recent_queries(queries: &[String]) {
    if let Some(path) = get_config_path() {
        save_to(&path, queries);
    }
}

fn load_from(path: &Path) -> Vec<String> {
    if !path.exists() {
        return Vec::new();
    }
    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| toml::from_str::<RecentQueries>(&content).ok())
        .map(|recent| recent.queries)
        .unwrap_or_default()
}

fn save_to(path: &Path, queries: &[String]) {
    // Best-effort: recent queries are a convenience, not data.
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let recent = RecentQueries {
        queries: queries.to_vec(),
    };
    if let Ok(content) = toml::to_string(&recent) {
        let _ = std::fs::write(path, content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("recent_queries.toml");
        let queries = vec!["sunset".to_string(), "deep ocean".to_string()];

        save_to(&path, &queries);
        assert_eq!(load_from(&path), queries);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from(&dir.path().join("nope.toml")).is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recent_queries.toml");
        std::fs::write(&path, "{{{{ not toml").unwrap();
        assert!(load_from(&path).is_empty());
    }
}
