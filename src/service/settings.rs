use std::{
    fs::{create_dir, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use json::JsonValue;

/// The one preference that survives restarts: reduced-graphics "potato
/// mode". Everything else about the session is ephemeral.
pub struct Settings {
    pub potato_mode: bool,
    path: PathBuf,
}

const SETTINGS_FILE: &str = "data/settings.json";
const POTATO_MODE_KEY: &str = "potatoMode";

impl Settings {
    pub fn load() -> Self {
        Settings::load_from(Path::new(SETTINGS_FILE))
    }

    /// Missing or unreadable settings fall back to defaults; this is a
    /// preference file, not critical state.
    pub fn load_from(path: &Path) -> Self {
        let potato_mode = Settings::read_potato_mode(path).unwrap_or(false);
        Self {
            potato_mode,
            path: path.to_path_buf(),
        }
    }

    pub fn toggle_potato_mode(&mut self) {
        self.potato_mode = !self.potato_mode;
        self.save();
    }

    fn read_potato_mode(path: &Path) -> Option<bool> {
        let mut file = File::open(path).ok()?;
        let mut buf = String::new();
        file.read_to_string(&mut buf).ok()?;
        let doc = json::parse(&buf).ok()?;
        doc[POTATO_MODE_KEY].as_bool()
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir(parent);
            }
        }

        let mut doc = json::object::Object::new();
        doc.insert(POTATO_MODE_KEY, self.potato_mode.into());
        if let Ok(mut file) = File::create(&self.path) {
            let _ = file.write_all(JsonValue::Object(doc).pretty(2).as_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_settings_path() -> PathBuf {
        std::env::temp_dir().join(format!("buildforge-settings-{}.json", Uuid::new_v4()))
    }

    #[test]
    fn missing_file_defaults_to_off() {
        let settings = Settings::load_from(&temp_settings_path());
        assert!(!settings.potato_mode);
    }

    #[test]
    fn toggle_persists_and_rehydrates() {
        let path = temp_settings_path();

        let mut settings = Settings::load_from(&path);
        settings.toggle_potato_mode();
        assert!(settings.potato_mode);

        let reloaded = Settings::load_from(&path);
        assert!(reloaded.potato_mode);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn garbage_file_defaults_to_off() {
        let path = temp_settings_path();
        std::fs::write(&path, "not json at all").unwrap();

        let settings = Settings::load_from(&path);
        assert!(!settings.potato_mode);

        let _ = std::fs::remove_file(&path);
    }
}
