//! Light/dark theme switching for the page hosting the player.
//!
//! The helper never touches global state: callers pass the root element handle and the preference
//! store explicitly.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{FramescrubError, FramescrubResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Custom properties written to the root for this theme.
    pub fn palette(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Light => &[
                ("--bg-primary", "#f8fafc"),
                ("--bg-secondary", "#ffffff"),
                ("--text-primary", "#1e293b"),
                ("--text-secondary", "#475569"),
                ("--text-tertiary", "#64748b"),
                ("--border-light", "rgba(74, 144, 226, 0.2)"),
            ],
            Self::Dark => &[
                ("--bg-primary", "#0f1419"),
                ("--bg-secondary", "#1a222d"),
                ("--text-primary", "#e2e8f0"),
                ("--text-secondary", "#a0aec0"),
                ("--text-tertiary", "#718096"),
                ("--border-light", "rgba(74, 144, 226, 0.1)"),
            ],
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = FramescrubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(FramescrubError::validation(format!(
                "unknown theme '{other}'"
            ))),
        }
    }
}

/// Handle to the document root the theme is applied to.
pub trait ThemeRoot {
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// Where the chosen theme is remembered between sessions.
pub trait PreferenceStore {
    fn load(&self) -> FramescrubResult<Option<Theme>>;
    fn save(&mut self, theme: Theme) -> FramescrubResult<()>;
}

/// Write `theme`'s palette and `data-theme` marker to `root`.
pub fn apply_theme<R: ThemeRoot + ?Sized>(root: &mut R, theme: Theme) {
    for (name, value) in theme.palette() {
        root.set_attribute(name, value);
    }
    root.set_attribute("data-theme", theme.as_str());
}

/// Apply the stored preference, or the default theme when none is stored.
pub fn restore<R, S>(root: &mut R, store: &S) -> FramescrubResult<Theme>
where
    R: ThemeRoot + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let theme = store.load()?.unwrap_or_default();
    apply_theme(root, theme);
    Ok(theme)
}

/// Flip `current`, apply and persist the result.
pub fn toggle<R, S>(current: Theme, root: &mut R, store: &mut S) -> FramescrubResult<Theme>
where
    R: ThemeRoot + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let next = current.toggled();
    apply_theme(root, next);
    store.save(next)?;
    tracing::debug!(theme = next.as_str(), "theme toggled");
    Ok(next)
}

#[derive(serde::Serialize, serde::Deserialize)]
struct StoredPreference {
    theme: Theme,
}

/// [`PreferenceStore`] backed by a small JSON file. A missing file means no preference.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> FramescrubResult<Option<Theme>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read theme preference '{}'", self.path.display()))?;
        let stored: StoredPreference =
            serde_json::from_str(&text).map_err(|e| FramescrubError::serde(e.to_string()))?;
        Ok(Some(stored.theme))
    }

    fn save(&mut self, theme: Theme) -> FramescrubResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create preference dir '{}'", dir.display()))?;
        }
        let text = serde_json::to_string(&StoredPreference { theme })
            .map_err(|e| FramescrubError::serde(e.to_string()))?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("write theme preference '{}'", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/theme.rs"]
mod tests;
