//! Layout state container.
//!
//! Two slices of state live here. `LayoutConfig` is the persisted
//! preferences record (theme, colors, menu mode); every change to it arms
//! the debounced settings writer. `LayoutState` is runtime-only visibility
//! flags — never persisted, reset on menu-mode change.

use crate::store::persist::{DebouncedWriter, SettingsStorage};

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Quiet period before a settings write.
const SAVE_DEBOUNCE: Duration = Duration::from_millis(300);

/// Widths at or below this are treated as mobile.
const MOBILE_BREAKPOINT: u32 = 991;

// ─── Collaborator traits ─────────────────────────────────────────────────────

/// Applies the dark-theme class at the document level.
pub trait ThemeSink: Send {
    /// Sync the document-level dark class to `dark`. Idempotent.
    fn set_dark(&mut self, dark: bool);

    /// Apply the flip inside a visual cross-fade when the runtime has one.
    /// Purely presentational; the default applies immediately.
    fn set_dark_transitioned(&mut self, dark: bool) {
        self.set_dark(dark);
    }
}

/// A theme sink that does nothing. For headless embedders and tests.
pub struct NoopTheme;

impl ThemeSink for NoopTheme {
    fn set_dark(&mut self, _dark: bool) {}
}

/// Reports the current viewport width in logical pixels.
pub trait Viewport: Send {
    fn width(&self) -> u32;
}

/// A viewport with a fixed width. For headless embedders and tests.
pub struct FixedViewport(pub u32);

impl Viewport for FixedViewport {
    fn width(&self) -> u32 {
        self.0
    }
}

// ─── Config and runtime state ────────────────────────────────────────────────

/// How the main menu is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuMode {
    #[default]
    Static,
    Overlay,
    Drawer,
    Reveal,
}

/// Persisted layout preferences.
///
/// Field-level serde defaults give merge-over-defaults rehydration: fields
/// present in storage win, absent fields fall back to the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub preset: String,
    pub primary: String,
    pub surface: Option<String>,
    pub dark_theme: bool,
    pub menu_mode: MenuMode,
    pub menu_theme: String,
    pub card_style: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            preset: "Aura".to_string(),
            primary: "emerald".to_string(),
            surface: None,
            dark_theme: false,
            menu_mode: MenuMode::Static,
            menu_theme: "dark".to_string(),
            card_style: "filled".to_string(),
        }
    }
}

/// Runtime-only visibility flags. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutState {
    pub static_menu_desktop_inactive: bool,
    pub overlay_menu_active: bool,
    pub profile_sidebar_visible: bool,
    pub config_sidebar_visible: bool,
    pub static_menu_mobile_active: bool,
    pub menu_hover_active: bool,
    pub active_menu_item: Option<String>,
    pub sidebar_active: bool,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// Owns layout configuration and runtime UI flags.
pub struct LayoutStore {
    config: LayoutConfig,
    state: LayoutState,
    theme: Box<dyn ThemeSink>,
    viewport: Box<dyn Viewport>,
    writer: DebouncedWriter,
}

impl LayoutStore {
    /// Rehydrate from storage (merge-over-defaults) and sync the dark class.
    pub fn new(
        storage: Arc<dyn SettingsStorage>,
        theme: Box<dyn ThemeSink>,
        viewport: Box<dyn Viewport>,
    ) -> Self {
        let config = load_config(storage.as_ref());
        let mut store = Self {
            config,
            state: LayoutState::default(),
            theme,
            viewport,
            writer: DebouncedWriter::new(storage, SAVE_DEBOUNCE),
        };
        store.apply_dark_mode_class();
        store
    }

    // ── Reads ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn is_dark_theme(&self) -> bool {
        self.config.dark_theme
    }

    pub fn is_sidebar_active(&self) -> bool {
        self.state.overlay_menu_active || self.state.static_menu_mobile_active
    }

    pub fn primary(&self) -> &str {
        &self.config.primary
    }

    pub fn surface(&self) -> Option<&str> {
        self.config.surface.as_deref()
    }

    /// Display label for the color-scheme selector.
    pub fn color_scheme_display(&self) -> &'static str {
        if self.config.dark_theme {
            "Dark"
        } else {
            "Light"
        }
    }

    // ── Actions ──────────────────────────────────────────────────────────

    pub fn toggle_dark_mode(&mut self) {
        self.config.dark_theme = !self.config.dark_theme;
        self.theme.set_dark_transitioned(self.config.dark_theme);
        self.persist();
    }

    /// Sync the document class to current config. Safe to call at startup,
    /// before any toggle.
    pub fn apply_dark_mode_class(&mut self) {
        self.theme.set_dark(self.config.dark_theme);
    }

    /// Toggle menu visibility. Exactly one runtime flag flips per mode; all
    /// modes except `Reveal` additionally get the width-gated static toggle.
    pub fn toggle_menu(&mut self) {
        let width = self.viewport.width();
        match self.config.menu_mode {
            MenuMode::Overlay => {
                self.state.overlay_menu_active = !self.state.overlay_menu_active;
            }
            MenuMode::Drawer => {
                self.state.sidebar_active = !self.state.sidebar_active;
            }
            MenuMode::Reveal => {
                // On mobile, reveal behaves like static; on desktop the menu
                // is hover-driven, so only the inactive flag flips. Skip the
                // generic toggle below either way.
                if width <= MOBILE_BREAKPOINT {
                    self.state.static_menu_mobile_active =
                        !self.state.static_menu_mobile_active;
                } else {
                    self.state.static_menu_desktop_inactive =
                        !self.state.static_menu_desktop_inactive;
                }
                return;
            }
            MenuMode::Static => {}
        }

        if width > MOBILE_BREAKPOINT {
            self.state.static_menu_desktop_inactive = !self.state.static_menu_desktop_inactive;
        } else {
            self.state.static_menu_mobile_active = !self.state.static_menu_mobile_active;
        }
    }

    /// Switch menu mode and reset all visibility flags so no stale state
    /// survives the switch.
    pub fn update_menu_mode(&mut self, mode: MenuMode) {
        self.config.menu_mode = mode;
        self.state.overlay_menu_active = false;
        self.state.static_menu_mobile_active = false;
        self.state.sidebar_active = false;
        self.state.static_menu_desktop_inactive = false;
        self.persist();
    }

    pub fn set_active_menu_item(&mut self, item: impl Into<String>) {
        self.state.active_menu_item = Some(item.into());
    }

    pub fn update_preset(&mut self, preset: impl Into<String>) {
        self.config.preset = preset.into();
        self.persist();
    }

    pub fn update_primary(&mut self, color: impl Into<String>) {
        self.config.primary = color.into();
        self.persist();
    }

    pub fn update_surface(&mut self, surface: impl Into<String>) {
        self.config.surface = Some(surface.into());
        self.persist();
    }

    /// Only toggles (with its side effects) when the requested value differs
    /// from current, so the document class is never redundantly flipped.
    pub fn update_dark_theme(&mut self, dark: bool) {
        if self.config.dark_theme != dark {
            self.toggle_dark_mode();
        }
    }

    pub fn update_card_style(&mut self, style: &str) {
        self.config.card_style = style.to_lowercase();
        self.persist();
    }

    pub fn update_menu_theme(&mut self, theme: &str) {
        self.config.menu_theme = theme.to_lowercase();
        self.persist();
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.config) {
            Ok(snapshot) => self.writer.schedule(snapshot),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize layout settings"),
        }
    }
}

fn load_config(storage: &dyn SettingsStorage) -> LayoutConfig {
    match storage.load() {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Corrupt layout settings, using defaults");
                LayoutConfig::default()
            }
        },
        Ok(None) => LayoutConfig::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load layout settings, using defaults");
            LayoutConfig::default()
        }
    }
}
