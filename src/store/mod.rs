//! State containers — app-owned reactive state plus the actions that
//! mutate it.
//!
//! Each store exclusively owns its fields; consumers read freely through the
//! accessor methods and mutate only through actions. Stores assume the
//! single-threaded cooperative model of a UI event loop: actions are async
//! tasks that suspend only at the transport boundary, and a mutation
//! completes fully before the next task resumes.

pub mod auth;
pub mod layout;
pub mod persist;
pub mod trading;

pub use auth::{AuthStore, Navigator};
pub use layout::{
    FixedViewport, LayoutConfig, LayoutState, LayoutStore, MenuMode, NoopTheme, ThemeSink,
    Viewport,
};
pub use persist::{DebouncedWriter, FileSettings, MemorySettings, SettingsStorage};
pub use trading::TradingStore;
