pub mod chrome;
pub mod dispatch;
pub mod sections;
pub mod status;
pub mod style;
pub mod template;
pub mod theme;
pub mod types;
pub mod utils;
pub mod writer;

pub use dispatch::{SectionRenderer, StandardRenderer, render_section, render_sections};
pub use status::StatusView;
pub use theme::{AppliedTheme, apply_theme};
pub use writer::{ExportError, render_page_document, render_site, render_site_with, render_status_page};
