//! Turns an outline focus into panel lines: icons, markers and the
//! breadcrumb title.

pub mod icons;
pub mod panel;

pub use panel::{PanelLine, PanelView, breadcrumb, render, wants_preview};
