//! Notification banner slice.
//!
//! Stateless: it renders whatever notification the form controller holds and
//! reports where its close control landed. Dismissal is routed by the
//! reducer back to `FormController::dismiss`.

mod render;
mod style;

pub use render::{BANNER_HEIGHT, CLOSE_LABEL, banner_height, is_visible, render_banner};
pub use style::{BannerStyle, BannerTone, style_for};
