//! Banner tone to style lookup.

use enum_map::{Enum, EnumMap, enum_map};
use ratatui::style::Color;
use signin_core::notification::NotificationKind;

/// Visual tone of the banner. `Unset` covers a message without a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum BannerTone {
    Success,
    Error,
    Unset,
}

impl From<Option<NotificationKind>> for BannerTone {
    fn from(kind: Option<NotificationKind>) -> Self {
        match kind {
            Some(NotificationKind::Success) => BannerTone::Success,
            Some(NotificationKind::Error) => BannerTone::Error,
            None => BannerTone::Unset,
        }
    }
}

/// Icon and colors drawn for a tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerStyle {
    pub icon: &'static str,
    pub accent: Color,
    pub text: Color,
}

fn styles() -> EnumMap<BannerTone, BannerStyle> {
    enum_map! {
        BannerTone::Success => BannerStyle {
            icon: NotificationKind::Success.icon(),
            accent: Color::Green,
            text: Color::LightGreen,
        },
        BannerTone::Error => BannerStyle {
            icon: NotificationKind::Error.icon(),
            accent: Color::Red,
            text: Color::LightRed,
        },
        BannerTone::Unset => BannerStyle {
            icon: "➜",
            accent: Color::DarkGray,
            text: Color::White,
        },
    }
}

pub fn style_for(tone: BannerTone) -> BannerStyle {
    styles()[tone]
}
