//! Invitation color themes.
//!
//! Both variants share the pink accent of the card's buttons; day mode
//! keeps the blush page background, night mode darkens it to plum.

use iced::Color;
use iced::Theme as IcedTheme;
use iced::theme::Palette;
use once_cell::sync::Lazy;

/// Pink used for primary buttons and headings.
const PINK: Color = Color::from_rgb(0.925, 0.282, 0.6);

static DAY: Lazy<IcedTheme> = Lazy::new(|| {
    IcedTheme::custom(
        "Invitation Day".to_string(),
        Palette {
            background: Color::from_rgb(1.0, 0.941, 0.965),
            text: Color::from_rgb(0.122, 0.161, 0.216),
            primary: PINK,
            success: Color::from_rgb(0.0, 0.6, 0.4),
            danger: Color::from_rgb(0.8, 0.2, 0.25),
        },
    )
});

static NIGHT: Lazy<IcedTheme> = Lazy::new(|| {
    IcedTheme::custom(
        "Invitation Night".to_string(),
        Palette {
            background: Color::from_rgb(0.16, 0.07, 0.11),
            text: Color::from_rgb(0.97, 0.93, 0.95),
            primary: PINK,
            success: Color::from_rgb(0.0, 0.6, 0.4),
            danger: Color::from_rgb(0.8, 0.2, 0.25),
        },
    )
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Day,
    Night,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Day
    }
}

impl From<crate::config::ThemeMode> for Theme {
    fn from(mode: crate::config::ThemeMode) -> Self {
        match mode {
            crate::config::ThemeMode::Night => Theme::Night,
            crate::config::ThemeMode::Day => Theme::Day,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Day => DAY.clone(),
            Theme::Night => NIGHT.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_keep_the_pink_accent() {
        let day: IcedTheme = Theme::Day.into();
        let night: IcedTheme = Theme::Night.into();
        assert_eq!(day.palette().primary, PINK);
        assert_eq!(night.palette().primary, PINK);
        assert_ne!(day.palette().background, night.palette().background);
    }

    #[test]
    fn config_modes_map_onto_the_variants() {
        assert_eq!(Theme::from(crate::config::ThemeMode::Day), Theme::Day);
        assert_eq!(Theme::from(crate::config::ThemeMode::Night), Theme::Night);
    }
}
