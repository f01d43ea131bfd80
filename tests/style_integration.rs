// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Color;
    use iced_stories::ui::design_tokens::{palette, radius, sizing, spacing};
    use iced_stories::ui::theming::{AppTheme, ThemeMode};
    use iced_stories::ui::widgets::ProgressTrack;

    #[test]
    fn progress_tracks_build_elements() {
        for fill in [0.0, 0.5, 1.0] {
            let track = ProgressTrack::new(fill, 120.0, palette::GRAY_150, palette::PRIMARY_500);
            let _element: iced::Element<'static, ()> = track.into_element();
        }
    }

    #[test]
    fn indicator_tokens_fit_together() {
        assert!(radius::INDICATOR >= sizing::INDICATOR_HEIGHT / 2.0);
        assert!(spacing::XS > 0.0);
        assert_eq!(palette::GRAY_150, Color::from_rgb(0.863, 0.863, 0.863));
    }

    #[test]
    fn theming_switches_correctly() {
        let light = AppTheme::new(ThemeMode::Light);
        let dark = AppTheme::new(ThemeMode::Dark);

        // Surface colors should be visually opposite between light and dark
        assert!(light.colors.surface_primary.r > dark.colors.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.colors.text_primary.r < dark.colors.text_primary.r);
    }
}
