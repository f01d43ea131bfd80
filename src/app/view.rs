// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::carousel::{self, strip};
use crate::ui::design_tokens::typography;
use crate::ui::theming::ColorScheme;
use iced::widget::{center, container, stack, text};
use iced::{Background, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub carousel: &'a carousel::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let strip = strip::view(
        ctx.carousel,
        strip::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
        },
    )
    .map(Message::Carousel);

    let content: Element<'_, Message> = if ctx.carousel.is_empty() {
        let notice = center(
            text(ctx.i18n.tr("carousel-empty"))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        );
        stack![strip, notice].into()
    } else {
        strip
    };

    let surface = ctx.colors.surface_primary;
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(surface)),
            ..container::Style::default()
        })
        .into()
}
