// SPDX-License-Identifier: MPL-2.0
//! Carousel layout: the indicator row above a horizontally paged slide strip.

use super::component::{Message, State, SCROLLABLE_ID};
use super::subcomponents::slide;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::ProgressTrack;
use iced::widget::scrollable::{Direction, Scrollbar, Viewport};
use iced::widget::{column, container, mouse_area, responsive, Id, Row, Scrollable};
use iced::{Element, Length, Padding, Size};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    responsive(move |available: Size| view_inner(state, &ctx, available)).into()
}

/// Vertical space taken by the indicator row.
fn indicator_row_height() -> f32 {
    sizing::INDICATOR_HEIGHT + spacing::XS * 2.0
}

fn view_inner<'a>(state: &'a State, ctx: &ViewContext<'a>, available: Size) -> Element<'a, Message> {
    let indicator_width = state.indicator_width(available.width);
    let tracks = state.indicators().iter().map(|ind| {
        ProgressTrack::new(
            ind.value(),
            indicator_width,
            ctx.colors.indicator_track,
            ind.fill_color(),
        )
        .into_element()
    });
    let indicator_row = container(
        Row::with_children(tracks).spacing(state.settings().indicator_inset),
    )
    .width(Length::Fill)
    .padding(Padding::from([spacing::XS, 0.0]))
    .center_x(Length::Fill);

    let slide_ctx = slide::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        width: available.width,
        height: (available.height - indicator_row_height()).max(0.0),
        unsupported: state.settings().unsupported_media,
        spinner_rotation: state.spinner_rotation(),
    };
    let slides = state
        .slides()
        .iter()
        .map(|s| slide::view::<Message>(s, &slide_ctx));

    let scroller = Scrollable::new(Row::with_children(slides))
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset: viewport.absolute_offset().x,
            viewport_width: viewport.bounds().width,
        });

    let held = mouse_area(scroller)
        .on_press(Message::HoldStarted)
        .on_release(Message::HoldReleased);

    column![indicator_row, held]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
