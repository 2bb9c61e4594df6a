// SPDX-License-Identifier: MPL-2.0
//! Rendering for the gallery surface: the docked reveal panel and the
//! lightbox overlay stacked above it.

use super::component::{Message, State};
use super::handle::DragHandle;
use super::subcomponents::lightbox::Direction;
use crate::i18n::fluent::I18n;
use crate::media::{ImageList, ImageRef};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, canvas, image, mouse_area, opaque, tooltip, Column, Container, Row, Scrollable, Space,
    Stack, Text,
};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Padding,
};

pub struct ViewContext<'a> {
    pub images: &'a ImageList,
    pub i18n: &'a I18n,
    pub viewport_height: f32,
    pub columns: u16,
    pub thumbnail_height: f32,
}

/// Renders the surface. An empty list renders nothing.
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.images.is_empty() {
        return Space::new().width(Length::Fill).height(Length::Fill).into();
    }

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(panel(state, &ctx));

    if let Some(index) = state.selected_index() {
        if let Some(image_ref) = ctx.images.get(index) {
            layers = layers.push(lightbox(image_ref, index, &ctx));
        }
    }

    layers.into()
}

fn panel<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let panel_state = state.panel();
    let offset = panel_state.offset();

    let handle = canvas(DragHandle {
        active: panel_state.is_dragging(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let toggle_label = if panel_state.is_open() {
        ctx.i18n.tr("panel-hide")
    } else {
        ctx.i18n.tr("panel-show")
    };
    let toggle = button(Text::new(toggle_label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary)
        .on_press(Message::TogglePanel);

    let percent = (panel_state.reveal_ratio(ctx.viewport_height) * 100.0).round();
    let revealed = Text::new(
        ctx.i18n
            .tr_with_args("panel-revealed", &[("percent", format!("{percent:.0}"))]),
    )
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    // Title, grip and toggle stay visible while the body is fully clipped
    let strip = Row::new()
        .spacing(spacing::SM)
        .padding([0.0, spacing::MD])
        .height(Length::Fixed(sizing::HANDLE_HEIGHT))
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_MD))
        .push(handle)
        .push(revealed)
        .push(toggle);

    let body = Container::new(
        Scrollable::new(thumbnail_grid(ctx))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding([0.0, spacing::MD])
    .width(Length::Fill)
    .height(Length::Fixed(offset))
    .clip(true);

    let surface = Container::new(Column::new().push(strip).push(body))
        .width(Length::Fill)
        .height(Length::Fixed(offset + sizing::HANDLE_HEIGHT))
        .style(styles::container::panel);

    Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}

fn thumbnail_grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = usize::from(ctx.columns.max(1));
    let mut grid = Column::new()
        .spacing(spacing::XS)
        .padding(Padding {
            bottom: spacing::MD,
            ..Padding::ZERO
        });

    let entries: Vec<(usize, &ImageRef)> = ctx.images.iter().enumerate().collect();
    for chunk in entries.chunks(columns) {
        let mut row = Row::new().spacing(spacing::XS);
        for (index, image_ref) in chunk {
            row = row.push(thumbnail(*index, image_ref, ctx.thumbnail_height));
        }
        // Pad the last row so tiles keep the same width
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn thumbnail<'a>(index: usize, image_ref: &ImageRef, height: f32) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(image_ref.to_path()))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .content_fit(ContentFit::Cover);

    button(picture)
        .padding(spacing::XXS)
        .width(Length::FillPortion(1))
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailPressed(index))
        .into()
}

fn lightbox<'a>(image_ref: &ImageRef, index: usize, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let total = ctx.images.len();

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseLightbox);

    // Presses on the picture itself must not reach the backdrop
    let picture = Container::new(opaque(
        image(image::Handle::from_path(image_ref.to_path()))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .content_fit(ContentFit::Contain),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .padding([spacing::XL * 2.0, spacing::XL * 3.0])
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center);

    let overlay_button = |label: &'static str, message: Message, hint: String| {
        tooltip(
            button(Text::new(label).size(typography::TITLE_MD))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::overlay(
                    palette::WHITE,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_STRONG,
                ))
                .on_press(message),
            Text::new(hint).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .gap(4)
    };

    let arrows = Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(overlay_button(
                "‹",
                Message::Navigate(Direction::Previous),
                ctx.i18n.tr("lightbox-previous"),
            ))
            .push(Space::new().width(Length::Fill))
            .push(overlay_button(
                "›",
                Message::Navigate(Direction::Next),
                ctx.i18n.tr("lightbox-next"),
            )),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_y(Vertical::Center);

    let close = Container::new(overlay_button(
        "✕",
        Message::CloseLightbox,
        ctx.i18n.tr("lightbox-close"),
    ))
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Right);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr_with_args(
                "lightbox-caption",
                &[("index", (index + 1).to_string())],
            ))
            .size(typography::BODY)
            .color(palette::GRAY_200),
        )
        .push(
            Container::new(
                Text::new(ctx.i18n.tr_with_args(
                    "lightbox-position",
                    &[
                        ("current", (index + 1).to_string()),
                        ("total", total.to_string()),
                    ],
                ))
                .size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::counter),
        );

    let footer = Container::new(caption)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(picture)
        .push(arrows)
        .push(close)
        .push(footer)
        .into()
}
