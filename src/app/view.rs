// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a simple header (title, status, reload) with the gallery
//! surface stacked above it.

use super::config::GalleryConfig;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::ImageList;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub images: &'a ImageList,
    pub gallery_config: &'a GalleryConfig,
    pub viewport_height: f32,
    pub has_source: bool,
    pub loading: bool,
    pub load_error: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let surface = gallery::view(
        ctx.gallery,
        GalleryViewContext {
            images: ctx.images,
            i18n: ctx.i18n,
            viewport_height: ctx.viewport_height,
            columns: ctx.gallery_config.effective_columns(),
            thumbnail_height: ctx.gallery_config.effective_thumbnail_height(),
        },
    )
    .map(Message::Gallery);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(&ctx))
        .push(surface)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);

    let mut reload = button(Text::new(ctx.i18n.tr("gallery-reload")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);
    if ctx.has_source && !ctx.loading {
        reload = reload.on_press(Message::Reload);
    }

    let top = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(reload);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(top)
            .push(status_line(ctx)),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .into()
}

fn status_line<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let text = if ctx.loading {
        ctx.i18n.tr("gallery-loading")
    } else if let Some(error) = ctx.load_error {
        ctx.i18n
            .tr_with_args("error-load-images", &[("error", error.to_string())])
    } else if !ctx.has_source {
        ctx.i18n.tr("gallery-source-missing")
    } else if ctx.images.is_empty() {
        ctx.i18n.tr("gallery-empty")
    } else {
        ctx.i18n
            .tr_with_args("gallery-count", &[("count", ctx.images.len().to_string())])
    };

    Text::new(text)
        .size(typography::BODY)
        .color(palette::GRAY_400)
        .into()
}
