// SPDX-License-Identifier: MPL-2.0
//! Contact section: plain contact rows and outbound profile links.

use super::{card, card_title, grid, heading, staggered, two_columns, CardId, Message, ViewContext};
use crate::app::section::Section;
use crate::content::{Profile, CONTACT_INFO, PROFILES};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{button, image, svg, text, Column, Row};
use iced::{alignment, Element, Font, Length};
use std::path::Path;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let info = CONTACT_INFO
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::MD), |column, (i, entry)| {
            column.push(staggered(ctx, i + 2, labelled(entry.label, text(entry.value))))
        });

    let profiles = PROFILES
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::MD), |column, (i, profile)| {
            let icon = ctx.profile_icons.get(i).and_then(Option::as_deref);
            column.push(staggered(ctx, i + 2, profile_row(profile, icon)))
        });

    let info_card = card(
        ctx,
        CardId::new(Section::Contact, 0),
        1,
        Column::new()
            .spacing(spacing::LG)
            .push(card_title(ctx.i18n.tr("contact-info-title")))
            .push(info),
    );

    let profiles_card = card(
        ctx,
        CardId::new(Section::Contact, 1),
        1,
        Column::new()
            .spacing(spacing::LG)
            .push(card_title(ctx.i18n.tr("contact-profiles-title")))
            .push(profiles),
    );

    Column::new()
        .spacing(spacing::XL)
        .push(staggered(ctx, 0, heading(ctx.i18n.tr("contact-title"))))
        .push(grid(vec![info_card, profiles_card], two_columns(ctx)))
        .into()
}

/// `Label: value` row with a bold label.
fn labelled<'a>(
    label: &'static str,
    value: impl Into<Element<'a, Message>>,
) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text(format!("{label}:"))
                .font(Font {
                    weight: iced::font::Weight::Semibold,
                    ..Font::default()
                })
                .style(styles::text::primary),
        )
        .push(value)
}

fn profile_row<'a>(profile: &'static Profile, icon: Option<&Path>) -> Element<'a, Message> {
    let link = button(text(profile.url))
        .padding(0)
        .style(styles::button::link)
        .on_press(Message::OpenLink(profile.url));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);
    if let Some(path) = icon {
        row = row.push(profile_icon(path));
    }
    row.push(labelled(profile.label, link)).into()
}

/// Raster or vector logo, depending on the file extension.
fn profile_icon<'a>(path: &Path) -> Element<'a, Message> {
    let size = Length::Fixed(sizing::ICON_LG);
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        svg(svg::Handle::from_path(path))
            .width(size)
            .height(size)
            .into()
    } else {
        image(image::Handle::from_path(path))
            .width(size)
            .height(size)
            .into()
    }
}
