// SPDX-License-Identifier: MPL-2.0
//! Landing section: name, headline, profile and education cards.

use super::{bullet, card, card_title, grid, staggered, two_columns, CardId, Message, ViewContext};
use crate::app::section::Section;
use crate::content::HOME;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Space};
use iced::{alignment, Element, Font, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = text(HOME.owner)
        .size(typography::DISPLAY)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::default()
        })
        .style(styles::text::brand);

    let headline = text(HOME.headline)
        .size(typography::TITLE_SM)
        .style(styles::text::secondary);

    let profile_card = card(
        ctx,
        CardId::new(Section::Home, 0),
        2,
        Column::new()
            .spacing(spacing::MD)
            .push(card_title(ctx.i18n.tr("home-profile-title")))
            .push(text(HOME.summary).style(styles::text::secondary)),
    );

    let education_card = card(
        ctx,
        CardId::new(Section::Home, 1),
        3,
        education(ctx),
    );

    let footer = text(ctx.i18n.tr_with_args(
        "home-footer",
        &[("year", &ctx.year.to_string()), ("owner", HOME.owner)],
    ))
    .size(typography::BODY_SM)
    .style(styles::text::muted)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center);

    Column::new()
        .spacing(spacing::LG)
        .push(staggered(ctx, 0, name))
        .push(staggered(ctx, 1, headline))
        .push(grid(vec![profile_card, education_card], two_columns(ctx)))
        .push(Space::new().height(Length::Fixed(spacing::XXL)))
        .push(staggered(ctx, 4, footer))
        .into()
}

fn education<'a>(ctx: &ViewContext<'a>) -> Column<'a, Message> {
    let school = &HOME.education;

    let focus = school
        .focus_areas
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |list, area| {
            list.push(bullet(*area))
        });

    Column::new()
        .spacing(spacing::XS)
        .push(card_title(ctx.i18n.tr("home-education-title")))
        .push(
            text(school.institution)
                .font(Font {
                    weight: iced::font::Weight::Semibold,
                    ..Font::default()
                })
                .style(styles::text::primary),
        )
        .push(text(school.degree).style(styles::text::secondary))
        .push(
            text(ctx.i18n.tr("home-focus-areas"))
                .size(typography::BODY)
                .style(styles::text::secondary),
        )
        .push(focus)
}
