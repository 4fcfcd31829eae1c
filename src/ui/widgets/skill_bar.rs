// SPDX-License-Identifier: MPL-2.0
//! Labelled progress bar for a skill level.

use crate::content::Skill;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Row, Space};
use iced::{Element, Length};

/// Resolution of the fill split between the filled and empty parts.
const PORTIONS: u16 = 1000;

/// Filled fraction of the track for `level` (percent).
///
/// The level is not validated: values above 100 yield a ratio above 1.
#[must_use]
pub fn fill_ratio(level: u8) -> f32 {
    f32::from(level) / 100.0
}

/// Splits the track into `(filled, empty)` portions.
///
/// A row cannot lay out children past its own width, so ratios above 1
/// draw a full track.
fn portions(ratio: f32) -> (u16, u16) {
    let filled = (ratio.clamp(0.0, 1.0) * f32::from(PORTIONS)).round() as u16;
    (filled, PORTIONS - filled)
}

/// Renders `skill` with its fill scaled by `progress` (0.0 while the bar
/// waits to animate in, 1.0 once settled).
pub fn view<'a, Message: 'a>(skill: &Skill, progress: f32) -> Element<'a, Message> {
    let header = Row::new()
        .push(
            text(skill.name)
                .size(typography::BODY)
                .style(styles::text::secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            text(format!("{}%", skill.level))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        );

    let (filled, empty) = portions(fill_ratio(skill.level) * progress);

    let mut track = Row::new().height(Length::Fixed(sizing::SKILL_TRACK));
    if filled > 0 {
        track = track.push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::skill_fill),
        );
    }
    if empty > 0 {
        track = track.push(Space::new().width(Length::FillPortion(empty)));
    }

    Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(
            container(track)
                .width(Length::Fill)
                .style(styles::container::skill_track),
        )
        .into()
}
