// SPDX-License-Identifier: MPL-2.0
//! Content section views.
//!
//! Each section is a pure function from the static content arrays to a
//! widget tree. Sections share one message type: hover tracking for cards
//! and requests to open outbound links.

pub mod certificates;
pub mod contact;
pub mod home;
pub mod projects;
pub mod skills;

use crate::app::section::Section;
use crate::i18n::fluent::I18n;
use crate::ui::animation::{AnimatedMount, FadeSlide, Presence};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, mouse_area, text, Column, Row, Text};
use iced::{Element, Length, Padding};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Identifies a hoverable card: the section it lives in and its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub section: Section,
    pub index: usize,
}

impl CardId {
    #[must_use]
    pub fn new(section: Section, index: usize) -> Self {
        Self { section, index }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    CardEntered(CardId),
    CardExited(CardId),
    OpenLink(&'static str),
}

/// Everything a section view needs besides the static content.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub presence: &'a Presence<Section>,
    pub hovered_card: Option<CardId>,
    /// Narrow window: cards stack in a single column.
    pub compact: bool,
    /// Wide window: project cards use three columns.
    pub wide: bool,
    /// Resolved profile icon files, aligned with [`crate::content::PROFILES`].
    pub profile_icons: &'a [Option<PathBuf>],
    /// Year printed in the home footer.
    pub year: i32,
}

/// Renders the section currently mounted by the presence layer.
pub fn view<'a>(section: Section, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match section {
        Section::Home => home::view(ctx),
        Section::Skills => skills::view(ctx),
        Section::Projects => projects::view(ctx),
        Section::Certificates => certificates::view(ctx),
        Section::Contact => contact::view(ctx),
    }
}

/// Section title in the brand color.
fn heading<'a>(label: String) -> Text<'a> {
    text(label)
        .size(typography::TITLE_LG)
        .style(styles::text::brand)
}

/// Card title.
fn card_title<'a>(label: impl ToString) -> Text<'a> {
    text(label.to_string())
        .size(typography::TITLE_MD)
        .style(styles::text::brand)
}

/// Wraps `content` in a hoverable card that enters in stagger slot `slot`.
fn card<'a>(
    ctx: &ViewContext<'a>,
    id: CardId,
    slot: usize,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let hovered = ctx.hovered_card == Some(id);

    let surface = container(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(hovered));

    let tracked = mouse_area(surface)
        .on_enter(Message::CardEntered(id))
        .on_exit(Message::CardExited(id));

    staggered(ctx, slot, tracked)
}

/// Applies the child enter transition for stagger slot `slot`.
fn staggered<'a>(
    ctx: &ViewContext<'a>,
    slot: usize,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    FadeSlide::default().mount(content.into(), ctx.presence.child_frame(slot))
}

/// Rounded tags laid out left to right, wrapping on overflow.
///
/// An empty list renders an empty region.
fn chips<'a>(items: &'static [&'static str]) -> Element<'a, Message> {
    let row = items.iter().fold(Row::new().spacing(spacing::XS), |row, item| {
        row.push(
            container(text(*item).size(typography::CAPTION))
                .padding(Padding::from([spacing::XXS, spacing::SM]))
                .style(styles::container::chip),
        )
    });

    row.wrap().vertical_spacing(spacing::XS).into()
}

/// Lays `cells` out in rows of `columns` equally wide cells.
fn grid<'a>(cells: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::LG);
    let mut filled = 0;

    for cell in cells {
        row = row.push(container(cell).width(Length::FillPortion(1)));
        filled += 1;
        if filled == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG);
            filled = 0;
        }
    }

    if filled > 0 {
        // Pad the last row so its cells keep the same width as the others.
        for _ in filled..columns {
            row = row.push(container(text("")).width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

/// Two columns on regular windows, one on compact ones.
fn two_columns(ctx: &ViewContext<'_>) -> usize {
    if ctx.compact {
        1
    } else {
        2
    }
}

/// One line of a bulleted list.
fn bullet<'a>(label: &'static str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(text("•").style(styles::text::brand))
        .push(text(label).style(styles::text::secondary))
        .into()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::time::Instant;

    /// Context with settled animations and no hovered card.
    pub fn context<'a>(
        i18n: &'a I18n,
        presence: &'a Presence<Section>,
        icons: &'a [Option<PathBuf>],
    ) -> ViewContext<'a> {
        ViewContext {
            i18n,
            presence,
            hovered_card: None,
            compact: false,
            wide: true,
            profile_icons: icons,
            year: 2026,
        }
    }

    pub fn settled(section: Section) -> Presence<Section> {
        Presence::new(section, false, Instant::now())
    }
}
