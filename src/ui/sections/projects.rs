// SPDX-License-Identifier: MPL-2.0
//! Projects section: one card per project with a repository link.

use super::{card, card_title, chips, grid, heading, staggered, CardId, Message, ViewContext};
use crate::app::section::Section;
use crate::content::{Project, PROJECTS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{alignment, Element, Length, Padding};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| project_card(ctx, index, project))
        .collect();

    let columns = if ctx.compact {
        1
    } else if ctx.wide {
        3
    } else {
        2
    };

    Column::new()
        .spacing(spacing::XL)
        .push(staggered(ctx, 0, heading(ctx.i18n.tr("projects-title"))))
        .push(grid(cards, columns))
        .into()
}

fn project_card<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    project: &'static Project,
) -> Element<'a, Message> {
    let badge = container(text(project.kind).size(typography::BODY_SM))
        .padding(Padding::from([spacing::XXS, spacing::SM]))
        .style(styles::container::chip);

    let link = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::github(),
                sizing::ICON_MD,
                iced::Color::WHITE,
            ))
            .push(text(ctx.i18n.tr("projects-view-on-github"))),
    )
    .padding(Padding::from([spacing::XS, spacing::MD]))
    .style(styles::button::primary)
    .on_press(Message::OpenLink(project.repository_url));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(card_title(project.title))
        .push(Row::new().push(badge))
        .push(text(project.description).style(styles::text::secondary))
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(chips(project.technologies))
        .push(Space::new().height(Length::Fixed(spacing::XS)))
        .push(link);

    card(ctx, CardId::new(Section::Projects, index), index + 1, body)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{context, settled};
    use super::*;
    use crate::i18n::fluent::I18n;
    use std::path::PathBuf;

    #[test]
    fn projects_render_in_every_layout() {
        let i18n = I18n::default();
        let presence = settled(Section::Projects);
        let icons: Vec<Option<PathBuf>> = Vec::new();

        for (compact, wide) in [(true, false), (false, false), (false, true)] {
            let mut ctx = context(&i18n, &presence, &icons);
            ctx.compact = compact;
            ctx.wide = wide;
            let _element = view(&ctx);
        }
    }

    #[test]
    fn hovered_project_card_renders() {
        let i18n = I18n::default();
        let presence = settled(Section::Projects);
        let icons: Vec<Option<PathBuf>> = Vec::new();
        let mut ctx = context(&i18n, &presence, &icons);
        ctx.hovered_card = Some(CardId::new(Section::Projects, 2));
        let _element = view(&ctx);
    }

    #[test]
    fn project_without_technologies_renders() {
        static BARE: Project = Project {
            title: "Bare",
            kind: "Solo Project",
            description: "",
            technologies: &[],
            repository_url: "https://github.com/example/bare",
        };
        let i18n = I18n::default();
        let presence = settled(Section::Projects);
        let icons: Vec<Option<PathBuf>> = Vec::new();
        let ctx = context(&i18n, &presence, &icons);
        let _element = project_card(&ctx, 0, &BARE);
    }
}
