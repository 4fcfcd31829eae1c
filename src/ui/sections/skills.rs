// SPDX-License-Identifier: MPL-2.0
//! Skills section: two cards of skill bars.

use super::{card, card_title, grid, heading, staggered, two_columns, CardId, Message, ViewContext};
use crate::app::section::Section;
use crate::content::{Skill, TECHNICAL_SKILLS, TOOLS_AND_PLATFORMS};
use crate::ui::design_tokens::spacing;
use crate::ui::widgets::skill_bar;
use iced::widget::Column;
use iced::Element;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let technical = skill_card(
        ctx,
        0,
        ctx.i18n.tr("skills-technical-title"),
        TECHNICAL_SKILLS,
    );
    let tools = skill_card(
        ctx,
        1,
        ctx.i18n.tr("skills-tools-title"),
        TOOLS_AND_PLATFORMS,
    );

    Column::new()
        .spacing(spacing::XL)
        .push(staggered(ctx, 0, heading(ctx.i18n.tr("skills-title"))))
        .push(grid(vec![technical, tools], two_columns(ctx)))
        .into()
}

fn skill_card<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    title: String,
    skills: &'static [Skill],
) -> Element<'a, Message> {
    let progress = ctx.presence.fill_progress();

    let bars = skills
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, skill| {
            column.push(skill_bar::view(skill, progress))
        });

    card(
        ctx,
        CardId::new(Section::Skills, index),
        index + 1,
        Column::new()
            .spacing(spacing::LG)
            .push(card_title(title))
            .push(bars),
    )
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{context, settled};
    use super::*;
    use crate::i18n::fluent::I18n;
    use crate::ui::animation::Presence;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    #[test]
    fn skills_render_settled() {
        let i18n = I18n::default();
        let presence = settled(Section::Skills);
        let icons: Vec<Option<PathBuf>> = Vec::new();
        let _element = view(&context(&i18n, &presence, &icons));
    }

    #[test]
    fn skills_render_mid_fill() {
        let i18n = I18n::default();
        let t0 = Instant::now();
        let mut presence = Presence::new(Section::Skills, true, t0);
        presence.tick(t0 + Duration::from_millis(600));
        let icons: Vec<Option<PathBuf>> = Vec::new();
        let _element = view(&context(&i18n, &presence, &icons));
    }

    #[test]
    fn empty_skill_list_renders_empty_card() {
        let i18n = I18n::default();
        let presence = settled(Section::Skills);
        let icons: Vec<Option<PathBuf>> = Vec::new();
        let ctx = context(&i18n, &presence, &icons);
        let _element = skill_card(&ctx, 0, "Empty".to_string(), &[]);
    }
}
