// SPDX-License-Identifier: MPL-2.0
//! Certifications section.

use super::{card, card_title, chips, grid, heading, staggered, two_columns, CardId, Message, ViewContext};
use crate::app::section::Section;
use crate::content::{Certificate, CERTIFICATES};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Row, Space};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = CERTIFICATES
        .iter()
        .enumerate()
        .map(|(index, certificate)| certificate_card(ctx, index, certificate))
        .collect();

    Column::new()
        .spacing(spacing::XL)
        .push(staggered(
            ctx,
            0,
            heading(ctx.i18n.tr("certificates-title")),
        ))
        .push(grid(cards, two_columns(ctx)))
        .into()
}

fn certificate_card<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    certificate: &'static Certificate,
) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(alignment::Vertical::Top)
        .push(card_title(certificate.name))
        .push(Space::new().width(Length::Fill))
        .push(
            text(certificate.date)
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        );

    let issuer = ctx
        .i18n
        .tr_with_args("certificates-issuer", &[("issuer", certificate.issuer)]);

    let body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(text(issuer).style(styles::text::secondary))
        .push(text(certificate.description).style(styles::text::secondary))
        .push(chips(certificate.skills));

    card(ctx, CardId::new(Section::Certificates, index), index + 1, body)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{context, settled};
    use super::*;
    use crate::i18n::fluent::I18n;
    use std::path::PathBuf;

    #[test]
    fn certificates_render() {
        let i18n = I18n::default();
        let presence = settled(Section::Certificates);
        let icons: Vec<Option<PathBuf>> = Vec::new();
        let _element = view(&context(&i18n, &presence, &icons));
    }

    #[test]
    fn issuer_line_names_issuer() {
        let i18n = I18n::new(Some("en-US".to_string()), &Default::default());
        let line = i18n.tr_with_args("certificates-issuer", &[("issuer", "eLearnSecurity")]);
        assert_eq!(line, "Issuer: eLearnSecurity");
    }
}
