// SPDX-License-Identifier: MPL-2.0
//! Fixed header with brand, section navigation and theme toggle.
//!
//! On regular windows every navigation item is a button in the header. On
//! compact windows the items move into a dropdown opened by a menu button.
//! The dropdown state is independent from which layout is shown.

use crate::app::section::{Section, NAVIGATION_ITEMS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, tooltip, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Font, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    pub menu_open: bool,
    pub compact: bool,
    pub is_dark: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Navigate(Section),
    ToggleMenu,
    CloseMenu,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ToggleMenu,
    CloseMenu,
    /// Choosing a section; the dropdown closes before navigating.
    Navigate(Section),
    ToggleTheme,
}

/// Process a header message and return the corresponding event.
///
/// The header owns no state, so every message becomes an event the
/// application applies to its shell.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleMenu => Event::ToggleMenu,
        Message::CloseMenu => Event::CloseMenu,
        Message::Navigate(section) => Event::Navigate(section),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the header bar, plus the dropdown when open in compact layout.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_bar(&ctx));

    if ctx.compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("header-brand"))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: iced::font::Weight::Bold,
            ..Font::default()
        })
        .style(styles::text::brand);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if !ctx.compact {
        for item in NAVIGATION_ITEMS {
            row = row.push(
                button(Text::new(ctx.i18n.tr(item.label_key)).size(typography::BODY))
                    .on_press(Message::Navigate(item.section))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::nav_item(item.section == ctx.active)),
            );
        }
    }

    row = row.push(build_theme_toggle(ctx));

    if ctx.compact {
        let (icon, label_key) = if ctx.menu_open {
            (icons::close(), "header-menu-close")
        } else {
            (icons::menu(), "header-menu-open")
        };
        row = row.push(icon_button(
            ctx,
            icon,
            label_key,
            Message::ToggleMenu,
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .style(styles::container::header)
        .into()
}

fn build_theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // The icon shows the mode the toggle switches to.
    if ctx.is_dark {
        icon_button(ctx, icons::sun(), "header-theme-light", Message::ToggleTheme)
    } else {
        icon_button(ctx, icons::moon(), "header-theme-dark", Message::ToggleTheme)
    }
}

fn icon_button<'a>(
    ctx: &ViewContext<'a>,
    icon: iced::widget::svg::Svg<'static>,
    label_key: &str,
    message: Message,
) -> Element<'a, Message> {
    let color = ColorScheme::for_dark(ctx.is_dark).text_primary;

    tooltip(
        button(icons::tinted(icon, sizing::ICON_MD, color))
            .on_press(message)
            .padding(spacing::XS)
            .style(styles::button::icon),
        Text::new(ctx.i18n.tr(label_key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = NAVIGATION_ITEMS
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, item| {
            column.push(
                button(
                    Text::new(ctx.i18n.tr(item.label_key))
                        .size(typography::BODY)
                        .align_x(Horizontal::Left),
                )
                .on_press(Message::Navigate(item.section))
                .padding([spacing::SM, spacing::MD])
                .width(Length::Fill)
                .style(styles::button::menu_item(item.section == ctx.active)),
            )
        });

    container(items)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::dropdown)
        .into()
}
