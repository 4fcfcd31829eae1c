// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a header above a scrollable content column. The scroll-to-top
//! button and the toasts float above it in a stack.

use super::section::Section;
use super::shell::{self, UiState};
use super::update::CONTENT_SCROLLABLE_ID;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::animation::{AnimatedMount, FadeSlide, Presence};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::sections::{self, ViewContext as SectionViewContext};
use crate::ui::{icons, styles};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, tooltip, Column, Container, Id, Scrollable, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length,
};
use std::path::PathBuf;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Section,
    pub presence: &'a Presence<Section>,
    pub shell: &'a UiState,
    pub notifications: &'a notifications::Manager,
    pub profile_icons: &'a [Option<PathBuf>],
    pub window_width: f32,
    pub year: i32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let compact = ctx.shell.compact_layout();

    let header = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active: ctx.active,
        menu_open: ctx.shell.menu_open(),
        compact,
        is_dark: ctx.shell.theme_mode().is_dark(),
    })
    .map(Message::Navbar);

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header)
        .push(view_content(&ctx));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.shell.show_scroll_top() {
        layers = layers.push(view_scroll_top_button(ctx.i18n));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn view_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let compact = ctx.shell.compact_layout();

    let section_ctx = SectionViewContext {
        i18n: ctx.i18n,
        presence: ctx.presence,
        hovered_card: ctx.shell.hovered_card(),
        compact,
        wide: shell::is_wide_width(ctx.window_width),
        profile_icons: ctx.profile_icons,
        year: ctx.year,
    };

    let section = sections::view(ctx.presence.mounted(), &section_ctx).map(Message::Section);
    let animated = FadeSlide::default().mount(section, ctx.presence.frame());

    let padding = if compact { spacing::MD } else { spacing::XL };
    let column = Container::new(animated)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding(padding);

    Scrollable::new(Container::new(column).center_x(Length::Fill))
        .id(Id::new(CONTENT_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled(viewport.absolute_offset().y))
        .into()
}

fn view_scroll_top_button<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let arrow = button(icons::tinted(icons::arrow_up(), sizing::ICON_LG, Color::WHITE))
        .on_press(Message::ScrollToTop)
        .padding(spacing::SM)
        .style(styles::button::floating);

    let with_tooltip = tooltip(
        arrow,
        Text::new(i18n.tr("scroll-to-top")).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    Container::new(with_tooltip)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(spacing::XL)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Notification;
    use crate::ui::theming::ThemeMode;
    use std::time::Instant;

    fn render(shell: &UiState, manager: &notifications::Manager, width: f32) {
        let i18n = I18n::default();
        let presence = Presence::new(Section::Home, false, Instant::now());
        let icons: Vec<Option<PathBuf>> = Vec::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            active: Section::Home,
            presence: &presence,
            shell,
            notifications: manager,
            profile_icons: &icons,
            window_width: width,
            year: 2026,
        });
    }

    #[test]
    fn page_renders_on_desktop() {
        let shell = UiState::default();
        render(&shell, &notifications::Manager::new(), 1280.0);
    }

    #[test]
    fn page_renders_compact_with_menu_and_scroll_button() {
        let mut shell = UiState::new(ThemeMode::Light, 400.0);
        shell.set_window_width(500.0);
        shell.toggle_menu();
        shell.on_scroll(1000.0);
        render(&shell, &notifications::Manager::new(), 500.0);
    }

    #[test]
    fn page_renders_with_toasts() {
        let shell = UiState::default();
        let mut manager = notifications::Manager::new();
        manager.push(Notification::warning("notification-config-load-error"));
        render(&shell, &manager, 900.0);
    }

    #[test]
    fn every_section_renders_mid_transition() {
        let i18n = I18n::default();
        let shell = UiState::default();
        let manager = notifications::Manager::new();
        let icons: Vec<Option<PathBuf>> = Vec::new();
        let t0 = Instant::now();

        for section in Section::ALL {
            let presence = Presence::new(section, true, t0);
            let _element = view(ViewContext {
                i18n: &i18n,
                active: section,
                presence: &presence,
                shell: &shell,
                notifications: &manager,
                profile_icons: &icons,
                window_width: 1280.0,
                year: 2026,
            });
        }
    }
}
