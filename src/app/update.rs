// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! The router changes immediately on every navigation request. The presence
//! layer then plays the exit and enter transitions on its own clock, and the
//! content is scrolled back to the top when the newly mounted section
//! replaces the old one.

use super::message::{Message, Shortcut};
use super::router::{Change, Router};
use super::section::Section;
use super::shell::UiState;
use crate::error::{Error, LinkError, Result};
use crate::links;
use crate::ui::animation::Presence;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::sections;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

/// Id of the scrollable wrapping the section content.
pub const CONTENT_SCROLLABLE_ID: &str = "content";

/// Mutable view over the parts of `App` that message handlers touch.
pub struct UpdateContext<'a> {
    pub router: &'a mut Router,
    pub presence: &'a mut Presence<Section>,
    pub shell: &'a mut UiState,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::ToggleMenu => {
            ctx.shell.toggle_menu();
            Task::none()
        }
        NavbarEvent::CloseMenu => {
            ctx.shell.close_menu();
            Task::none()
        }
        NavbarEvent::Navigate(section) => {
            ctx.shell.close_menu();
            navigate(ctx, section, Instant::now())
        }
        NavbarEvent::ToggleTheme => {
            ctx.shell.toggle_theme();
            Task::none()
        }
    }
}

pub fn handle_section_message(
    ctx: &mut UpdateContext<'_>,
    message: sections::Message,
) -> Task<Message> {
    match message {
        sections::Message::CardEntered(card) => {
            ctx.shell.set_hovered(card);
            Task::none()
        }
        sections::Message::CardExited(card) => {
            ctx.shell.clear_hovered(card);
            Task::none()
        }
        sections::Message::OpenLink(url) => open_link(url),
    }
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::Select(section) => {
            ctx.shell.close_menu();
            navigate(ctx, section, Instant::now())
        }
        Shortcut::ScrollToTop => scroll_to_top(ctx),
        Shortcut::CloseMenu => {
            ctx.shell.close_menu();
            Task::none()
        }
    }
}

/// Selects `section` and starts the presence transition towards it.
///
/// Re-selecting the active section does nothing.
pub fn navigate(ctx: &mut UpdateContext<'_>, section: Section, now: Instant) -> Task<Message> {
    match ctx.router.select(section) {
        Change::Switched { to, .. } => {
            let before = ctx.presence.mounted();
            ctx.presence.show(to, now);
            after_presence_change(ctx, before)
        }
        Change::Unchanged | Change::Rejected => Task::none(),
    }
}

/// Advances the presence transition to `now`.
pub fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let before = ctx.presence.mounted();
    ctx.presence.tick(now);
    after_presence_change(ctx, before)
}

pub fn handle_notification_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    Task::none()
}

pub fn scroll_to_top(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.shell.scroll_to_top();
    snap_content_to_top()
}

pub fn handle_link_opened(
    ctx: &mut UpdateContext<'_>,
    url: &'static str,
    result: Result<()>,
) -> Task<Message> {
    if let Err(err) = result {
        tracing::warn!(url, error = %err, "failed to open link");
        let key = match &err {
            Error::Link(link) => link.i18n_key(),
            Error::Io(_) | Error::Config(_) => "notification-link-open-error",
        };
        ctx.notifications
            .push(Notification::warning(key).with_arg("url", url));
    }
    Task::none()
}

/// Hands `url` to the system browser on a blocking worker.
pub fn open_link(url: &'static str) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || links::open(url))
                .await
                .map_err(|e| Error::from(LinkError::LaunchFailed(e.to_string())))?
        },
        move |result| Message::LinkOpened { url, result },
    )
}

/// Resets per-section presentation state once a new section is mounted.
fn after_presence_change(ctx: &mut UpdateContext<'_>, before: Section) -> Task<Message> {
    if ctx.presence.mounted() == before {
        return Task::none();
    }
    ctx.shell.reset_hover();
    scroll_to_top(ctx)
}

fn snap_content_to_top() -> Task<Message> {
    operation::snap_to(
        Id::new(CONTENT_SCROLLABLE_ID),
        RelativeOffset { x: 0.0, y: 0.0 },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::sections::CardId;
    use std::time::Duration;

    struct Fixture {
        router: Router,
        presence: Presence<Section>,
        shell: UiState,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new(animations: bool, now: Instant) -> Self {
            Self {
                router: Router::default(),
                presence: Presence::new(Section::Home, animations, now),
                shell: UiState::default(),
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                router: &mut self.router,
                presence: &mut self.presence,
                shell: &mut self.shell,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn navigate_without_animations_mounts_immediately() {
        let now = Instant::now();
        let mut fixture = Fixture::new(false, now);
        fixture.shell.on_scroll(900.0);

        let _ = navigate(&mut fixture.ctx(), Section::Contact, now);

        assert_eq!(fixture.router.active(), Section::Contact);
        assert_eq!(fixture.presence.mounted(), Section::Contact);
        assert!(!fixture.shell.show_scroll_top());
    }

    #[test]
    fn navigate_with_animations_keeps_old_section_until_exit_ends() {
        let t0 = Instant::now();
        let mut fixture = Fixture::new(true, t0);
        let _ = handle_frame(&mut fixture.ctx(), t0 + Duration::from_secs(2));
        fixture.shell.on_scroll(900.0);

        let start = t0 + Duration::from_secs(3);
        let _ = navigate(&mut fixture.ctx(), Section::Skills, start);
        assert_eq!(fixture.router.active(), Section::Skills);
        assert_eq!(fixture.presence.mounted(), Section::Home);
        assert!(fixture.shell.show_scroll_top());

        let _ = handle_frame(&mut fixture.ctx(), start + Duration::from_millis(400));
        assert_eq!(fixture.presence.mounted(), Section::Skills);
        assert!(!fixture.shell.show_scroll_top());
    }

    #[test]
    fn reselecting_active_section_is_a_no_op() {
        let now = Instant::now();
        let mut fixture = Fixture::new(false, now);
        fixture.shell.on_scroll(900.0);
        let _ = navigate(&mut fixture.ctx(), Section::Home, now);
        assert!(fixture.shell.show_scroll_top());
        assert!(!fixture.presence.is_animating());
    }

    #[test]
    fn navbar_navigation_closes_menu() {
        let mut fixture = Fixture::new(false, Instant::now());
        fixture.shell.toggle_menu();
        let _ = handle_navbar_message(
            &mut fixture.ctx(),
            navbar::Message::Navigate(Section::Projects),
        );
        assert!(!fixture.shell.menu_open());
        assert_eq!(fixture.router.active(), Section::Projects);
    }

    #[test]
    fn navbar_menu_events_go_through_shell_setters() {
        let mut fixture = Fixture::new(false, Instant::now());
        let _ = handle_navbar_message(&mut fixture.ctx(), navbar::Message::ToggleMenu);
        assert!(fixture.shell.menu_open());

        let _ = handle_navbar_message(&mut fixture.ctx(), navbar::Message::ToggleTheme);
        assert!(fixture.shell.menu_open());

        let _ = handle_navbar_message(&mut fixture.ctx(), navbar::Message::CloseMenu);
        assert!(!fixture.shell.menu_open());
        let _ = handle_navbar_message(&mut fixture.ctx(), navbar::Message::CloseMenu);
        assert!(!fixture.shell.menu_open());
    }

    #[test]
    fn theme_toggle_leaves_section_untouched() {
        let mut fixture = Fixture::new(false, Instant::now());
        let _ = navigate(&mut fixture.ctx(), Section::Certificates, Instant::now());
        let before = fixture.shell.theme_mode();

        let _ = handle_navbar_message(&mut fixture.ctx(), navbar::Message::ToggleTheme);

        assert_ne!(fixture.shell.theme_mode(), before);
        assert_eq!(fixture.router.active(), Section::Certificates);
        assert_eq!(fixture.presence.mounted(), Section::Certificates);
    }

    #[test]
    fn shortcuts_drive_shell() {
        let mut fixture = Fixture::new(false, Instant::now());
        fixture.shell.toggle_menu();
        let _ = handle_shortcut(&mut fixture.ctx(), Shortcut::CloseMenu);
        assert!(!fixture.shell.menu_open());

        let _ = handle_shortcut(&mut fixture.ctx(), Shortcut::Select(Section::Contact));
        assert_eq!(fixture.router.active(), Section::Contact);

        fixture.shell.on_scroll(1200.0);
        let _ = handle_shortcut(&mut fixture.ctx(), Shortcut::ScrollToTop);
        assert_eq!(fixture.shell.scroll_offset(), 0.0);
    }

    #[test]
    fn hover_is_cleared_when_section_changes() {
        let mut fixture = Fixture::new(false, Instant::now());
        let card = CardId::new(Section::Home, 0);
        let _ = handle_section_message(
            &mut fixture.ctx(),
            sections::Message::CardEntered(card),
        );
        assert_eq!(fixture.shell.hovered_card(), Some(card));

        let _ = navigate(&mut fixture.ctx(), Section::Skills, Instant::now());
        assert!(fixture.shell.hovered_card().is_none());
    }

    #[test]
    fn failed_link_shows_warning() {
        let mut fixture = Fixture::new(false, Instant::now());
        let _ = handle_link_opened(
            &mut fixture.ctx(),
            "https://example.com",
            Err(LinkError::OpenerFailed(Some(1)).into()),
        );
        assert_eq!(fixture.notifications.visible_count(), 1);
        let shown = fixture.notifications.visible().next().expect("warning toast");
        assert_eq!(shown.message_key(), "notification-link-open-error");

        let _ = handle_link_opened(&mut fixture.ctx(), "https://example.com", Ok(()));
        assert_eq!(fixture.notifications.visible_count(), 1);
    }

    #[test]
    fn rejected_link_uses_unsupported_message() {
        let mut fixture = Fixture::new(false, Instant::now());
        let url = "ftp://example.com";
        let _ = handle_link_opened(&mut fixture.ctx(), url, links::open(url));

        let shown = fixture.notifications.visible().next().expect("warning toast");
        assert_eq!(shown.message_key(), "notification-link-unsupported");
    }
}
