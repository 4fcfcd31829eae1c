// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the header, the section
//! router and the content views.
//!
//! The `App` struct wires together navigation, presence transitions, the
//! shell's presentation state, localization and notifications, and
//! translates messages into side effects like scroll operations or opening
//! links in the system browser.

pub mod config;
mod message;
pub mod paths;
pub mod router;
pub mod section;
pub mod shell;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};
pub use update::CONTENT_SCROLLABLE_ID;

use crate::content::PROFILES;
use crate::i18n::fluent::I18n;
use crate::ui::animation::Presence;
use crate::ui::notifications;
use crate::ui::theming;
use chrono::Datelike;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use router::{Change, Router};
use section::Section;
use shell::UiState;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    router: Router,
    presence: Presence<Section>,
    shell: UiState,
    notifications: notifications::Manager,
    /// Profile icon files aligned with `PROFILES`; missing files are `None`.
    profile_icons: Vec<Option<PathBuf>>,
    window_width: f32,
    /// Year printed in the home footer.
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.router.active())
            .field("mounted", &self.presence.mounted())
            .field("shell", &self.shell)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the config file and builds the initial state from it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::from_config(
            &flags,
            &config,
            config_warning,
            &paths::get_assets_dir(),
            Instant::now(),
        );
        (app, Task::none())
    }

    /// Builds the initial state from already loaded settings.
    ///
    /// An unknown `--section` id leaves the router on home.
    pub fn from_config(
        flags: &Flags,
        config: &Config,
        config_warning: Option<String>,
        assets_dir: &Path,
        now: Instant,
    ) -> Self {
        let i18n = I18n::new(flags.lang.clone(), config);

        let mut router = Router::default();
        if let Some(id) = flags.section.as_deref() {
            if router.set_active_section(id) == Change::Rejected {
                tracing::warn!(id, "unknown start section, showing home");
            }
        }

        let animations = config.display.animations && !flags.no_animations;
        let presence = Presence::new(router.active(), animations, now);

        let mut shell = UiState::new(
            config.general.theme_mode.resolved(),
            config.display.effective_scroll_top_threshold(),
        );
        // Replaced by the real size once the window reports `Opened`.
        shell.set_window_width(config::DEFAULT_WINDOW_WIDTH);

        let profile_icons = PROFILES
            .iter()
            .map(|profile| paths::resolve_asset(assets_dir, profile.icon))
            .collect();

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(&key));
        }

        tracing::info!(
            section = router.active().id(),
            locale = %i18n.current_locale(),
            animations,
            "portfolio started"
        );

        Self {
            i18n,
            router,
            presence,
            shell,
            notifications,
            profile_icons,
            window_width: config::DEFAULT_WINDOW_WIDTH,
            year: chrono::Local::now().year(),
        }
    }

    /// The section selected by the user.
    #[must_use]
    pub fn active_section(&self) -> Section {
        self.router.active()
    }

    /// The section currently on screen.
    #[must_use]
    pub fn mounted_section(&self) -> Section {
        self.presence.mounted()
    }

    #[must_use]
    pub fn shell(&self) -> &UiState {
        &self.shell
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn profile_icons(&self) -> &[Option<PathBuf>] {
        &self.profile_icons
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let section = self.i18n.tr(self.router.active().label_key());
        format!("{section} - {app_name}")
    }

    pub fn theme(&self) -> Theme {
        theming::iced_theme(self.shell.theme_mode())
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(self.presence.is_animating());
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([event_sub, frame_sub, tick_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            router: &mut self.router,
            presence: &mut self.presence,
            shell: &mut self.shell,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Section(section_message) => {
                update::handle_section_message(&mut ctx, section_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Scrolled(offset) => {
                ctx.shell.on_scroll(offset);
                Task::none()
            }
            Message::ScrollToTop => update::scroll_to_top(&mut ctx),
            Message::Frame(now) => update::handle_frame(&mut ctx, now),
            Message::Tick(now) => update::handle_notification_tick(&mut ctx, now),
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::WindowSized(size) => {
                ctx.shell.set_window_width(size.width);
                self.window_width = size.width;
                Task::none()
            }
            Message::LinkOpened { url, result } => {
                update::handle_link_opened(&mut ctx, url, result)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            active: self.router.active(),
            presence: &self.presence,
            shell: &self.shell,
            notifications: &self.notifications,
            profile_icons: &self.profile_icons,
            window_width: self.window_width,
            year: self.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;
    use crate::ui::theming::ThemeMode;
    use iced::Size;
    use std::time::Duration;
    use tempfile::tempdir;

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        config.display.animations = false;
        config
    }

    fn app_with(flags: Flags, config: &Config) -> App {
        App::from_config(&flags, config, None, Path::new("missing-assets"), Instant::now())
    }

    #[test]
    fn fresh_app_starts_on_home() {
        let app = app_with(Flags::default(), &quiet_config());
        assert_eq!(app.active_section(), Section::Home);
        assert_eq!(app.mounted_section(), Section::Home);
        assert!(!app.shell().menu_open());
        assert!(!app.shell().show_scroll_top());
    }

    #[test]
    fn start_section_flag_is_honoured() {
        let flags = Flags {
            section: Some("projects".to_string()),
            ..Flags::default()
        };
        let app = app_with(flags, &quiet_config());
        assert_eq!(app.active_section(), Section::Projects);
        assert_eq!(app.mounted_section(), Section::Projects);
    }

    #[test]
    fn unknown_start_section_falls_back_to_home() {
        let flags = Flags {
            section: Some("blog".to_string()),
            ..Flags::default()
        };
        let app = app_with(flags, &quiet_config());
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn no_animations_flag_overrides_config() {
        let flags = Flags {
            no_animations: true,
            ..Flags::default()
        };
        let app = app_with(flags, &Config::default());
        assert!(!app.presence.is_animating());
    }

    #[test]
    fn every_navigation_item_selects_its_section() {
        let mut app = app_with(Flags::default(), &quiet_config());
        for section in Section::ALL {
            let _ = app.update(Message::Navbar(navbar::Message::Navigate(section)));
            assert_eq!(app.active_section(), section);
            assert_eq!(app.mounted_section(), section);
        }
    }

    #[test]
    fn wait_mode_swaps_after_exit() {
        let t0 = Instant::now();
        let mut app = App::from_config(
            &Flags::default(),
            &Config::default(),
            None,
            Path::new("missing-assets"),
            t0,
        );
        let _ = app.update(Message::Frame(t0 + Duration::from_secs(2)));
        assert!(!app.presence.is_animating());

        let _ = app.update(Message::Shortcut(Shortcut::Select(Section::Contact)));
        assert_eq!(app.active_section(), Section::Contact);
        assert_eq!(app.mounted_section(), Section::Home);
        assert!(app.presence.is_animating());
    }

    #[test]
    fn scroll_messages_toggle_button() {
        let mut app = app_with(Flags::default(), &quiet_config());
        let _ = app.update(Message::Scrolled(401.0));
        assert!(app.shell().show_scroll_top());
        let _ = app.update(Message::ScrollToTop);
        assert!(!app.shell().show_scroll_top());
        assert_eq!(app.shell().scroll_offset(), 0.0);
    }

    #[test]
    fn configured_threshold_is_used() {
        let mut config = quiet_config();
        config.display.scroll_top_threshold = 100.0;
        let mut app = app_with(Flags::default(), &config);
        let _ = app.update(Message::Scrolled(150.0));
        assert!(app.shell().show_scroll_top());
    }

    #[test]
    fn resize_switches_compact_layout() {
        let mut app = app_with(Flags::default(), &quiet_config());
        assert!(!app.shell().compact_layout());
        let _ = app.update(Message::WindowSized(Size::new(600.0, 800.0)));
        assert!(app.shell().compact_layout());
    }

    #[test]
    fn theme_toggle_changes_theme_only() {
        let mut config = quiet_config();
        config.general.theme_mode = ThemeMode::Dark;
        let mut app = app_with(Flags::default(), &config);
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::Skills)));

        assert_eq!(app.theme(), Theme::Dark);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.active_section(), Section::Skills);
    }

    #[test]
    fn config_warning_becomes_toast() {
        let app = App::from_config(
            &Flags::default(),
            &quiet_config(),
            Some("notification-config-load-error".to_string()),
            Path::new("missing-assets"),
            Instant::now(),
        );
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn missing_profile_icons_are_omitted() {
        let app = app_with(Flags::default(), &quiet_config());
        assert_eq!(app.profile_icons().len(), PROFILES.len());
        assert!(app.profile_icons().iter().all(Option::is_none));
    }

    #[test]
    fn present_profile_icons_are_resolved() {
        let dir = tempdir().expect("temp dir");
        let first = PROFILES[0].icon;
        let path = dir.path().join(first);
        std::fs::create_dir_all(path.parent().expect("icon parent")).expect("icon dir");
        std::fs::write(&path, b"icon").expect("icon file");

        let app = App::from_config(
            &Flags::default(),
            &quiet_config(),
            None,
            dir.path(),
            Instant::now(),
        );
        assert_eq!(app.profile_icons()[0].as_deref(), Some(path.as_path()));
    }

    #[test]
    fn title_names_active_section() {
        let mut app = app_with(Flags::default(), &quiet_config());
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(
            Section::Certificates,
        )));
        assert!(app.title().starts_with("Certificates"));
    }
}
