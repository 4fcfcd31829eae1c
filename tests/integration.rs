// SPDX-License-Identifier: MPL-2.0
use cyber_portfolio::app::config::{self, Config};
use cyber_portfolio::app::router::{Change, Router};
use cyber_portfolio::app::section::{Section, NAVIGATION_ITEMS};
use cyber_portfolio::app::shell::UiState;
use cyber_portfolio::app::{App, Flags, Message, Shortcut};
use cyber_portfolio::i18n::fluent::I18n;
use cyber_portfolio::ui::animation::{Phase, Presence};
use cyber_portfolio::ui::navbar;
use cyber_portfolio::ui::widgets::skill_bar;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn every_navigation_id_selects_its_section() {
    for item in NAVIGATION_ITEMS {
        let mut router = Router::default();
        let change = router.set_active_section(item.id);
        assert_eq!(router.active(), item.section);
        if item.section == Section::Home {
            assert_eq!(change, Change::Unchanged);
        } else {
            assert_eq!(
                change,
                Change::Switched {
                    from: Section::Home,
                    to: item.section
                }
            );
        }
    }
}

#[test]
fn unknown_id_keeps_home() {
    let mut router = Router::default();
    assert_eq!(router.set_active_section("about"), Change::Rejected);
    assert_eq!(router.active(), Section::Home);
}

#[test]
fn any_section_reaches_any_other_in_one_step() {
    for from in Section::ALL {
        for to in Section::ALL {
            let mut router = Router::new(from);
            router.select(to);
            assert_eq!(router.active(), to);
        }
    }
}

#[test]
fn skill_bar_fill_matches_level() {
    assert_eq!(skill_bar::fill_ratio(0), 0.0);
    assert!((skill_bar::fill_ratio(70) - 0.7).abs() < f32::EPSILON);
    assert_eq!(skill_bar::fill_ratio(100), 1.0);
}

#[test]
fn scroll_to_top_visibility_follows_threshold() {
    let mut shell = UiState::default();
    shell.on_scroll(400.0);
    assert!(!shell.show_scroll_top());
    shell.on_scroll(401.0);
    assert!(shell.show_scroll_top());
    shell.scroll_to_top();
    assert_eq!(shell.scroll_offset(), 0.0);
    assert!(!shell.show_scroll_top());
}

#[test]
fn presence_waits_for_exit_before_entering() {
    let t0 = Instant::now();
    let mut presence = Presence::new(Section::Home, true, t0);
    presence.tick(t0 + Duration::from_secs(2));
    assert_eq!(presence.phase(), Phase::Idle);

    let start = t0 + Duration::from_secs(3);
    presence.show(Section::Projects, start);
    assert_eq!(presence.mounted(), Section::Home);
    assert_eq!(presence.pending(), Some(Section::Projects));

    presence.tick(start + Duration::from_millis(150));
    assert_eq!(presence.mounted(), Section::Home);

    presence.tick(start + Duration::from_millis(300));
    assert_eq!(presence.mounted(), Section::Projects);
    assert!(matches!(presence.phase(), Phase::Entering { .. }));
}

#[test]
fn app_walks_through_sections_with_keyboard() {
    let flags = Flags {
        no_animations: true,
        lang: Some("en-US".to_string()),
        ..Flags::default()
    };
    let mut app = App::from_config(
        &flags,
        &Config::default(),
        None,
        Path::new("missing-assets"),
        Instant::now(),
    );

    for section in Section::ALL {
        let _ = app.update(Message::Shortcut(Shortcut::Select(section)));
        assert_eq!(app.active_section(), section);
        assert_eq!(app.mounted_section(), section);
    }
}

#[test]
fn menu_state_survives_desktop_navigation_visibility() {
    let mut app = App::from_config(
        &Flags {
            no_animations: true,
            ..Flags::default()
        },
        &Config::default(),
        None,
        Path::new("missing-assets"),
        Instant::now(),
    );

    let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
    assert!(app.shell().menu_open());
    let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::Skills)));
    assert!(!app.shell().menu_open());
}

#[test]
fn language_follows_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("Failed to write config");
    let english = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &english).current_locale().to_string(), "en-US");

    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("Failed to write config");
    let french = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &french).current_locale().to_string(), "fr");
}

#[test]
fn config_file_drives_startup_state() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"light\"\n\n[display]\nanimations = false\nscroll_top_threshold = 50.0\n",
    )
    .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut app = App::from_config(
        &Flags::default(),
        &config,
        warning,
        Path::new("missing-assets"),
        Instant::now(),
    );
    assert_eq!(app.theme(), iced::Theme::Light);

    let _ = app.update(Message::Scrolled(60.0));
    assert!(app.shell().show_scroll_top());
}
