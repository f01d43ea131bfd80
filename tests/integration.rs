// SPDX-License-Identifier: MPL-2.0
use iced_stories::config::{self, Config};
use iced_stories::i18n::fluent::I18n;
use iced_stories::media::{parse_manifest, Asset};
use iced_stories::ui::carousel::subcomponents::indicator::Phase;
use iced_stories::ui::carousel::{Effect, Message, Settings, State};
use iced_stories::ui::state::SlideDuration;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const SLIDE_WIDTH: f32 = 360.0;
const SLIDE_MS: u64 = 2_000;

fn build(assets: Vec<Asset>, t0: Instant) -> State {
    let settings = Settings {
        slide_duration: SlideDuration::from_millis(SLIDE_MS),
        ..Settings::default()
    };
    let (mut carousel, _loads) = State::new_at(assets, settings, t0);
    let _ = carousel.update_at(
        Message::Scrolled {
            offset: 0.0,
            viewport_width: SLIDE_WIDTH,
        },
        t0,
    );
    carousel
}

fn images(count: usize) -> Vec<Asset> {
    (0..count)
        .map(|i| Asset::image(format!("https://example.com/{i}.jpg")))
        .collect()
}

fn swipe_to(carousel: &mut State, index: usize, now: Instant) {
    let _ = carousel.update_at(
        Message::Scrolled {
            offset: index as f32 * SLIDE_WIDTH,
            viewport_width: SLIDE_WIDTH,
        },
        now,
    );
}

fn phases(carousel: &State) -> Vec<Phase> {
    carousel.indicators().iter().map(|i| i.phase()).collect()
}

/// Ticks at frame rate from `from` for `span`, returning every non-None effect.
fn play(carousel: &mut State, from: Instant, span: Duration) -> Vec<(Effect, usize)> {
    let mut effects = Vec::new();
    let frame = Duration::from_millis(16);
    let mut now = from;
    while now <= from + span {
        let (effect, _) = carousel.update_at(Message::Tick(now), now);
        if effect != Effect::None {
            effects.push((effect, carousel.current_index()));
        }
        let running = carousel
            .indicators()
            .iter()
            .filter(|i| i.is_running())
            .count();
        assert!(running <= 1, "more than one indicator running");
        now += frame;
    }
    effects
}

#[test]
fn three_images_play_through_and_finish_once() {
    let t0 = Instant::now();
    let mut carousel = build(images(3), t0);

    let effects = play(&mut carousel, t0, Duration::from_millis(SLIDE_MS * 5));
    assert_eq!(effects, vec![(Effect::Finished, 2)]);
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(phases(&carousel), vec![Phase::Complete; 3]);
}

#[test]
fn auto_play_keeps_running_indicator_at_current_index() {
    let t0 = Instant::now();
    let mut carousel = build(images(4), t0);

    for step in 0..3u64 {
        let now = t0 + Duration::from_millis(SLIDE_MS * step + SLIDE_MS / 2);
        let _ = carousel.update_at(Message::Tick(now), now);
        let running: Vec<usize> = carousel
            .indicators()
            .iter()
            .filter(|i| i.is_running())
            .map(|i| i.index())
            .collect();
        assert_eq!(running, vec![carousel.current_index()]);

        let done = t0 + Duration::from_millis(SLIDE_MS * (step + 1));
        let _ = carousel.update_at(Message::Tick(done), done);
        assert_eq!(carousel.current_index() as u64, step + 1);
    }
}

#[test]
fn forward_skip_completes_only_the_departing_indicator() {
    let t0 = Instant::now();
    let mut carousel = build(images(5), t0);
    swipe_to(&mut carousel, 1, t0);

    swipe_to(&mut carousel, 3, t0 + Duration::from_millis(500));
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.indicator(1).map(|i| i.phase()), Some(Phase::Complete));
    assert_eq!(carousel.indicator(2).map(|i| i.phase()), Some(Phase::Idle));
    assert!(carousel.indicator(3).is_some_and(|i| i.is_running()));
}

#[test]
fn backward_swipe_clears_departing_and_restarts_target() {
    let t0 = Instant::now();
    let mut carousel = build(images(3), t0);
    let t1 = t0 + Duration::from_millis(SLIDE_MS);
    let _ = carousel.update_at(Message::Tick(t1), t1);
    assert_eq!(carousel.current_index(), 1);

    swipe_to(&mut carousel, 0, t1 + Duration::from_millis(300));
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.indicator(1).map(|i| i.phase()), Some(Phase::Idle));
    assert!(carousel.indicator(0).is_some_and(|i| i.is_running()));
    assert_eq!(carousel.indicator(0).map(|i| i.value()), Some(0.0));
}

#[test]
fn programmatic_scroll_echo_changes_nothing() {
    let t0 = Instant::now();
    let mut carousel = build(images(3), t0);
    let t1 = t0 + Duration::from_millis(SLIDE_MS);
    let _ = carousel.update_at(Message::Tick(t1), t1);
    let before = phases(&carousel);

    swipe_to(&mut carousel, 1, t1);
    swipe_to(&mut carousel, 1, t1 + Duration::from_millis(16));
    assert_eq!(phases(&carousel), before);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn empty_carousel_never_reports() {
    let t0 = Instant::now();
    let mut carousel = build(Vec::new(), t0);
    let effects = play(&mut carousel, t0, Duration::from_secs(5));
    assert!(effects.is_empty());
    assert!(!carousel.needs_ticks());
}

#[test]
fn unsupported_slides_are_timed_like_images() {
    let t0 = Instant::now();
    let assets = vec![
        Asset::image("a.png"),
        Asset::new("clip.mp4", "video"),
        Asset::image("c.png"),
    ];
    let mut carousel = build(assets, t0);
    let effects = play(&mut carousel, t0, Duration::from_millis(SLIDE_MS * 4));
    assert_eq!(effects, vec![(Effect::Finished, 2)]);
}

#[test]
fn manifest_drives_slide_order() {
    let manifest = r#"
        [[asset]]
        uri = "first.png"
        type = "image"

        [[asset]]
        uri = "second.webm"
        type = "video"
    "#;
    let assets = parse_manifest(manifest).expect("manifest should parse");
    let carousel = build(assets, Instant::now());
    assert_eq!(carousel.len(), 2);
    assert_eq!(
        carousel.slide(0).map(|s| s.asset().uri.as_str()),
        Some("first.png")
    );
    assert!(carousel.slide(1).is_some_and(|s| !s.asset().kind.is_supported()));
}

#[test]
fn configured_duration_reaches_indicators() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut stored = Config::default();
    stored.playback.slide_duration_ms = Some(3_000);
    config::save_to_path(&stored, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config file");

    let t0 = Instant::now();
    let (mut carousel, _) = State::new_at(images(2), Settings::from_config(&loaded), t0);
    let almost = t0 + Duration::from_millis(2_900);
    let _ = carousel.update_at(Message::Tick(almost), almost);
    assert_eq!(carousel.current_index(), 0);

    let done = t0 + Duration::from_millis(3_000);
    let _ = carousel.update_at(Message::Tick(done), done);
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}
