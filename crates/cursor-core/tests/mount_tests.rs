mod common;

use common::FakeHost;
use cursor_core::{mount, CursorConfig, CursorError, Rect, TargetSpec};

const TARGETS: [&str; 3] = ["menu", "close", "share"];

fn specs() -> Vec<TargetSpec<&'static str>> {
    TARGETS.iter().map(|t| TargetSpec::solo(*t)).collect()
}

#[test]
fn mount_attaches_frame_window_and_three_listeners_per_target() {
    let host = FakeHost::new();
    let m = mount(&host, Some("cursor"), specs(), CursorConfig::default()).unwrap();
    assert_eq!(m.subscription_count(), 2 + 3 * TARGETS.len());
    assert_eq!(host.live_listeners(), m.subscription_count());
    assert_eq!(m.cursor().target_count(), TARGETS.len());
}

#[test]
fn unmount_releases_everything_and_stops_writes() {
    let host = FakeHost::new();
    for t in TARGETS {
        host.set_rect(t, Rect::new(0.0, 0.0, 10.0, 10.0));
    }
    let m = mount(&host, Some("cursor"), specs(), CursorConfig::default()).unwrap();

    host.pointer_move(50.0, 50.0);
    host.frame(1.0 / 60.0);
    assert_eq!(host.transform_writes(), 1);

    m.unmount();
    assert_eq!(host.live_listeners(), 0);

    host.pointer_move(80.0, 80.0);
    host.enter("menu", 5.0, 5.0);
    host.frames(3, 1.0 / 60.0);
    assert_eq!(host.transform_writes(), 1);
    assert_eq!(host.offset_writes("menu"), 0);
}

#[test]
fn dropping_the_handle_also_unmounts() {
    let host = FakeHost::new();
    {
        let _m = mount(&host, Some("cursor"), specs(), CursorConfig::default()).unwrap();
        assert!(host.live_listeners() > 0);
    }
    assert_eq!(host.live_listeners(), 0);
}

#[test]
fn missing_anchor_short_circuits_setup() {
    let host = FakeHost::new();
    let err = mount(&host, None, specs(), CursorConfig::default())
        .err()
        .unwrap();
    assert_eq!(err, CursorError::MissingAnchor);
    assert_eq!(host.live_listeners(), 0);
}

#[test]
fn invalid_config_short_circuits_setup() {
    let host = FakeHost::new();
    let config = CursorConfig {
        lerp_factor: 0.0,
        ..CursorConfig::default()
    };
    let err = mount(&host, Some("cursor"), specs(), config).err().unwrap();
    assert_eq!(err, CursorError::InvalidLerpFactor(0.0));
    assert_eq!(host.live_listeners(), 0);
}

#[test]
fn cursor_starts_off_screen_and_follows_pointer() {
    let host = FakeHost::new();
    let m = mount(&host, Some("cursor"), vec![], CursorConfig::default()).unwrap();

    host.frame(1.0 / 60.0);
    let t = host.last_transform().unwrap();
    assert_eq!((t.x, t.y), (-100.0, -100.0));
    assert_eq!((t.scale_x, t.scale_y), (1.0, 1.0));

    host.pointer_move(300.0, 200.0);
    host.frames(200, 1.0 / 60.0);
    let t = host.last_transform().unwrap();
    // the lerp lands exactly once it stops making progress
    assert_eq!((t.x, t.y), (300.0, 200.0));
    assert_eq!((t.scale_x, t.scale_y), (1.0, 1.0));
    assert!(!m.cursor().is_captured());
}

#[test]
fn one_transform_write_per_frame() {
    let host = FakeHost::new();
    let _m = mount(&host, Some("cursor"), specs(), CursorConfig::default()).unwrap();
    host.pointer_move(10.0, 10.0);
    host.pointer_move(20.0, 10.0);
    assert_eq!(host.transform_writes(), 0);
    host.frames(4, 1.0 / 60.0);
    assert_eq!(host.transform_writes(), 4);
}
