// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the stored zoom and the wheel-zoom policy.

mod common;

use common::{FakeHost, wheel};
use grove_layout::SheetId;
use grove_viewport::zoom::{set_zoom_factor, set_zoom_factor_on_wheel, zoom_factor};
use grove_viewport::{Modifiers, TempKey, ViewportConfig};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn wheel_down_with_modifier_zooms_out_one_step() {
    let sheet = SheetId::from("s1");
    let cfg = ViewportConfig::default();
    let mut host = FakeHost::showing("s1");
    set_zoom_factor(&mut host, &sheet, 1.0);

    let zoom = set_zoom_factor_on_wheel(&mut host, &sheet, &wheel(3.0, Modifiers::CTRL), &cfg);

    assert!(close(zoom.unwrap(), 0.9), "{zoom:?}");
    assert!(close(zoom_factor(&host, &sheet, &cfg), 0.9));
}

#[test]
fn wheel_up_zooms_in() {
    let sheet = SheetId::from("s1");
    let cfg = ViewportConfig::default();
    let mut host = FakeHost::showing("s1");

    let zoom = set_zoom_factor_on_wheel(&mut host, &sheet, &wheel(-1.0, Modifiers::CTRL), &cfg);
    assert!(close(zoom.unwrap(), 1.1), "{zoom:?}");

    // A zero delta counts as "not down".
    let zoom = set_zoom_factor_on_wheel(&mut host, &sheet, &wheel(0.0, Modifiers::CTRL), &cfg);
    assert!(close(zoom.unwrap(), 1.2), "{zoom:?}");
}

#[test]
fn plain_wheel_leaves_zoom_alone() {
    let sheet = SheetId::from("s1");
    let cfg = ViewportConfig::default();
    let mut host = FakeHost::showing("s1");

    assert_eq!(
        set_zoom_factor_on_wheel(&mut host, &sheet, &wheel(1.0, Modifiers::SHIFT), &cfg),
        None
    );
    assert_eq!(host.store.get(&sheet, TempKey::ZoomFactor), None);
}

#[test]
fn zoom_stays_within_limits_over_any_sequence() {
    let sheet = SheetId::from("s1");
    let cfg = ViewportConfig::default();
    let mut host = FakeHost::showing("s1");

    let deltas = [1.0, 1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0];
    for delta in deltas.iter().cycle().take(200) {
        let zoom =
            set_zoom_factor_on_wheel(&mut host, &sheet, &wheel(*delta, Modifiers::CTRL), &cfg)
                .unwrap();
        assert!((cfg.min_zoom..=cfg.max_zoom).contains(&zoom), "{zoom}");
    }

    for _ in 0..50 {
        set_zoom_factor_on_wheel(&mut host, &sheet, &wheel(-1.0, Modifiers::CTRL), &cfg);
    }
    assert_eq!(zoom_factor(&host, &sheet, &cfg), 4.0);

    for _ in 0..50 {
        set_zoom_factor_on_wheel(&mut host, &sheet, &wheel(1.0, Modifiers::CTRL), &cfg);
    }
    assert_eq!(zoom_factor(&host, &sheet, &cfg), 0.5);
}

#[test]
fn unusable_stored_zoom_falls_back_to_default() {
    let sheet = SheetId::from("s1");
    let cfg = ViewportConfig::default();
    let mut host = FakeHost::showing("s1");

    assert_eq!(zoom_factor(&host, &sheet, &cfg), 1.0);
    for bad in [0.0, -2.0, f64::NAN] {
        set_zoom_factor(&mut host, &sheet, bad);
        assert_eq!(zoom_factor(&host, &sheet, &cfg), 1.0, "{bad}");
    }
    set_zoom_factor(&mut host, &sheet, 2.5);
    assert_eq!(zoom_factor(&host, &sheet, &cfg), 2.5);
}

#[test]
fn zoom_is_per_sheet() {
    let cfg = ViewportConfig::default();
    let mut host = FakeHost::showing("s1");
    set_zoom_factor(&mut host, &"s1".into(), 2.0);
    assert_eq!(zoom_factor(&host, &"s2".into(), &cfg), 1.0);
}
