//! Property tests for the temperature-to-angle map.

use proptest::prelude::*;
use thermogauge::config::{FaceConfig, RangeConfig};
use thermogauge::Dial;

fn default_dial() -> Dial {
    Dial::new((20, 40), &FaceConfig::default(), &RangeConfig::default())
}

#[test]
fn sweep_endpoints() {
    let dial = default_dial();
    assert!((dial.angle_of(15.0) - -150.0).abs() < 1e-9);
    assert!((dial.angle_of(30.0) - 150.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn angle_is_monotonic(a in 15.0f64..=30.0, b in 15.0f64..=30.0) {
        let dial = default_dial();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(dial.angle_of(lo) <= dial.angle_of(hi));
    }

    #[test]
    fn angle_stays_inside_sweep(t in 15.0f64..=30.0) {
        let dial = default_dial();
        let angle = dial.angle_of(t);
        prop_assert!((-150.0..=150.0).contains(&angle));
    }

    #[test]
    fn points_stay_on_their_radius(t in 15.0f64..=30.0, r in 1.0f64..=100.0) {
        let dial = default_dial();
        let (cx, cy) = dial.center();
        let (x, y) = dial.point_at(r, dial.angle_of(t));
        let dist = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
        prop_assert!((dist - r).abs() < 1e-6);
    }
}
