//! The temperature limit is process-wide, so this file holds a single test.

use alchemy_lab::support::temperature::{
    LimitAlreadySet, Temperature, set_upper_limit, upper_limit,
};

#[test]
fn configured_limit_caps_every_temperature() {
    set_upper_limit(500).unwrap();
    assert_eq!(upper_limit(), 500);
    assert_eq!(set_upper_limit(800), Err(LimitAlreadySet { current: 500 }));

    assert_eq!(Temperature::new(0, 900), Temperature::new(0, 500));
    assert_eq!(Temperature::from_magnitude(-1_000), Temperature::new(500, 0));

    let mut t = Temperature::new(0, 490);
    t.heat(100);
    assert_eq!(t.hotness(), 500);
    t.cool(1_200);
    assert_eq!(t.coldness(), 500);
    assert_eq!(t.hotness(), 0);
}
