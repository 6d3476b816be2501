use std::cell::RefCell;
use std::rc::Rc;

use gamekit_values::{LayeredValue, SpringF32};

#[test]
fn independent_systems_layer_a_time_scale() {
    let mut time_scale = LayeredValue::new(1.0_f32);

    // A powerup slows the game; the pause menu freezes it outright and must
    // win no matter when it is opened.
    let slow_motion = time_scale.add_layer_with_priority(0.3, 0);
    let pause = time_scale.add_layer_with_priority(0.0, 10);
    assert_eq!(*time_scale.get(), 0.0);
    assert!(time_scale.is_top(pause));

    // Another powerup stacked while paused stays below the menu.
    let haste = time_scale.add_layer_with_priority(2.0, 0);
    assert_eq!(*time_scale.get(), 0.0);
    assert!(!time_scale.is_top(haste));

    time_scale.remove_layer(pause);
    assert_eq!(*time_scale.get(), 2.0);

    time_scale.remove_layer(haste);
    assert_eq!(*time_scale.get(), 0.3);

    time_scale.remove_layer(slow_motion);
    assert_eq!(*time_scale.get(), 1.0);
    assert_eq!(time_scale.override_count(), 0);
}

#[test]
fn listener_drives_a_spring_target() {
    let target = Rc::new(RefCell::new(0.0_f32));
    let sink = Rc::clone(&target);
    let mut zoom = LayeredValue::with_listener(1.0_f32, move |current: &f32| {
        *sink.borrow_mut() = *current;
    });

    let mut spring = SpringF32::new(40.0, 8.0);
    spring.current = 1.0;
    spring.target = 1.0;

    // Aiming down sights overrides the zoom level; the spring eases the
    // camera toward whatever the stack currently reports.
    let aim = zoom.add_layer(3.0);
    for _ in 0..2_000 {
        spring.target = *target.borrow();
        spring.step(1.0 / 60.0);
    }
    assert!((spring.current - 3.0).abs() < 1e-2);

    zoom.remove_layer(aim);
    for _ in 0..2_000 {
        spring.target = *target.borrow();
        spring.step(1.0 / 60.0);
    }
    assert!((spring.current - 1.0).abs() < 1e-2);
}
