use sense_hat_dummy::{AccelerationReading, Driver, OrientationReading};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_temperature_range() {
    init();
    let hat = Driver::new();
    for _ in 0..1000 {
        let value = hat.get_temperature();
        assert!((-20..130).contains(&value), "out of range: {value}");
    }
}

#[test]
fn test_humidity_range() {
    init();
    let hat = Driver::new();
    for _ in 0..1000 {
        let value = hat.get_humidity();
        assert!((0..98).contains(&value), "out of range: {value}");
    }
}

#[test]
fn test_pressure_range() {
    init();
    let hat = Driver::new();
    for _ in 0..1000 {
        let value = hat.get_pressure();
        assert!((100..200).contains(&value), "out of range: {value}");
    }
}

#[test]
fn test_accelerometer_axis_ranges() {
    init();
    let hat = Driver::new();
    for _ in 0..1000 {
        let AccelerationReading { x, y, z } = hat.get_accelerometer_raw();
        for axis in [x, y, z] {
            assert!((-9..9).contains(&axis), "out of range: {axis}");
        }
    }
}

#[test]
fn test_orientation_axis_ranges() {
    init();
    let hat = Driver::new();
    for _ in 0..1000 {
        let OrientationReading { roll, pitch, yaw } = hat.get_orientation();
        for axis in [roll, pitch, yaw] {
            assert!((-9..9).contains(&axis), "out of range: {axis}");
        }
    }
}

#[test]
fn test_successive_reads_stay_in_range() {
    init();
    let hat = Driver::new();
    let first = hat.get_temperature();
    let second = hat.get_temperature();
    assert!((-20..130).contains(&first));
    assert!((-20..130).contains(&second));
}

#[test]
fn test_show_message_and_clear() {
    init();
    let hat = Driver::new();
    hat.show_message("hello");
    hat.show_message(42);
    hat.clear();
}
