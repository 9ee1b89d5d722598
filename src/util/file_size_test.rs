use super::*;

#[test]
fn bytes_are_shown_without_decimals() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(1023), "1023 B");
}

#[test]
fn kilobytes_and_up_use_two_decimals() {
    assert_eq!(format_size(1024), "1.00 KB");
    assert_eq!(format_size(1536), "1.50 KB");
    assert_eq!(format_size(10 * 1024 * 1024), "10.00 MB");
}

#[test]
fn large_sizes_pick_the_right_unit() {
    assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
}
