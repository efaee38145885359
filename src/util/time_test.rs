use super::*;
use chrono::FixedOffset;

const RU_FMT: &str = "%d.%m.%Y, %H:%M";

#[test]
fn format_in_renders_day_month_year_hour_minute() {
    assert_eq!(format_in("2024-05-01T09:07:00Z", RU_FMT, &Utc), "01.05.2024, 09:07");
}

#[test]
fn format_in_converts_offset_to_target_zone() {
    let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
    assert_eq!(
        format_in("2024-05-01T22:30:00.123456+00:00", RU_FMT, &moscow),
        "02.05.2024, 01:30"
    );
}

#[test]
fn format_in_accepts_space_separated_offset_form() {
    assert_eq!(format_in("2024-12-31 23:59:59+00:00", "%d/%m/%Y %H:%M", &Utc), "31/12/2024 23:59");
}

#[test]
fn format_in_treats_naive_times_as_local_wall_clock() {
    let plus_five = FixedOffset::east_opt(5 * 3600).unwrap();
    assert_eq!(format_in("2024-03-10T08:15:00", RU_FMT, &plus_five), "10.03.2024, 08:15");
}

#[test]
fn format_in_handles_bare_dates_as_utc_midnight() {
    assert_eq!(format_in("2024-03-10", RU_FMT, &Utc), "10.03.2024, 00:00");
}

#[test]
fn format_in_empty_input_is_empty() {
    assert_eq!(format_in("", RU_FMT, &Utc), "");
    assert_eq!(format_in("   ", RU_FMT, &Utc), "");
}

#[test]
fn format_in_returns_unrecognized_input_verbatim() {
    assert_eq!(format_in("yesterday", RU_FMT, &Utc), "yesterday");
}

#[test]
fn format_local_is_empty_for_empty_input() {
    assert_eq!(format_local("", RU_FMT), "");
}
