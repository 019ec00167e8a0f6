//! Integration tests for the command layer.
//!
//! These drive the dispatcher the way the REPL does, with a fixed
//! reference date so birthday windows are deterministic.

use chrono::NaiveDate;
use rolodex::{Directory, Dispatcher};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reply(dispatcher: &Dispatcher, directory: &mut Directory, line: &str, today: NaiveDate) -> String {
    dispatcher
        .dispatch(line, directory, today)
        .expect("non-blank line")
        .reply
}

#[test]
fn test_contact_lifecycle_transcript() {
    let dispatcher = Dispatcher::new(7);
    let mut directory = Directory::new();
    let today = date(2024, 3, 12);

    assert_eq!(
        reply(&dispatcher, &mut directory, "add Alice 1234567890", today),
        "Contact added."
    );
    assert_eq!(directory.len(), 1);
    assert_eq!(
        reply(&dispatcher, &mut directory, "phone Alice", today),
        "Alice's phones: 1234567890"
    );
    assert_eq!(
        reply(&dispatcher, &mut directory, "add-birthday Alice 15.03.1990", today),
        "Birthday added for Alice."
    );
    assert_eq!(
        reply(&dispatcher, &mut directory, "show-birthday Alice", today),
        "Alice's birthday is 15.03.1990"
    );
}

#[test]
fn test_upcoming_birthdays_window_inclusion() {
    let dispatcher = Dispatcher::new(7);
    let mut directory = Directory::new();

    let setup_day = date(2024, 1, 1);
    reply(&dispatcher, &mut directory, "add Alice 1234567890", setup_day);
    reply(&dispatcher, &mut directory, "add-birthday Alice 15.03.1990", setup_day);

    // The 15th falls inside the 7-day window from the 12th
    assert_eq!(
        reply(&dispatcher, &mut directory, "birthdays", date(2024, 3, 12)),
        "Contact name: Alice, phones: 1234567890, birthday: 15.03.1990"
    );

    // From the 20th it has already passed
    assert_eq!(
        reply(&dispatcher, &mut directory, "birthdays", date(2024, 3, 20)),
        "No upcoming birthdays in the next week."
    );
}

#[test]
fn test_upcoming_birthdays_across_new_year() {
    let dispatcher = Dispatcher::new(7);
    let mut directory = Directory::new();

    let setup_day = date(2024, 6, 1);
    reply(&dispatcher, &mut directory, "add Nina", setup_day);
    reply(&dispatcher, &mut directory, "add-birthday Nina 02.01.1970", setup_day);

    let rendered = reply(&dispatcher, &mut directory, "birthdays", date(2024, 12, 29));
    assert!(rendered.contains("Nina"), "got: {}", rendered);
}

#[test]
fn test_change_with_wrong_old_phone_reports_phone_not_found() {
    let dispatcher = Dispatcher::new(7);
    let mut directory = Directory::new();
    let today = date(2024, 3, 12);

    reply(&dispatcher, &mut directory, "add Alice 1234567890", today);
    assert_eq!(
        reply(
            &dispatcher,
            &mut directory,
            "change Alice 0000000000 1111111111",
            today
        ),
        "Phone not found."
    );
    // Untouched
    assert_eq!(
        reply(&dispatcher, &mut directory, "phone Alice", today),
        "Alice's phones: 1234567890"
    );
}

#[test]
fn test_all_lists_records_in_insertion_order() {
    let dispatcher = Dispatcher::new(7);
    let mut directory = Directory::new();
    let today = date(2024, 3, 12);

    reply(&dispatcher, &mut directory, "add Carol 1111111111", today);
    reply(&dispatcher, &mut directory, "add Alice 2222222222", today);

    assert_eq!(
        reply(&dispatcher, &mut directory, "all", today),
        "Contact name: Carol, phones: 1111111111, birthday: Birthday not set.\n\
         Contact name: Alice, phones: 2222222222, birthday: Birthday not set."
    );
}

#[test]
fn test_unknown_and_malformed_input() {
    let dispatcher = Dispatcher::new(7);
    let mut directory = Directory::new();
    let today = date(2024, 3, 12);

    assert_eq!(
        reply(&dispatcher, &mut directory, "abracadabra", today),
        "Invalid command."
    );
    assert_eq!(
        reply(&dispatcher, &mut directory, "add-birthday Alice", today),
        "Missing argument. Usage: add-birthday <name> <DD.MM.YYYY>"
    );
    assert_eq!(
        reply(&dispatcher, &mut directory, "add Bob notaphone", today),
        "Phone number must have 10 digits."
    );
    assert_eq!(
        reply(&dispatcher, &mut directory, "add-birthday Bob 1990-03-15", today),
        "Invalid date format. Use DD.MM.YYYY"
    );
}

#[test]
fn test_wider_horizon_window() {
    let dispatcher = Dispatcher::new(30);
    let mut directory = Directory::new();
    let today = date(2024, 3, 1);

    reply(&dispatcher, &mut directory, "add Alice", today);
    reply(&dispatcher, &mut directory, "add-birthday Alice 25.03.1990", today);

    let rendered = reply(&dispatcher, &mut directory, "birthdays", today);
    assert!(rendered.contains("Alice"));
}
