//! Common regex patterns for confirmation message extraction.
//!
//! None of the patterns look at field labels ("Пароль", "Спишется",
//! "Перевод на счет"), so rewording a label does not break extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Confirmation code: exactly four digits standing alone.
    // ASCII boundaries, so a Cyrillic label glued to the digits still delimits them.
    pub static ref CONFIRMATION_CODE: Regex = Regex::new(
        r"(?-u:\b)([0-9]{4})(?-u:\b)"
    ).unwrap();

    // Amount: integer or decimal (comma or dot), optional single space, currency letters.
    // Matches the first such token anywhere, so an unrelated "12шт" can win.
    pub static ref AMOUNT_WITH_CURRENCY: Regex = Regex::new(
        r"([0-9]+[.,][0-9]+|[0-9]+) ?([A-Za-zА-Яа-яЁё]+)"
    ).unwrap();

    // Account: "41001" followed by 8-11 digits, 13-16 digits in total
    pub static ref ACCOUNT: Regex = Regex::new(
        r"(?-u:\b)(41001[0-9]{8,11})(?-u:\b)"
    ).unwrap();
}
