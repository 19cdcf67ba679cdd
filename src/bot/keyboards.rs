//! Reply keyboards for the three menus. Layout mirrors the menu flow: one
//! button per row, a back button at the bottom of the nested menus.

use teloxide::types::{KeyboardButton, KeyboardMarkup};

use crate::flow::{labels, Menu};
use crate::materials::LEVELS;

pub fn markup_for(menu: &Menu) -> KeyboardMarkup {
    match menu {
        Menu::Language => language_menu(),
        Menu::Level => level_menu(),
        Menu::Material => material_menu(),
    }
}

pub fn language_menu() -> KeyboardMarkup {
    let rows = vec![
        vec![KeyboardButton::new(labels::ENGLISH)],
        vec![KeyboardButton::new(labels::RUSSIAN)],
    ];
    KeyboardMarkup::new(rows).resize_keyboard()
}

pub fn level_menu() -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = LEVELS
        .iter()
        .map(|level| vec![KeyboardButton::new(*level)])
        .collect();
    rows.push(vec![KeyboardButton::new(labels::BACK)]);
    KeyboardMarkup::new(rows).resize_keyboard()
}

pub fn material_menu() -> KeyboardMarkup {
    let rows = vec![
        vec![KeyboardButton::new(labels::BOOK)],
        vec![KeyboardButton::new(labels::AUDIO)],
        vec![KeyboardButton::new(labels::BACK)],
    ];
    KeyboardMarkup::new(rows).resize_keyboard()
}
