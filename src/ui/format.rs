//! Display helpers shared by the sidebar and the chat area.

use chrono::{DateTime, Local, TimeZone, Utc};
use eframe::egui::Color32;

/// Avatar backgrounds, picked by name length.
pub const AVATAR_PALETTE: [Color32; 8] = [
    Color32::from_rgb(0xef, 0x44, 0x44), // red
    Color32::from_rgb(0x3b, 0x82, 0xf6), // blue
    Color32::from_rgb(0x22, 0xc5, 0x5e), // green
    Color32::from_rgb(0xea, 0xb3, 0x08), // yellow
    Color32::from_rgb(0xa8, 0x55, 0xf7), // purple
    Color32::from_rgb(0xec, 0x48, 0x99), // pink
    Color32::from_rgb(0x63, 0x66, 0xf1), // indigo
    Color32::from_rgb(0x14, 0xb8, 0xa6), // teal
];

pub const OWN_AVATAR_COLOR: Color32 = AVATAR_PALETTE[2];

pub fn format_time(timestamp: &DateTime<Utc>) -> String {
    format_time_in(timestamp, &Local)
}

pub fn format_time_in<Tz: TimeZone>(timestamp: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(zone).format("%H:%M").to_string()
}

pub fn initials(name: &str) -> String {
    name.chars().take(2).collect::<String>().to_uppercase()
}

pub fn palette_index(name: &str) -> usize {
    name.chars().count() % AVATAR_PALETTE.len()
}

pub fn avatar_color(name: &str) -> Color32 {
    AVATAR_PALETTE[palette_index(name)]
}
