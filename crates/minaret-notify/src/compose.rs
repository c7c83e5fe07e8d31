// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Localized notification payload composition.
//!
//! Template tables exist for English and Arabic; any other requested
//! language falls back to English. This is a default policy, not an error.

use minaret_core::types::{
    CommunityEvent, ComposedMessage, Language, MessageKind, PrayerName,
};

/// Sound asset played for prayer alerts.
pub const PRAYER_SOUND: &str = "adhan.mp3";
/// Sound for event and test notifications.
pub const DEFAULT_SOUND: &str = "default";

/// Android channel groups.
pub const PRAYER_CHANNEL_GROUP: &str = "prayer-alerts";
pub const EVENT_CHANNEL_GROUP: &str = "community-events";

/// Tap action identifiers the app routes on.
pub const TAP_OPEN_PRAYER_TIMES: &str = "open-prayer-times";
pub const TAP_OPEN_EVENT: &str = "open-event";
pub const TAP_TEST: &str = "test";

/// Collapses a requested language onto a language we have templates for.
fn template_language(language: Language) -> Language {
    match language {
        Language::Ar => Language::Ar,
        _ => Language::En,
    }
}

fn english_name(prayer: PrayerName) -> &'static str {
    match prayer {
        PrayerName::Fajr => "Fajr",
        PrayerName::Sunrise => "Sunrise",
        PrayerName::Dhuhr => "Dhuhr",
        PrayerName::Asr => "Asr",
        PrayerName::Maghrib => "Maghrib",
        PrayerName::Isha => "Isha",
        PrayerName::Jumma => "Jumma",
    }
}

fn arabic_name(prayer: PrayerName) -> &'static str {
    match prayer {
        PrayerName::Fajr => "الفجر",
        PrayerName::Sunrise => "الشروق",
        PrayerName::Dhuhr => "الظهر",
        PrayerName::Asr => "العصر",
        PrayerName::Maghrib => "المغرب",
        PrayerName::Isha => "العشاء",
        PrayerName::Jumma => "الجمعة",
    }
}

fn prayer_title(prayer: PrayerName, language: Language) -> String {
    match template_language(language) {
        Language::Ar => {
            if prayer == PrayerName::Sunrise {
                arabic_name(prayer).to_string()
            } else {
                format!("صلاة {}", arabic_name(prayer))
            }
        }
        _ => {
            if prayer == PrayerName::Sunrise {
                english_name(prayer).to_string()
            } else {
                format!("{} Prayer", english_name(prayer))
            }
        }
    }
}

fn prayer_body(prayer: PrayerName, time: &str, language: Language) -> String {
    match template_language(language) {
        Language::Ar => match prayer {
            PrayerName::Sunrise => format!("تشرق الشمس الساعة {time}"),
            PrayerName::Fajr => format!("حان وقت صلاة الفجر الساعة {time}. ابدأ يومك بالصلاة"),
            PrayerName::Jumma => {
                format!("حان وقت صلاة الجمعة الساعة {time}. لا تنس قراءة سورة الكهف")
            }
            _ => format!("حان وقت صلاة {} الساعة {time}", arabic_name(prayer)),
        },
        _ => match prayer {
            PrayerName::Sunrise => format!("The sun rises at {time}. Fajr time has ended."),
            PrayerName::Fajr => {
                format!("Fajr prayer time is at {time}. Begin your day with prayer.")
            }
            PrayerName::Jumma => {
                format!("Jumma prayer time is at {time}. Don't forget Surah Al-Kahf.")
            }
            _ => format!("{} prayer time is at {time}.", english_name(prayer)),
        },
    }
}

/// Builds the localized payload for a prayer alert.
pub fn prayer_message(prayer: PrayerName, time: &str, language: Language) -> ComposedMessage {
    ComposedMessage {
        title: prayer_title(prayer, language),
        body: prayer_body(prayer, time, language),
        kind: MessageKind::Prayer,
        prayer: Some(prayer),
        event_id: None,
        sound: PRAYER_SOUND.to_string(),
        channel_group: PRAYER_CHANNEL_GROUP.to_string(),
        tap_action: TAP_OPEN_PRAYER_TIMES.to_string(),
    }
}

/// Builds the localized payload for a community event announcement.
pub fn event_message(event: &CommunityEvent, language: Language) -> ComposedMessage {
    let (title, body) = match template_language(language) {
        Language::Ar => {
            let mut body = event.description.clone();
            if let Some(date) = &event.date {
                body.push_str(&format!(" بتاريخ {date}"));
            }
            (format!("فعالية جديدة: {}", event.title), body)
        }
        _ => {
            let mut body = event.description.clone();
            if let Some(date) = &event.date {
                body.push_str(&format!(" on {date}"));
            }
            (format!("New event: {}", event.title), body)
        }
    };

    ComposedMessage {
        title,
        body,
        kind: MessageKind::Event,
        prayer: None,
        event_id: Some(event.id.clone()),
        sound: DEFAULT_SOUND.to_string(),
        channel_group: EVENT_CHANNEL_GROUP.to_string(),
        tap_action: TAP_OPEN_EVENT.to_string(),
    }
}

/// Builds the fixed-copy test payload.
pub fn test_message(prayer: Option<PrayerName>) -> ComposedMessage {
    let body = match prayer {
        Some(prayer) => format!("This is a test of your {prayer} notification settings."),
        None => "This is a test notification from your mosque app.".to_string(),
    };

    ComposedMessage {
        title: "Test Notification".to_string(),
        body,
        kind: MessageKind::Test,
        prayer,
        event_id: None,
        sound: DEFAULT_SOUND.to_string(),
        channel_group: PRAYER_CHANNEL_GROUP.to_string(),
        tap_action: TAP_TEST.to_string(),
    }
}
