// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.
//!
//! Each command constructs the components it needs explicitly — client,
//! clock, provider, channels — from the loaded configuration. There are
//! no process-wide singletons.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use minaret_aladhan::{AladhanClient, PrayerTimeProvider, CALCULATION_METHODS};
use minaret_config::MinaretConfig;
use minaret_core::types::{DeviceTokens, Language, NotificationPreferences, PrayerName};
use minaret_core::{MinaretError, PushChannel, SystemClock};
use minaret_notify::{Dispatcher, NotificationOrchestrator};
use minaret_schedule::{minutes_since_midnight, next_prayer};

fn build_provider(config: &MinaretConfig) -> Result<PrayerTimeProvider, MinaretError> {
    let client = AladhanClient::with_timeout(
        config.aladhan.base_url.clone(),
        Duration::from_secs(config.aladhan.timeout_secs),
    )?;
    Ok(PrayerTimeProvider::new(
        client,
        Arc::new(SystemClock),
        Duration::from_secs(config.engine.cache_ttl_hours * 60 * 60),
        config.engine.default_method,
    ))
}

/// `minaret times [--date DD-MM-YYYY]`
pub async fn times(config: &MinaretConfig, date: Option<&str>) -> Result<(), MinaretError> {
    let provider = build_provider(config)?;
    let set = provider
        .daily_times(
            config.location.latitude,
            config.location.longitude,
            date,
            None,
            config.location.timezone.as_deref(),
        )
        .await?;

    println!("{}  (Hijri {})", set.date.readable, set.date.hijri);
    for prayer in [
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ] {
        println!("  {:<8} {}", prayer.to_string(), set.times.time_of(prayer));
    }
    Ok(())
}

/// `minaret next`
pub async fn next(config: &MinaretConfig) -> Result<(), MinaretError> {
    let provider = build_provider(config)?;
    let set = provider
        .daily_times(
            config.location.latitude,
            config.location.longitude,
            None,
            None,
            config.location.timezone.as_deref(),
        )
        .await?;

    let now = minutes_since_midnight(chrono::Local::now().time());
    let next = next_prayer(&set, now);
    println!("{} at {} ({})", next.prayer, next.time, next.remaining);
    Ok(())
}

/// `minaret qibla`
pub async fn qibla(config: &MinaretConfig) -> Result<(), MinaretError> {
    let provider = build_provider(config)?;
    let info = provider
        .qibla(config.location.latitude, config.location.longitude)
        .await?;
    println!("{:.2} degrees from true north", info.direction);
    Ok(())
}

/// `minaret date`
pub async fn date(config: &MinaretConfig) -> Result<(), MinaretError> {
    let provider = build_provider(config)?;
    let islamic = provider
        .islamic_date(
            Some(config.location.latitude),
            Some(config.location.longitude),
        )
        .await?;
    println!("{} AH  ({})", islamic.hijri, islamic.gregorian);
    Ok(())
}

/// `minaret methods`
pub fn methods() {
    for (code, name) in CALCULATION_METHODS {
        println!("{code:>3}  {name}");
    }
}

/// `minaret send-test [--fcm-token ..] [--expo-token ..] [--prayer ..]`
pub async fn send_test(
    config: &MinaretConfig,
    fcm_token: Option<String>,
    expo_token: Option<String>,
    prayer: Option<&str>,
) -> Result<(), MinaretError> {
    let prayer = prayer
        .map(|p| {
            PrayerName::from_str(p)
                .map_err(|_| MinaretError::Config(format!("unknown prayer name: {p}")))
        })
        .transpose()?;

    let mut channels: Vec<Arc<dyn PushChannel>> = Vec::new();
    #[cfg(feature = "fcm")]
    channels.push(Arc::new(minaret_fcm::FcmChannel::new(
        config.fcm.server_key.clone(),
    )?));
    #[cfg(feature = "expo")]
    channels.push(Arc::new(minaret_expo::ExpoChannel::new(
        config.expo.access_token.clone(),
    )?));

    if channels.is_empty() {
        return Err(MinaretError::Config(
            "no push channels compiled in; enable the fcm or expo feature".into(),
        ));
    }

    let orchestrator = NotificationOrchestrator::new(Dispatcher::new(channels));
    let prefs = NotificationPreferences {
        user_id: "cli".into(),
        per_prayer: Default::default(),
        events_enabled: false,
        event_categories: Default::default(),
        device_tokens: DeviceTokens {
            fcm: fcm_token,
            expo: expo_token,
        },
        language: Language::from_str(&config.engine.language).unwrap_or_default(),
    };

    let result = orchestrator.dispatch_test(&prefs, prayer).await;
    if result.outcomes.is_empty() {
        println!("no device tokens supplied; nothing was sent");
        return Ok(());
    }

    for outcome in &result.outcomes {
        if outcome.success {
            println!(
                "{}: delivered ({})",
                outcome.channel,
                outcome.provider_message_id.as_deref().unwrap_or("unknown")
            );
        } else {
            println!(
                "{}: failed ({})",
                outcome.channel,
                outcome.error_detail.as_deref().unwrap_or("unknown")
            );
        }
    }
    Ok(())
}
