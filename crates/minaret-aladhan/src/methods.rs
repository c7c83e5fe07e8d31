// SPDX-FileCopyrightText: 2026 Minaret Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calculation-method catalog.
//!
//! Numeric codes select which astronomical/jurisprudential convention the
//! AlAdhan service uses to compute prayer times. Pure lookup, no network.

/// Default calculation method: Islamic Society of North America.
pub const DEFAULT_METHOD: u8 = 2;

/// Numeric code to authority name, as accepted by the AlAdhan `method`
/// parameter.
pub const CALCULATION_METHODS: &[(u8, &str)] = &[
    (0, "Shia Ithna-Ashari"),
    (1, "University of Islamic Sciences, Karachi"),
    (2, "Islamic Society of North America"),
    (3, "Muslim World League"),
    (4, "Umm Al-Qura University, Makkah"),
    (5, "Egyptian General Authority of Survey"),
    (7, "Institute of Geophysics, University of Tehran"),
    (8, "Gulf Region"),
    (9, "Kuwait"),
    (10, "Qatar"),
    (11, "Majlis Ugama Islam Singapura, Singapore"),
    (12, "Union Organization Islamic de France"),
    (13, "Diyanet Isleri Baskanligi, Turkey"),
    (14, "Spiritual Administration of Muslims of Russia"),
];

/// Returns the authority name for a method code, if the code is known.
pub fn method_name(code: u8) -> Option<&'static str> {
    CALCULATION_METHODS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
