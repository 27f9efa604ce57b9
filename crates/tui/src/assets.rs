//! Fixed display assets.
//!
//! Three lookup tables, all closed sets: one emblem per Paris district, one
//! glyph per rating score, one icon per known landmark. Lookups return
//! `Option` so callers decide whether a miss is tolerated (districts,
//! landmarks) or a contract breach (rating scores).

/// District emblems, indexed by arrondissement number minus one.
const ARRONDISSEMENT_EMBLEMS: [&str; 20] = [
    "①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "⑩",
    "⑪", "⑫", "⑬", "⑭", "⑮", "⑯", "⑰", "⑱", "⑲", "⑳",
];

/// Rating glyphs, indexed by score minus one.
const RATING_GLYPHS: [&str; 5] = [
    "★☆☆☆☆",
    "★★☆☆☆",
    "★★★☆☆",
    "★★★★☆",
    "★★★★★",
];

/// Emblem for a Paris district. `None` for anything outside 1-20; the
/// caller shows no emblem in that case.
pub fn arrondissement_emblem(number: i64) -> Option<&'static str> {
    if (1..=20).contains(&number) {
        Some(ARRONDISSEMENT_EMBLEMS[(number - 1) as usize])
    } else {
        None
    }
}

/// Glyph for a rating score. `None` for anything outside 1-5; rating
/// callers treat that as a contract violation rather than clamping.
pub fn rating_glyph(score: i64) -> Option<&'static str> {
    if (1..=5).contains(&score) {
        Some(RATING_GLYPHS[(score - 1) as usize])
    } else {
        None
    }
}

/// Icon for one of the six landmarks the transit analysis knows about.
/// Unrecognized names render without an icon.
pub fn landmark_icon(name: &str) -> Option<&'static str> {
    match name {
        "Eiffel Tower" => Some("🗼"),
        "Louvre" => Some("🖼"),
        "Sacré-Cœur" => Some("⛪"),
        "Arc de Triomphe" => Some("🏛"),
        "Notre-Dame" => Some("🕍"),
        "Champs-Élysées" => Some("🛍"),
        _ => None,
    }
}
