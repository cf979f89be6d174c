//! Nigeria's 36 states plus the Federal Capital Territory.

/// Normalized keys of every state that may appear as a bare header.
pub const KNOWN_STATES: [&str; 37] = [
    "ABIA",
    "ADAMAWA",
    "AKWA IBOM",
    "ANAMBRA",
    "BAUCHI",
    "BAYELSA",
    "BENUE",
    "BORNO",
    "CROSS RIVER",
    "DELTA",
    "EBONYI",
    "EDO",
    "EKITI",
    "ENUGU",
    "GOMBE",
    "IMO",
    "JIGAWA",
    "KADUNA",
    "KANO",
    "KATSINA",
    "KEBBI",
    "KOGI",
    "KWARA",
    "LAGOS",
    "NASARAWA",
    "NIGER",
    "OGUN",
    "ONDO",
    "OSUN",
    "OYO",
    "PLATEAU",
    "RIVERS",
    "SOKOTO",
    "TARABA",
    "YOBE",
    "ZAMFARA",
    "FCT",
];

/// Key used for the Federal Capital Territory in every header form.
pub const FCT_KEY: &str = "FCT";

/// Returns `true` if `key` (already normalized) names a known state.
pub fn is_known_state(key: &str) -> bool {
    KNOWN_STATES.contains(&key)
}
