//! Static geometry for the 50 US states.
//!
//! The three tables below are index-aligned: entry `i` of [`CODES`],
//! [`NAMES`] and [`PATHS`] all describe the same state. `CODES` is sorted,
//! which gives [`crate::models::StateId`] its ordering for free.
//!
//! Path data uses a square tile-grid cartogram layout (64px cells, 56px
//! tiles) inside a `0 0 708 516` viewBox. A path entry equal to
//! [`PLACEHOLDER_PATH`] means "geometry not yet supplied"; the renderer
//! skips such states, leaving them undrawn.

/// Sentinel for a state whose path geometry has not been supplied yet.
pub const PLACEHOLDER_PATH: &str = "PASTE_PATH_HERE";

/// viewBox of the rendered map.
pub const VIEW_BOX: &str = "0 0 708 516";

/// Number of states, and the denominator for every percentage.
pub const STATE_COUNT: usize = 50;

pub(crate) static CODES: [&str; STATE_COUNT] = [
    "AK", "AL", "AR", "AZ", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "IA",
    "ID", "IL", "IN", "KS", "KY", "LA", "MA", "MD", "ME", "MI", "MN", "MO",
    "MS", "MT", "NC", "ND", "NE", "NH", "NJ", "NM", "NV", "NY", "OH", "OK",
    "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VA", "VT", "WA", "WI",
    "WV", "WY",
];

pub(crate) static NAMES: [&str; STATE_COUNT] = [
    "Alaska",
    "Alabama",
    "Arkansas",
    "Arizona",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Iowa",
    "Idaho",
    "Illinois",
    "Indiana",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Massachusetts",
    "Maryland",
    "Maine",
    "Michigan",
    "Minnesota",
    "Missouri",
    "Mississippi",
    "Montana",
    "North Carolina",
    "North Dakota",
    "Nebraska",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "Nevada",
    "New York",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Virginia",
    "Vermont",
    "Washington",
    "Wisconsin",
    "West Virginia",
    "Wyoming",
];

pub(crate) static PATHS: [&str; STATE_COUNT] = [
    "M4 4h56v56h-56z",     // AK
    "M388 388h56v56h-56z", // AL
    "M260 324h56v56h-56z", // AR
    "M68 324h56v56h-56z",  // AZ
    "M4 260h56v56h-56z",   // CA
    "M132 260h56v56h-56z", // CO
    "M580 196h56v56h-56z", // CT
    "M580 260h56v56h-56z", // DE
    "M516 452h56v56h-56z", // FL
    "M452 388h56v56h-56z", // GA
    "M4 452h56v56h-56z",   // HI
    "M260 196h56v56h-56z", // IA
    "M68 132h56v56h-56z",  // ID
    "M324 132h56v56h-56z", // IL
    "M324 196h56v56h-56z", // IN
    "M196 324h56v56h-56z", // KS
    "M324 260h56v56h-56z", // KY
    "M260 388h56v56h-56z", // LA
    "M644 132h56v56h-56z", // MA
    "M516 260h56v56h-56z", // MD
    "M644 4h56v56h-56z",   // ME
    "M452 132h56v56h-56z", // MI
    "M260 132h56v56h-56z", // MN
    "M260 260h56v56h-56z", // MO
    "M324 388h56v56h-56z", // MS
    "M132 132h56v56h-56z", // MT
    "M388 324h56v56h-56z", // NC
    "M196 132h56v56h-56z", // ND
    "M196 260h56v56h-56z", // NE
    "M644 68h56v56h-56z",  // NH
    "M516 196h56v56h-56z", // NJ
    "M132 324h56v56h-56z", // NM
    "M68 196h56v56h-56z",  // NV
    "M516 132h56v56h-56z", // NY
    "M388 196h56v56h-56z", // OH
    "M196 388h56v56h-56z", // OK
    "M4 196h56v56h-56z",   // OR
    "M452 196h56v56h-56z", // PA
    "M580 132h56v56h-56z", // RI
    "M452 324h56v56h-56z", // SC
    "M196 196h56v56h-56z", // SD
    "M324 324h56v56h-56z", // TN
    "M196 452h56v56h-56z", // TX
    "M68 260h56v56h-56z",  // UT
    "M452 260h56v56h-56z", // VA
    "M580 68h56v56h-56z",  // VT
    "M4 132h56v56h-56z",   // WA
    "M388 132h56v56h-56z", // WI
    "M388 260h56v56h-56z", // WV
    "M132 196h56v56h-56z", // WY
];
