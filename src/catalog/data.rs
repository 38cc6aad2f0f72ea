//! Reference tier data: 48 tiers across two pages.

/// Base income per second of one level of each tier.
#[rustfmt::skip]
pub const TIER_BASE_RATES: [f64; 48] = [
    0.01, 0.08, 0.6,
    4.0, 33.0, 150.0,
    940.0, 8700.0, 64000.0,
    510000.0, 44e5, 32e6,
    24e7, 11e8, 90e8,
    62e9, 32e10, 13e11,
    84e11, 63e12, 34e13,
    21e14, 19e15, 93e15,
    // Page 2
    63e16, 42e17, 32e18,
    29e19, 21e20, 11e21,
    94e21, 74e22, 56e23,
    20e27, 20e32, 20e37,
    20e42, 20e47, 20e57,
    20e67, 20e77, 20e87,
    20e97, 20e117, 20e137,
    20e157, 20e177, 20e197,
];

#[rustfmt::skip]
pub const TIER_NAMES: [&str; 48] = [
    "Bottle Cap", "Empty Glass Bottle", "Toblerone Bar",
    "Coca-Cola Bottle", "Breakfast Package", "Stove",
    "IPhone 15", "Toyota Camry", "Steinway Grand Piano",
    "Simple Townhouse", "Supercar", "Small Private Island",
    "Holiday House", "Twitter", "Meta",
    "Elon Musk", "Vatican", "France",
    "Russia", "US", "Australia",
    "Asia", "Earth", "Mars",
    // Page 2
    "Inner Solar System", "Jupiter", "Outer Solar System",
    "Sun", "Heliosphere", "Proxima Centauri",
    "A Cen System", "Sirius System", "55 Cancri e",
    "Solar Neighborhood", "Kepler 452b", "Kepler 22b",
    "TRAPPIST-1d", "TRAPPIST-1 System", "Pistol Star",
    "Betelgeuse", "Stephenson 2-18", "Orion Arm",
    "Milky Way", "Messier 87", "IC 1101",
    "Local Group", "Laniakea Supercluster", "Singularity",
];
