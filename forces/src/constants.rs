//! Physical constants shared by every force law, in km / kg / s.

/// Universal gravitational constant (km^3 kg^-1 s^-2).
pub const G: f64 = 6.67430e-20;

/// Mass of the Earth (kg).
pub const EARTH_MASS: f64 = 5.972e24;

/// Mean volumetric radius of the Earth (km).
pub const EARTH_RADIUS: f64 = 6371.0;

/// Gravitational parameter of the Earth (km^3 s^-2).
pub const EARTH_MU: f64 = G * EARTH_MASS;

/// Equatorial radius used with the J2 coefficient (km).
pub const EARTH_EQUATORIAL_RADIUS: f64 = 6378.137;

pub const EARTH_J2: f64 = 1.08263e-3;

/// Sidereal rotation rate of the Earth (rad/s).
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5;

/// Mass of the Moon (kg).
pub const MOON_MASS: f64 = 7.342e22;

/// Mean Earth-Moon distance (km).
pub const MOON_DISTANCE: f64 = 384_400.0;

/// Solar radiation pressure at 1 AU (N/m^2).
pub const SOLAR_PRESSURE_1AU: f64 = 4.56e-6;
