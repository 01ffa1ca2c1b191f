// Core scoring exports
pub mod address;
pub mod age;
pub mod appointments;
pub mod dates;
pub mod distance;
pub mod fuzzy;
pub mod names;
pub mod ownership;
pub mod scorer;

pub use address::{normalize_address, score_addresses, AddressScores};
pub use age::{classify_age_gap, score_age, AgeBand};
pub use appointments::{score_appointments, AppointmentScores};
pub use dates::{parse_date, DateError};
pub use distance::{
    haversine_distance, DistanceError, DistanceProvider, GeodesicDistance, HaversineDistance,
    UnavailableDistance,
};
pub use fuzzy::{partial_ratio, ratio};
pub use names::{derive_surname, score_company_name, score_names, NameScores};
pub use ownership::score_ownership;
pub use scorer::{score, ConnectionScorer};

/// Item count as `u32`, saturating for oversized inputs
#[inline]
pub(crate) fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
