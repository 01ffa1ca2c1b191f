use crate::config::ScorerConfig;
use crate::core::{
    address::score_addresses,
    age::score_age,
    appointments::score_appointments,
    distance::{DistanceProvider, GeodesicDistance},
    names::{score_company_name, score_names},
    ownership::score_ownership,
};
use crate::models::{Confidence, ConnectionScore, OfficerRecord, ScoreBreakdown};

/// Pairwise family-connection scorer
///
/// Holds an immutable configuration and a distance capability; scoring is a
/// pure function of the two records, so one scorer can be shared across
/// threads.
///
/// # Evaluation order
/// 1. Surname similarity
/// 2. Shared middle names
/// 3. Age relationship
/// 4. Shared appointments
/// 5. Multiple roles
/// 6. Appointment/resignation timing
/// 7. Ownership overlap
/// 8. Exact address
/// 9. Address proximity
/// 10. Surname in company name
#[derive(Debug, Clone)]
pub struct ConnectionScorer<D = GeodesicDistance> {
    config: ScorerConfig,
    distance: D,
}

impl ConnectionScorer<GeodesicDistance> {
    pub fn new(config: ScorerConfig) -> Self {
        Self::with_distance(config, GeodesicDistance)
    }

    pub fn with_default_config() -> Self {
        Self::new(ScorerConfig::default())
    }
}

impl<D: DistanceProvider> ConnectionScorer<D> {
    /// Create a scorer with a caller-supplied distance capability
    pub fn with_distance(config: ScorerConfig, distance: D) -> Self {
        Self { config, distance }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score the likelihood that two officers are related
    ///
    /// Never fails: malformed or missing fields contribute nothing.
    pub fn score(&self, person1: &OfficerRecord, person2: &OfficerRecord) -> ConnectionScore {
        let config = &self.config;
        let mut breakdown = ScoreBreakdown::default();
        let mut reasons = Vec::new();

        let names = score_names(
            &person1.full_name,
            &person2.full_name,
            &person1.middle_names,
            &person2.middle_names,
            config,
        );
        breakdown.surname_score = names.surname_score;
        if names.surname_score > 0 {
            reasons.push(format!("Similar surnames ({}% match)", names.surname_score));
        }
        breakdown.middle_name_score = names.middle_name_score;
        if names.middle_name_score > 0 {
            reasons.push(format!("Shared middle names: {}", names.shared_middle_names.join(", ")));
        }

        if let (Some(dob1), Some(dob2)) = (&person1.date_of_birth, &person2.date_of_birth) {
            breakdown.age_score = score_age(dob1, dob2, config);
        }
        if breakdown.age_score > 0 {
            reasons.push(format!("Age difference consistent with family relationship (+{})", breakdown.age_score));
        }

        let appointments = score_appointments(&person1.roles, &person2.roles, config);
        breakdown.shared_appointment_score = appointments.shared_appointment_score;
        if appointments.shared_appointment_score > 0 {
            reasons.push(format!(
                "Shared appointments at {} companies: {}",
                appointments.shared_companies.len(),
                appointments.shared_companies.join(", ")
            ));
        }
        breakdown.multiple_roles_score = appointments.multiple_roles_score;
        if appointments.multiple_roles_score > 0 {
            reasons.push(format!("Multiple role types held (+{})", appointments.multiple_roles_score));
        }
        breakdown.timing_score = appointments.timing_score;
        if appointments.timing_score > 0 {
            reasons.push(format!(
                "Synchronized appointment/resignation dates within {} days (+{})",
                config.appointment_timing_threshold, appointments.timing_score
            ));
        }

        breakdown.psc_score = score_ownership(&person1.psc_holdings, &person2.psc_holdings);
        if breakdown.psc_score > 0 {
            reasons.push(format!("Overlapping significant-control holdings (+{})", breakdown.psc_score));
        }

        let addresses = score_addresses(
            person1.address.as_ref(),
            person2.address.as_ref(),
            config,
            &self.distance,
        );
        breakdown.exact_match_score = addresses.exact_match_score;
        if addresses.exact_match_score > 0 {
            reasons.push("Shared address".to_string());
        }
        breakdown.proximity_score = addresses.proximity_score;
        if addresses.proximity_score > 0 {
            let miles = addresses.distance_miles.unwrap_or_default();
            reasons.push(format!("Nearby addresses ({:.2} miles apart)", miles));
        }

        breakdown.company_name_score = score_company_name(
            person1.surname.as_deref(),
            person1.company_name.as_deref(),
            config,
        );
        if breakdown.company_name_score > 0 {
            reasons.push("Surname appears in company name".to_string());
        }

        let total_score = breakdown.total();
        let confidence = Confidence::from_score(total_score);

        tracing::trace!(
            total_score,
            confidence = confidence.as_str(),
            breakdown = ?breakdown,
            "Scored officer pair"
        );

        ConnectionScore {
            total_score,
            reasons,
            confidence,
            breakdown,
        }
    }
}

impl Default for ConnectionScorer<GeodesicDistance> {
    fn default() -> Self {
        Self::with_default_config()
    }
}

/// Score two officer records with the given configuration and geodesic distance
pub fn score(person1: &OfficerRecord, person2: &OfficerRecord, config: &ScorerConfig) -> ConnectionScore {
    ConnectionScorer::new(config.clone()).score(person1, person2)
}
