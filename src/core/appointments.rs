use crate::config::ScorerConfig;
use crate::core::{count_u32, dates::days_between};
use crate::models::Role;
use std::collections::{BTreeSet, HashSet};

/// Points per company where both people hold an appointment
pub const SHARED_APPOINTMENT_SCORE: u32 = 15;

/// Points from the appointment heuristics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentScores {
    pub shared_appointment_score: u32,
    pub multiple_roles_score: u32,
    pub timing_score: u32,
    /// Company numbers both people are appointed at, sorted
    pub shared_companies: Vec<String>,
    /// Shared companies with synchronized appointment dates
    pub synchronized_appointments: Vec<String>,
    /// Shared companies with synchronized resignation dates
    pub synchronized_resignations: Vec<String>,
}

/// Score overlap and timing between two people's company roles
pub fn score_appointments(roles1: &[Role], roles2: &[Role], config: &ScorerConfig) -> AppointmentScores {
    let mut scores = AppointmentScores::default();
    if roles1.is_empty() || roles2.is_empty() {
        return scores;
    }

    let companies1 = company_numbers(roles1);
    let companies2 = company_numbers(roles2);
    scores.shared_companies = companies1.intersection(&companies2).cloned().collect();
    scores.shared_appointment_score = SHARED_APPOINTMENT_SCORE.saturating_mul(count_u32(scores.shared_companies.len()));

    for roles in [roles1, roles2] {
        if distinct_role_types(roles) > 1 {
            scores.multiple_roles_score = scores.multiple_roles_score.saturating_add(config.multiple_roles_score);
        }
    }

    for company in &scores.shared_companies {
        let at1: Vec<&Role> = roles_at(roles1, company);
        let at2: Vec<&Role> = roles_at(roles2, company);

        if first_synchronized(&at1, &at2, |role| role.appointed_on.as_deref(), config) {
            scores.timing_score = scores.timing_score.saturating_add(config.appointment_timing_score);
            scores.synchronized_appointments.push(company.clone());
        }
        if first_synchronized(&at1, &at2, |role| role.resigned_on.as_deref(), config) {
            scores.timing_score = scores.timing_score.saturating_add(config.resignation_timing_score);
            scores.synchronized_resignations.push(company.clone());
        }
    }

    scores
}

fn company_numbers(roles: &[Role]) -> BTreeSet<String> {
    roles.iter().map(|role| role.company_number.clone()).collect()
}

fn distinct_role_types(roles: &[Role]) -> usize {
    roles.iter().map(|role| role.role_type.as_str()).collect::<HashSet<_>>().len()
}

fn roles_at<'a>(roles: &'a [Role], company: &str) -> Vec<&'a Role> {
    roles.iter().filter(|role| role.company_number == company).collect()
}

/// Whether any role pair, in list order, has dates within the timing threshold.
/// Pairs with a missing or malformed date are skipped.
fn first_synchronized<F>(at1: &[&Role], at2: &[&Role], date_of: F, config: &ScorerConfig) -> bool
where
    F: Fn(&Role) -> Option<&str>,
{
    for &role1 in at1 {
        for &role2 in at2 {
            let (Some(date1), Some(date2)) = (date_of(role1), date_of(role2)) else {
                continue;
            };
            match days_between(date1, date2) {
                Ok(days) if days <= config.appointment_timing_threshold => return true,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("Skipping role pair at {}: {}", role1.company_number, e);
                }
            }
        }
    }
    false
}
