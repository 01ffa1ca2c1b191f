// Integration tests for Family Connections

use family_connections::core::distance::DistanceError;
use family_connections::{
    score, Address, Confidence, ConnectionScorer, Coordinates, DistanceProvider, OfficerRecord,
    Ownership, Role, ScorerConfig, UnavailableDistance,
};
use std::sync::Arc;

fn create_officer(name: &str, dob: Option<&str>) -> OfficerRecord {
    OfficerRecord {
        full_name: name.to_string(),
        date_of_birth: dob.map(str::to_string),
        ..OfficerRecord::default()
    }
}

fn create_related_pair() -> (OfficerRecord, OfficerRecord) {
    let mut father = create_officer("Robert James Whitfield", Some("1958-03-14"));
    father.middle_names = vec!["James".to_string()];
    father.roles = vec![
        Role::new("04512233", "director").appointed("2009-05-01").resigned("2016-11-30"),
        Role::new("07788120", "secretary").appointed("2012-02-10"),
    ];
    father.psc_holdings = vec![Ownership::new("04512233"), Ownership::new("07788120")];
    father.address = Some(Address::new("14 Orchard Road, Leeds").with_coordinates(53.8008, -1.5491));
    father.surname = Some("Whitfield".to_string());
    father.company_name = Some("Whitfield Property Holdings Ltd".to_string());

    let mut son = create_officer("Daniel James Whitfield", Some("1987-09-02"));
    son.middle_names = vec!["JAMES".to_string()];
    son.roles = vec![Role::new("04512233", "director").appointed("2009-06-15").resigned("2016-12-20")];
    son.psc_holdings = vec![Ownership::new("04512233")];
    son.address = Some(Address::new("22 Orchard Rd, Leeds").with_coordinates(53.8020, -1.5480));

    (father, son)
}

/// Always fails, as a remote geocoder might
struct FailingDistance;

impl DistanceProvider for FailingDistance {
    fn distance_miles(&self, _from: Coordinates, _to: Coordinates) -> Result<f64, DistanceError> {
        Err(DistanceError::Unavailable("geocoder offline".to_string()))
    }
}

#[test]
fn test_integration_related_pair_scores_high() {
    let scorer = ConnectionScorer::with_default_config();
    let (father, son) = create_related_pair();

    let result = scorer.score(&father, &son);
    let b = result.breakdown;

    assert_eq!(b.surname_score, 100);
    assert_eq!(b.middle_name_score, 25);
    assert_eq!(b.age_score, 25, "29.5 years apart is in the generational band");
    assert_eq!(b.shared_appointment_score, 15);
    assert_eq!(b.multiple_roles_score, 20);
    assert_eq!(b.timing_score, 50);
    assert_eq!(b.psc_score, 20);
    assert_eq!(b.exact_match_score, 0);
    assert_eq!(b.proximity_score, 20);
    assert_eq!(b.company_name_score, 35);

    assert_eq!(result.total_score, 310);
    assert_eq!(result.confidence, Confidence::High);
    assert_eq!(result.reasons.len(), 9);
}

#[test]
fn test_integration_total_equals_sum_of_reasons() {
    let scorer = ConnectionScorer::with_default_config();
    let (father, son) = create_related_pair();

    let pairs = vec![
        (father.clone(), son.clone()),
        (son.clone(), father.clone()),
        (father.clone(), OfficerRecord::default()),
        (create_officer("Ann Lee", Some("1990-01-01")), create_officer("Ben Lee", Some("1991-06-01"))),
    ];

    for (person1, person2) in pairs {
        let result = scorer.score(&person1, &person2);
        let b = result.breakdown;
        let parts = [
            b.surname_score,
            b.middle_name_score,
            b.age_score,
            b.shared_appointment_score,
            b.multiple_roles_score,
            b.timing_score,
            b.psc_score,
            b.exact_match_score,
            b.proximity_score,
            b.company_name_score,
        ];

        assert_eq!(result.total_score, parts.iter().sum::<u32>());
        assert_eq!(result.reasons.len(), parts.iter().filter(|p| **p > 0).count());
    }
}

#[test]
fn test_integration_symmetry() {
    let scorer = ConnectionScorer::with_default_config();
    let (father, son) = create_related_pair();

    let forward = scorer.score(&father, &son).breakdown;
    let backward = scorer.score(&son, &father).breakdown;

    assert_eq!(forward.surname_score, backward.surname_score);
    assert_eq!(forward.middle_name_score, backward.middle_name_score);
    assert_eq!(forward.age_score, backward.age_score);
    assert_eq!(forward.shared_appointment_score, backward.shared_appointment_score);
    assert_eq!(forward.multiple_roles_score, backward.multiple_roles_score);
    assert_eq!(forward.timing_score, backward.timing_score);
    assert_eq!(forward.psc_score, backward.psc_score);
    assert_eq!(forward.exact_match_score, backward.exact_match_score);
    assert_eq!(forward.proximity_score, backward.proximity_score);

    // Only person1's surname and company are consulted
    assert_eq!(forward.company_name_score, 35);
    assert_eq!(backward.company_name_score, 0);
}

#[test]
fn test_integration_idempotent() {
    let scorer = ConnectionScorer::with_default_config();
    let (father, son) = create_related_pair();

    assert_eq!(scorer.score(&father, &son), scorer.score(&father, &son));
}

#[test]
fn test_integration_exact_address_short_circuits_proximity() {
    let scorer = ConnectionScorer::with_default_config();

    let mut person1 = create_officer("A Brown", None);
    person1.address = Some(Address::new("3 Church Lane, York").with_coordinates(53.9600, -1.0873));
    let mut person2 = create_officer("B Green", None);
    // Same normalized text, coordinates ~100 miles away
    person2.address = Some(Address::new("3 church ln, york").with_coordinates(52.4862, -1.8904));

    let result = scorer.score(&person1, &person2);
    assert_eq!(result.breakdown.exact_match_score, 40);
    assert_eq!(result.breakdown.proximity_score, 0);
    assert_eq!(result.reasons, vec!["Shared address"]);
}

#[test]
fn test_integration_ownership_cap() {
    let scorer = ConnectionScorer::with_default_config();
    let holdings: Vec<Ownership> = ["A1", "A2", "A3", "A4", "A5"].iter().map(|n| Ownership::new(*n)).collect();

    let mut person1 = create_officer("A Brown", None);
    person1.psc_holdings = holdings.clone();
    let mut person2 = create_officer("B Green", None);
    person2.psc_holdings = holdings;

    assert_eq!(scorer.score(&person1, &person2).breakdown.psc_score, 60);
}

#[test]
fn test_integration_confidence_boundaries() {
    // 100 from surnames, then tune the middle-name points to land on each boundary
    let mut person1 = create_officer("Ann Marie Lee", None);
    person1.middle_names = vec!["Marie".to_string()];
    let mut person2 = create_officer("Ben Marie Lee", None);
    person2.middle_names = vec!["Marie".to_string()];

    let cases = [(49, 149, Confidence::Medium), (50, 150, Confidence::High), (0, 100, Confidence::Medium)];
    for (middle_points, total, confidence) in cases {
        let config = ScorerConfig {
            middle_name_match_score: middle_points,
            ..ScorerConfig::default()
        };
        let result = score(&person1, &person2, &config);
        assert_eq!(result.total_score, total);
        assert_eq!(result.confidence, confidence);
    }

    // 99: middle names only
    let config = ScorerConfig {
        middle_name_match_score: 99,
        ..ScorerConfig::default()
    };
    let result = score(&create_officer_with_middle("Ann Marie Lee"), &create_officer_with_middle("Ben Marie Fox"), &config);
    assert_eq!(result.total_score, 99);
    assert_eq!(result.confidence, Confidence::Low);
}

fn create_officer_with_middle(name: &str) -> OfficerRecord {
    let mut officer = create_officer(name, None);
    officer.middle_names = vec!["Marie".to_string()];
    officer
}

#[test]
fn test_integration_age_scenarios() {
    let config = ScorerConfig::default();

    let sibling = score(
        &create_officer("", Some("1990-01-01")),
        &create_officer("", Some("1991-06-01")),
        &config,
    );
    assert_eq!(sibling.breakdown.age_score, 30);

    let generational = score(
        &create_officer("", Some("1960-01-01")),
        &create_officer("", Some("1990-01-01")),
        &config,
    );
    assert_eq!(generational.breakdown.age_score, 25);

    let malformed = score(
        &create_officer("", Some("1990-01-01")),
        &create_officer("", Some("not-a-date")),
        &config,
    );
    assert_eq!(malformed.breakdown.age_score, 0);
    assert_eq!(malformed.total_score, 0);
}

#[test]
fn test_integration_distance_failures_degrade() {
    let (father, son) = create_related_pair();

    let failing = ConnectionScorer::with_distance(ScorerConfig::default(), FailingDistance);
    let unavailable = ConnectionScorer::with_distance(ScorerConfig::default(), UnavailableDistance);
    let baseline = ConnectionScorer::with_default_config().score(&father, &son);

    for result in [failing.score(&father, &son), unavailable.score(&father, &son)] {
        assert_eq!(result.breakdown.proximity_score, 0);
        assert_eq!(result.total_score, baseline.total_score - 20);
    }
}

#[test]
fn test_integration_boxed_provider_shared_across_threads() {
    let provider: Box<dyn DistanceProvider> = Box::new(UnavailableDistance);
    let scorer = Arc::new(ConnectionScorer::with_distance(ScorerConfig::default(), provider));
    let (father, son) = create_related_pair();
    let expected = scorer.score(&father, &son);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scorer = Arc::clone(&scorer);
            let (father, son) = (father.clone(), son.clone());
            std::thread::spawn(move || scorer.score(&father, &son))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_integration_json_records() {
    let json = r#"
        [
            {
                "full_name": "Helen Clarke",
                "middle_names": [],
                "date_of_birth": "1975-04-01",
                "roles": [{"company_number": "09911223", "role_type": "director", "appointed_on": "2018-01-10"}],
                "address": {"full_address": "7 Mill Street, Bath", "latitude": null, "longitude": null}
            },
            {
                "full_name": "Peter Clarke",
                "date_of_birth": "1977-08-20",
                "roles": [{"company_number": "09911223", "role_type": "director", "appointed_on": "2018-02-01"}],
                "address": {"full_address": "7 mill st, bath"}
            }
        ]
    "#;
    let records: Vec<OfficerRecord> = serde_json::from_str(json).unwrap();

    let result = score(&records[0], &records[1], &ScorerConfig::default());

    // 100 surname + 30 sibling + 15 shared + 25 timing + 40 address
    assert_eq!(result.total_score, 210);
    assert_eq!(result.confidence, Confidence::High);

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["confidence"], "HIGH");
    assert_eq!(value["breakdown"]["exact_match_score"], 40);
}

#[test]
fn test_integration_large_point_values_do_not_overflow() {
    let config = ScorerConfig {
        shared_address_score: u32::MAX,
        multiple_roles_score: u32::MAX,
        ..ScorerConfig::default()
    };

    let mut person1 = create_officer("Ann Lee", None);
    person1.address = Some(Address::new("5 Mill Lane, Bath"));
    person1.roles = vec![Role::new("001", "director"), Role::new("002", "secretary")];
    let mut person2 = create_officer("Ben Lee", None);
    person2.address = Some(Address::new("5 mill ln, bath"));
    person2.roles = vec![Role::new("003", "director"), Role::new("004", "secretary")];

    let result = score(&person1, &person2, &config);

    assert_eq!(result.breakdown.exact_match_score, u32::MAX);
    assert_eq!(result.breakdown.multiple_roles_score, u32::MAX);
    assert_eq!(result.total_score, u32::MAX);
    assert_eq!(result.confidence, Confidence::High);
}
