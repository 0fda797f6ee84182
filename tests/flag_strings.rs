//! Bulk flag-string parsing against the per-tool schemas.

use radcmd::options::rcontrib::RcontribOptions;
use radcmd::options::rmtxop::RmtxopOptions;
use radcmd::options::rtrace::RtraceOptions;
use radcmd::{OptionCollection, RadianceError};

#[test]
fn override_string_merges_over_configured_defaults() {
    let mut options = RtraceOptions::default();
    options.ab.set(2).unwrap();
    options.aa.set(0.25).unwrap();

    options.update_from_string("-ab 3 -I").unwrap();

    assert_eq!(options.ab.value(), Some(3));
    assert_eq!(options.aa.value(), Some(0.25));
    assert_eq!(options.to_radiance(), "-ab 3 -aa 0.25 -I");
}

#[test]
fn round_trip_is_whitespace_and_order_canonical() {
    let mut options = RtraceOptions::default();
    options
        .update_from_string("  -I   -ab 2 -aa 0.1   -ad 1024 ")
        .unwrap();
    let rendered = options.to_radiance();
    assert_eq!(rendered, "-ab 2 -ad 1024 -aa 0.1 -I");

    let mut reparsed = RtraceOptions::default();
    reparsed.update_from_string(&rendered).unwrap();
    assert_eq!(reparsed.to_radiance(), rendered);
}

#[test]
fn unknown_flags_pass_through_for_open_schemas() {
    let mut options = RtraceOptions::default();
    options.update_from_string("-ab 2 -dv- -dp 512").unwrap();
    assert_eq!(options.to_radiance(), "-ab 2 -dv- -dp 512");
}

#[test]
fn unknown_flags_reject_for_closed_schemas() {
    let mut options = RmtxopOptions::default();
    assert!(matches!(
        options.update_from_string("-fa -q"),
        Err(RadianceError::InvalidValue { .. })
    ));
}

#[test]
fn negative_values_are_not_mistaken_for_flags() {
    let mut options = RcontribOptions::default();
    options.update_from_string("-lr -10 -m sky_glow").unwrap();
    assert_eq!(options.lr.value(), Some(-10));
    assert_eq!(options.m.values(), ["sky_glow"]);
}

#[test]
fn type_errors_surface_from_parsing() {
    let mut options = RtraceOptions::default();
    assert!(matches!(
        options.update_from_string("-ab many"),
        Err(RadianceError::Type { .. })
    ));
    // the failed token did not disturb the option
    assert_eq!(options.ab.value(), None);
}

#[test]
fn out_of_range_values_are_rejected_with_state_intact() {
    let mut options = RtraceOptions::default();
    options.ab.set(4).unwrap();
    assert!(matches!(
        options.update_from_string("-ab -1"),
        Err(RadianceError::Range { .. })
    ));
    assert_eq!(options.ab.value(), Some(4));
}
