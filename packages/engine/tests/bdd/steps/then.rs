//! Then step definitions
//!
//! Steps that verify shares, the reasoning log and errors.

use cucumber::then;
use feraiz_engine::{Fraction, Stage};

use crate::world::FeraizWorld;

fn parse_stage(name: &str) -> Stage {
    match name {
        "blocking" => Stage::Blocking,
        "fixed_share" => Stage::FixedShare,
        "adjustment" => Stage::Adjustment,
        "residuary" => Stage::Residuary,
        "return" => Stage::Return,
        other => panic!("Unknown stage in scenario: {other}"),
    }
}

// =============================================================================
// Shares
// =============================================================================

#[then(regex = r#"^the share of "(\w+)" is "(\d+/\d+)"$"#)]
fn assert_share(world: &mut FeraizWorld, heir: String, expected: String) {
    let actual = world.share(&heir).map(|f| f.to_string());
    assert_eq!(
        actual.as_deref(),
        Some(expected.as_str()),
        "Unexpected share for {heir}"
    );
}

#[then(regex = r#"^each "(\w+)" receives "(\d+/\d+)"$"#)]
fn assert_per_heir(world: &mut FeraizWorld, heir: String, expected: String) {
    let key = heir.parse().unwrap();
    let actual = world
        .result()
        .per_heir(key, &world.counts)
        .unwrap()
        .map(|f| f.to_string());
    assert_eq!(actual.as_deref(), Some(expected.as_str()));
}

#[then(regex = r#"^"(\w+)" receives nothing$"#)]
fn assert_no_share(world: &mut FeraizWorld, heir: String) {
    let share = world.share(&heir);
    assert!(
        share.map_or(true, |f| f.is_zero()),
        "Expected {heir} to receive nothing, got {share:?}"
    );
}

#[then("the shares sum to the whole estate")]
fn assert_whole_estate(world: &mut FeraizWorld) {
    assert_eq!(world.result().total().unwrap(), Fraction::ONE);
    assert!(world.result().unassigned().is_zero());
}

#[then("no share is assigned")]
fn assert_no_shares(world: &mut FeraizWorld) {
    assert!(
        world.result().shares().is_empty(),
        "Expected no shares, got {:?}",
        world.result().shares()
    );
}

#[then(regex = r#"^"(\d+/\d+)" of the estate is left unassigned$"#)]
fn assert_unassigned(world: &mut FeraizWorld, expected: String) {
    assert_eq!(world.result().unassigned().to_string(), expected);
}

// =============================================================================
// Reasoning log
// =============================================================================

#[then(regex = r#"^the reasoning log mentions "(.+)"$"#)]
fn assert_log_mentions(world: &mut FeraizWorld, text: String) {
    let log = world.result().log();
    assert!(
        log.messages().any(|m| m.contains(&text)),
        "Expected the log to mention {text:?}, got:\n{}",
        log.render()
    );
}

#[then(regex = r#"^the reasoning log has (\d+) "(\w+)" entr(?:y|ies)$"#)]
fn assert_log_stage_count(world: &mut FeraizWorld, expected: usize, stage: String) {
    let actual = world.result().log().for_stage(parse_stage(&stage)).count();
    assert_eq!(actual, expected, "Unexpected number of {stage} entries");
}

#[then("the reasoning log is empty")]
fn assert_log_empty(world: &mut FeraizWorld) {
    assert!(world.result().log().is_empty());
}

// =============================================================================
// Errors
// =============================================================================

#[then(regex = r#"^the calculation is rejected with "(.+)"$"#)]
fn assert_rejected(world: &mut FeraizWorld, expected: String) {
    let message = world
        .error_message()
        .unwrap_or_else(|| panic!("Expected an error, got {:?}", world.result));
    assert!(
        message.contains(&expected),
        "Expected error containing {expected:?}, got {message:?}"
    );
}
