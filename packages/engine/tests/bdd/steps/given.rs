//! Given step definitions
//!
//! Steps that set up the heirs for a scenario.

use cucumber::{gherkin::Step, given};

use crate::helpers::heir_table::parse_heir_table;
use crate::world::FeraizWorld;

#[given("the deceased left the following heirs:")]
fn set_heirs(world: &mut FeraizWorld, step: &Step) {
    if let Some(table) = &step.table {
        world.entries.extend(parse_heir_table(table));
    }
}

#[given(regex = r#"^the deceased left (\d+) "(\w+)"$"#)]
fn add_heir(world: &mut FeraizWorld, count: u64, heir: String) {
    world.entries.push((heir, count));
}

#[given("the deceased left no heirs")]
fn no_heirs(world: &mut FeraizWorld) {
    world.entries.clear();
}
