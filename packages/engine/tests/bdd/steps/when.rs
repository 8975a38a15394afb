//! When step definitions
//!
//! Steps that run the engine.

use cucumber::when;

use crate::world::FeraizWorld;

#[when("the estate is distributed")]
fn distribute_estate(world: &mut FeraizWorld) {
    world.distribute();
}
