//! ArubaOS-Switch support.

mod grammar;
mod parser;

pub use grammar::{
    MODULES, POWER_SUPPLIES, STACKING, TRANSCEIVERS, grammar, modules_schema,
    power_supplies_schema, prompt, stacking_schema, transceivers_schema,
};
pub use parser::ArubaOsSwitch;
