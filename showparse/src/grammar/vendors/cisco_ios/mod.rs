//! Cisco IOS switch support.

mod grammar;
mod parser;

pub use grammar::{
    CDP, ETHERCHANNELS, INTERFACE_ABBREVIATIONS, INTERFACES, PORT_CHANNEL_FLAGS, TRANSCEIVERS,
    grammar, interface_abbreviations, port_channel_legend, prompt,
};
pub use parser::CiscoIos;
