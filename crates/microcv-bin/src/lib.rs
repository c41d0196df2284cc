//! Command line front-end for the microcv crates
//!
//! Decodes an input image, applies the requested transforms in a
//! fixed order and encodes the result, with formats picked from the
//! filename extensions.
use std::process::exit;

use log::error;

use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    let result = create_and_exec_workflow_from_cmd(&options);

    if let Err(reason) = result {
        println!();
        error!(" Could not complete workflow, reason {:?}", reason);

        println!();
        exit(-1);
    }
}
