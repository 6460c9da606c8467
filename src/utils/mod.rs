pub mod error;
pub mod format;
pub mod output;

pub use output::*;

use crate::utils::error::{handle_flow, FlowResult};

pub fn handle_empty_list(item_type: &str) {
    handle_flow(FlowResult::EmptyList {
        item_type: item_type.to_string(),
    });
}

