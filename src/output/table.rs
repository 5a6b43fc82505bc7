//! Table output for gateway inventory

use comfy_table::{presets::NOTHING, Table};

use crate::mist::{Gateway, MistResource};

/// Numbered gateway inventory table used by the selection menu
pub fn gateway_table(gateways: &[Gateway]) -> String {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["#", "Name", "MAC", "ID", "Model", "Status"]);

    for (idx, gw) in gateways.iter().enumerate() {
        let number = format!("[{}]", idx + 1);
        let id = gw.id();
        table.add_row(vec![
            number.as_str(),
            gw.name(),
            gw.mac(),
            id.as_str(),
            gw.model(),
            gw.status(),
        ]);
    }

    table.to_string()
}
