use crate::output::{print_json, print_table};
use folio_core::catalog::{Choice, INTENT_OPTIONS, LOCATION_OPTIONS};

pub fn run(json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "intents": INTENT_OPTIONS,
            "locations": LOCATION_OPTIONS,
        }));
    }

    let rows = |options: &[Choice]| {
        options
            .iter()
            .map(|c| {
                vec![
                    c.value.to_string(),
                    c.label.to_string(),
                    c.description.to_string(),
                ]
            })
            .collect::<Vec<_>>()
    };

    println!("Intent (--intent)");
    print_table(&["VALUE", "LABEL", "DESCRIPTION"], rows(INTENT_OPTIONS));
    println!();
    println!("Location (--location)");
    print_table(&["VALUE", "LABEL", "DESCRIPTION"], rows(LOCATION_OPTIONS));
    Ok(())
}
