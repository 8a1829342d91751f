//! Interactive option picker

use dialoguer::MultiSelect;
use multiselect::OptionRecord;

/// Let the user toggle options; checked rows start selected.
///
/// Returns the picked rows in option order, or `None` if the prompt was
/// aborted.
pub fn pick_options(options: &[OptionRecord]) -> Option<Vec<OptionRecord>> {
    let items: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    let defaults: Vec<bool> = options.iter().map(|o| o.checked).collect();

    println!("\nSelect options (use space to toggle, enter to confirm):");
    let picked = MultiSelect::new()
        .items(&items)
        .defaults(&defaults)
        .interact_opt()
        .ok()
        .flatten()?;

    Some(
        picked
            .into_iter()
            .filter_map(|i| options.get(i))
            .map(|o| OptionRecord {
                checked: true,
                ..o.clone()
            })
            .collect(),
    )
}
