//! Benefits catalogue offered by the posting form.

pub const PREDEFINED_BENEFITS: [&str; 7] = [
    "Medical Insurance",
    "Vision Insurance",
    "Dental Insurance",
    "401(k)",
    "Paid Time Off",
    "Remote Flexibility",
    "Gym Membership",
];

/// Merges the free-text `base`, the picked catalogue items and the comma-separated
/// custom items into one ", "-joined list. Order is preserved, blanks are dropped.
pub fn compose_benefits(base: &str, selected: &[String], custom: &str) -> String {
    let base = base.trim();
    let from_base = (!base.is_empty()).then_some(base);

    let from_selected = selected.iter().map(|b| b.trim()).filter(|b| !b.is_empty());

    let from_custom = custom.split(',').map(str::trim).filter(|b| !b.is_empty());

    from_base
        .into_iter()
        .chain(from_selected)
        .chain(from_custom)
        .collect::<Vec<_>>()
        .join(", ")
}
