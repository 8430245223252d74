use profile_score::{score, ProfileSnapshot};
use serde_json::json;

const SLOTS: usize = 14;

/// Builds a snapshot with the fields selected by `mask` filled in.
fn snapshot_from_mask(mask: u32) -> ProfileSnapshot {
    let filled = |bit: usize| mask & (1 << bit) != 0;
    let text = |bit: usize, value: &str| {
        Some(if filled(bit) { value } else { " " }.to_string())
    };
    ProfileSnapshot {
        first_name: text(0, "Jane"),
        last_name: text(1, "Doe"),
        email: text(2, "jane@example.com"),
        phone: text(3, "555-1234"),
        street_address: text(4, "100 Foundry Rd"),
        city: text(5, "Hamilton"),
        state_province: text(6, "Ontario"),
        zip_code: text(7, "L8N 1A1"),
        country: text(8, "Canada"),
        position: text(9, "Welder"),
        department: text(10, "Fabrication"),
        bio: text(11, "Night shift lead."),
        education: Some(if filled(12) { vec![json!({})] } else { vec![] }),
        work_history: Some(if filled(13) { vec![json!({})] } else { vec![] }),
    }
}

#[test]
fn every_field_combination_stays_in_bounds_and_is_monotonic() {
    for mask in 0..(1u32 << SLOTS) {
        let result = score(Some(&snapshot_from_mask(mask)));
        assert!(result.percent <= 100, "mask {mask:#b} scored {}", result.percent);

        for bit in 0..SLOTS {
            if mask & (1 << bit) == 0 {
                let fuller = score(Some(&snapshot_from_mask(mask | (1 << bit))));
                assert!(
                    fuller.percent >= result.percent,
                    "filling bit {bit} of {mask:#b} lowered {} to {}",
                    result.percent,
                    fuller.percent
                );
            }
        }
    }
}

#[test]
fn only_the_full_mask_earns_every_badge() {
    let full = (1u32 << SLOTS) - 1;
    let result = score(Some(&snapshot_from_mask(full)));
    assert_eq!(result.percent, 100);
    assert!(result.details.all());

    let blank = score(Some(&snapshot_from_mask(0)));
    assert_eq!(blank, score(None));
}

#[test]
fn address_badge_needs_three_fields_but_full_credit_needs_five() {
    let three = (1 << 4) | (1 << 5) | (1 << 6);
    let result = score(Some(&snapshot_from_mask(three)));
    assert!(result.details.address);
    assert_eq!(result.percent, 9);

    let five = three | (1 << 7) | (1 << 8);
    assert_eq!(score(Some(&snapshot_from_mask(five))).percent, 15);
}
