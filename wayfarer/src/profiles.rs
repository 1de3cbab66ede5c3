use comfy_table::{Table, presets::UTF8_FULL};
use wayfarer_core::weighting::weighting_profiles;

pub fn run() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Profile", "Mode", "Speed cap", "Description"]);

    for profile in weighting_profiles() {
        let weighting = profile.weighting();
        let speed_cap = weighting
            .maximum_speed()
            .map(|speed| format!("{speed} km/h"))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            profile.key().to_string(),
            weighting.mode().to_string(),
            speed_cap,
            profile.description().to_string(),
        ]);
    }

    println!("{table}");
}
