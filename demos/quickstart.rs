use chrono::{Datelike, Utc};
use lunisolar::{
    chinese_new_year, convert_gregorian_to_chinese, moon_phase_at, new_moon_at_or_after,
    ChinaStandard, Instant, Universal,
};

fn main() -> lunisolar::Result<()> {
    let now = Utc::now();
    let today = convert_gregorian_to_chinese(now.year(), now.month(), now.day())?;
    let phase = moon_phase_at(now);

    println!("Chinese date: {today}");
    if let (Some(month), Some(day)) = (today.month_label(), today.day_label()) {
        println!("Label: {month}{day}");
    }
    println!("New year {}: {}", now.year(), chinese_new_year(now.year())?);

    println!(
        "Moon: {} ({:.1}% lit, {:.1} days old)",
        phase.phase_name,
        phase.illumination * 100.0,
        phase.age_days
    );

    let ut = Instant::<Universal>::from_utc(now);
    let next = new_moon_at_or_after(ut)?;
    println!("Next new moon: {}", next.to::<ChinaStandard>());
    println!("ΔT: {}", ut.delta_t());
    Ok(())
}
