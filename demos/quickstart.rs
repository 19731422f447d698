use chrono::Local;
use gnsscal::{date_to_year_doy, BdsWeek, GpsWeek};

fn main() -> gnsscal::Result<()> {
    let today = Local::now().date_naive();
    let gps = GpsWeek::from_date(today)?;
    let bds = BdsWeek::from_date(today)?;

    println!("Date: {today}");
    println!("Year, DOY: {}", date_to_year_doy(today));
    println!("{gps}");
    println!("{bds}");
    println!("GPS week {} starts on {}", gps.week(), gps.start_of_week().to_date()?);
    Ok(())
}
