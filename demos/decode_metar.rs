use chrono::{TimeZone, Utc};
use metar_taf::{metars_to_frame, parse_metar, FrameOptions, MetarTafError, ReportFrame, TabularError};
use std::env;

fn main() -> Result<(), MetarTafError> {
    configure_polars_display();

    let metar = parse_metar("EGLL 051820Z 24025G38KT 210V280 6000 RA BKN012 15/10 Q0998 NOSIG")?;
    println!("{} at {}", metar.station(), metar.time());
    if let Some(wind) = metar.wind() {
        let direction = wind.direction().angle().map(|a| a.compass()).unwrap_or("VRB");
        println!("wind {direction} {:?} gusting {:?}", wind.speed(), wind.gust());
    }
    for weather in metar.weather() {
        println!("weather {weather}");
    }

    let metars = [
        metar,
        parse_metar("EHAM 051825Z 02007KT 9999 FEW017 06/03 Q1042")?,
        parse_metar("EHAM 051855Z 03009KT 8000 -RA BKN009 06/04 Q1041")?,
    ];
    let options = FrameOptions::builder()
        .reference(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
        .build();
    let frame = ReportFrame::from(metars_to_frame(&metars, &options)?);

    let schiphol = frame
        .for_station("EHAM")
        .frame
        .collect()
        .map_err(TabularError::from)?;
    println!("{:#?}", schiphol);

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
}
