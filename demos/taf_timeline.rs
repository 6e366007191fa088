use metar_taf::{parse_taf, Interchange, MetarTafError, Taf};

fn main() -> Result<(), MetarTafError> {
    let taf = parse_taf(
        "TAF KJFK 041130Z 0412/0518 21005KT 3SM RA OVC010 \
         FM041800 27012KT P6SM NSW BKN030 \
         TEMPO 0420/0424 4SM -SHRA PROB30 0502/0506 1SM TSRA OVC008CB",
    )?;

    println!("{} valid {}", taf.station(), taf.validity());
    for period in taf.periods() {
        let conditions = period.conditions();
        let visibility = conditions
            .visibility()
            .and_then(|v| v.metres())
            .map(|m| format!("{m:.0} m"))
            .unwrap_or_else(|| "-".to_string());
        let weather: Vec<String> = conditions
            .weather()
            .unwrap_or_default()
            .iter()
            .map(ToString::to_string)
            .collect();
        println!(
            "{:<10} {:<7} visibility {:<8} weather {}",
            period.validity().to_string(),
            period.provenance().to_string(),
            visibility,
            weather.join(" ")
        );
    }

    let json = taf.to_json_pretty()?;
    let restored = Taf::from_json(&json)?;
    assert_eq!(restored, taf);
    println!("{} bytes of JSON", json.len());

    Ok(())
}
