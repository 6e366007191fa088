//! Column accumulators shared by the METAR and TAF frames.

use crate::tabular::error::TabularError;
use crate::types::cloud::{ceiling, Ceiling, CloudLayer};
use crate::types::conditions::Conditions;
use crate::types::metar::Metar;
use crate::types::visibility::Visibility;
use crate::types::weather::WeatherPhenomenon;
use crate::types::wind::{Wind, WindDirection};
use chrono::{DateTime, Utc};
use polars::prelude::{Column, DataType, TimeUnit};

/// Ceiling written for a sky without any covering layer.
pub const UNLIMITED_CEILING_METRES: f64 = 10_000.0;

type Feature = (&'static str, fn(&WeatherPhenomenon) -> bool);

/// Boolean columns derived from the weather list, true when any phenomenon
/// matches.
const FEATURES: [Feature; 10] = [
    ("precipitation", WeatherPhenomenon::has_precipitation),
    ("obscuration", has_obscuration),
    ("other", has_other),
    ("thunderstorms", WeatherPhenomenon::is_thunderstorm),
    ("freezing", WeatherPhenomenon::is_freezing),
    ("showers", WeatherPhenomenon::is_showers),
    ("snow", WeatherPhenomenon::has_snow),
    ("ice", WeatherPhenomenon::has_ice),
    ("hail", WeatherPhenomenon::has_hail),
    ("fog", WeatherPhenomenon::has_fog),
];

fn has_obscuration(phenomenon: &WeatherPhenomenon) -> bool {
    phenomenon.obscuration().is_some()
}

fn has_other(phenomenon: &WeatherPhenomenon) -> bool {
    phenomenon.other().is_some()
}

/// The attributes of one row that both report kinds share.
pub(crate) struct ConditionsRow<'a> {
    wind: Option<&'a Wind>,
    visibility: Option<&'a Visibility>,
    weather: Option<&'a [WeatherPhenomenon]>,
    clouds: Option<&'a [CloudLayer]>,
    wind_shear: bool,
}

impl<'a> From<&'a Conditions> for ConditionsRow<'a> {
    fn from(conditions: &'a Conditions) -> Self {
        Self {
            wind: conditions.wind(),
            visibility: conditions.visibility(),
            weather: conditions.weather(),
            clouds: conditions.clouds(),
            wind_shear: conditions.wind_shear().is_some(),
        }
    }
}

impl<'a> From<&'a Metar> for ConditionsRow<'a> {
    fn from(metar: &'a Metar) -> Self {
        Self {
            wind: metar.wind(),
            visibility: metar.visibility(),
            weather: Some(metar.weather()),
            clouds: Some(metar.clouds()),
            wind_shear: !metar.wind_shear().is_empty(),
        }
    }
}

impl ConditionsRow<'_> {
    fn ceiling_metres(&self) -> Option<f64> {
        let resolved = match (self.clouds, self.visibility) {
            (Some(layers), _) => ceiling(layers),
            (None, Some(Visibility::Cavok)) => Ceiling::Unlimited,
            (None, _) => return None,
        };
        match resolved {
            Ceiling::Height(height) => Some(height.to_metres()),
            Ceiling::Unlimited => Some(UNLIMITED_CEILING_METRES),
            Ceiling::Unknown => None,
        }
    }
}

fn lowest_layer_code(layer: &CloudLayer) -> Option<&'static str> {
    match layer {
        CloudLayer::Layer { cover, .. } => cover.map(|cover| cover.code()),
        CloudLayer::VerticalVisibility { .. } => Some("VV"),
        CloudLayer::Clear(clear) => Some(clear.code()),
    }
}

#[derive(Default)]
pub(crate) struct ConditionColumns {
    wind_direction: Vec<Option<i32>>,
    wind_compass: Vec<Option<&'static str>>,
    wind_variable: Vec<Option<bool>>,
    wind_speed: Vec<Option<f64>>,
    wind_gust: Vec<Option<f64>>,
    visibility: Vec<Option<f64>>,
    cavok: Vec<Option<bool>>,
    ceiling: Vec<Option<f64>>,
    cloud_amount: Vec<Option<&'static str>>,
    vertical_visibility: Vec<Option<f64>>,
    convective: Vec<Option<bool>>,
    wind_shear: Vec<bool>,
    weather: Vec<Vec<Option<String>>>,
    features: Vec<Vec<Option<bool>>>,
}

impl ConditionColumns {
    pub(crate) fn new(max_weather: usize) -> Self {
        Self {
            weather: vec![Vec::new(); max_weather],
            features: vec![Vec::new(); FEATURES.len()],
            ..Self::default()
        }
    }

    pub(crate) fn push(&mut self, row: ConditionsRow<'_>) {
        let direction = row.wind.map(Wind::direction);
        self.wind_direction
            .push(direction.and_then(|d| d.angle()).map(|a| i32::from(a.value())));
        self.wind_compass
            .push(direction.and_then(|d| d.angle()).map(|a| a.compass()));
        self.wind_variable.push(row.wind.map(|wind| {
            wind.direction() == WindDirection::Variable || wind.variable_range().is_some()
        }));
        self.wind_speed
            .push(row.wind.and_then(Wind::speed).map(|s| s.metres_per_second()));
        self.wind_gust
            .push(row.wind.and_then(Wind::gust).map(|s| s.metres_per_second()));

        self.visibility.push(row.visibility.and_then(Visibility::metres));
        self.cavok.push(row.visibility.map(Visibility::is_cavok));

        self.ceiling.push(row.ceiling_metres());
        self.cloud_amount
            .push(row.clouds.and_then(<[_]>::first).and_then(lowest_layer_code));
        self.vertical_visibility.push(row.clouds.and_then(|layers| {
            layers.iter().find_map(|layer| match layer {
                CloudLayer::VerticalVisibility { height } => height.map(|h| h.to_metres()),
                _ => None,
            })
        }));
        self.convective.push(
            row.clouds
                .map(|layers| layers.iter().any(|layer| layer.convective().is_some())),
        );
        self.wind_shear.push(row.wind_shear);

        for (index, codes) in self.weather.iter_mut().enumerate() {
            codes.push(row.weather.and_then(|w| w.get(index)).map(WeatherPhenomenon::code));
        }
        for ((_, predicate), values) in FEATURES.iter().zip(self.features.iter_mut()) {
            values.push(row.weather.map(|w| w.iter().any(predicate)));
        }
    }

    pub(crate) fn into_columns(self) -> Vec<Column> {
        let mut columns = vec![
            Column::new("wind_direction".into(), self.wind_direction),
            Column::new("wind_compass".into(), self.wind_compass),
            Column::new("wind_variable".into(), self.wind_variable),
            Column::new("wind_speed".into(), self.wind_speed),
            Column::new("wind_gust".into(), self.wind_gust),
            Column::new("visibility".into(), self.visibility),
            Column::new("cavok".into(), self.cavok),
            Column::new("ceiling".into(), self.ceiling),
            Column::new("cloud_amount".into(), self.cloud_amount),
            Column::new("vertical_visibility".into(), self.vertical_visibility),
            Column::new("convective".into(), self.convective),
            Column::new("wind_shear".into(), self.wind_shear),
        ];
        for (index, codes) in self.weather.into_iter().enumerate() {
            columns.push(Column::new(format!("weather_{index}").into(), codes));
        }
        for ((name, _), values) in FEATURES.iter().zip(self.features) {
            columns.push(Column::new((*name).into(), values));
        }
        columns
    }
}

/// Builds a millisecond UTC datetime column.
pub(crate) fn datetime_column(
    name: &str,
    values: &[Option<DateTime<Utc>>],
) -> Result<Column, TabularError> {
    let millis: Vec<Option<i64>> = values
        .iter()
        .map(|value| value.map(|dt| dt.timestamp_millis()))
        .collect();
    Column::new(name.into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))
        .map_err(|source| TabularError::Column {
            column: name.to_string(),
            source,
        })
}
