pub mod cloud;
pub mod conditions;
pub mod forecast;
pub mod metar;
pub mod runway;
pub mod taf;
pub mod temperature;
pub mod time;
pub mod trend;
pub mod units;
pub mod visibility;
pub mod weather;
pub mod wind;
