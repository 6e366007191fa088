use crate::parser::decoder::Group;
use crate::types::cloud::CloudLayer;
use crate::types::conditions::Conditions;
use crate::types::visibility::Visibility;

/// Adds a decoded group to a partial condition set.
///
/// Groups that do not describe a condition, or that repeat an attribute
/// already stated, are handed back to the caller.
pub(crate) fn absorb(conditions: &mut Conditions, group: Group) -> Result<(), Group> {
    match group {
        Group::Wind(wind) if conditions.wind.is_none() => conditions.wind = Some(wind),
        Group::Visibility(reading) => {
            conditions.visibility = match conditions.visibility {
                None => Some(Visibility::reported(reading)),
                Some(current) => match current.with_minimum(reading) {
                    Some(combined) => Some(combined),
                    None => return Err(Group::Visibility(reading)),
                },
            }
        }
        Group::UnknownVisibility if conditions.visibility.is_none() => {
            conditions.visibility = Some(Visibility::Unknown)
        }
        Group::Cavok if conditions.visibility.is_none() => {
            conditions.visibility = Some(Visibility::Cavok)
        }
        Group::Weather(phenomenon) => conditions
            .weather
            .get_or_insert_with(Vec::new)
            .push(phenomenon),
        Group::NoSignificantWeather if conditions.weather.is_none() => {
            conditions.weather = Some(Vec::new())
        }
        Group::Cloud(CloudLayer::Clear(_)) => {
            conditions.clouds.get_or_insert_with(Vec::new);
        }
        Group::Cloud(layer) => conditions.clouds.get_or_insert_with(Vec::new).push(layer),
        Group::WindShear(shear) if conditions.wind_shear.is_none() => {
            conditions.wind_shear = Some(shear)
        }
        other => return Err(other),
    }
    Ok(())
}
