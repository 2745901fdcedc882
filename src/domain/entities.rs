use serde::{Deserialize, Serialize};
use time::{macros::format_description, PrimitiveDateTime};

/// Lifecycle stage of a shipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Pending,
    InTransit,
    Delivered,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InTransit, Status::Delivered];

    /// Wire value used by the UI widgets (`pending`, `in_transit`, `delivered`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InTransit => "in_transit",
            Status::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Awaiting dispatch",
            Status::InTransit => "In transit",
            Status::Delivered => "Delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Closed set of cities shipments move between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Moscow,
    SaintPetersburg,
    Kazan,
    NizhnyNovgorod,
    Yekaterinburg,
    Novosibirsk,
    Chelyabinsk,
    Samara,
    Ufa,
    Omsk,
}

impl City {
    pub const ALL: [City; 10] = [
        City::Moscow,
        City::SaintPetersburg,
        City::Kazan,
        City::NizhnyNovgorod,
        City::Yekaterinburg,
        City::Novosibirsk,
        City::Chelyabinsk,
        City::Samara,
        City::Ufa,
        City::Omsk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            City::Moscow => "Moscow",
            City::SaintPetersburg => "Saint Petersburg",
            City::Kazan => "Kazan",
            City::NizhnyNovgorod => "Nizhny Novgorod",
            City::Yekaterinburg => "Yekaterinburg",
            City::Novosibirsk => "Novosibirsk",
            City::Chelyabinsk => "Chelyabinsk",
            City::Samara => "Samara",
            City::Ufa => "Ufa",
            City::Omsk => "Omsk",
        }
    }

    pub fn parse(value: &str) -> Option<City> {
        City::ALL.into_iter().find(|city| city.name() == value)
    }
}

/// A registered shipment. Only `status` ever changes after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CargoRecord {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub origin: City,
    pub destination: City,
    pub departure: PrimitiveDateTime,
}

/// Uncommitted form input for a new shipment.
///
/// `departure` keeps the raw `datetime-local` widget string; a value that does
/// not parse counts as unset for validation purposes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftCargo {
    pub name: String,
    pub origin: Option<City>,
    pub destination: Option<City>,
    pub departure: String,
}

impl DraftCargo {
    pub fn parsed_departure(&self) -> Option<PrimitiveDateTime> {
        parse_departure(&self.departure)
    }

    pub fn clear(&mut self) {
        *self = DraftCargo::default();
    }
}

/// Parses a `datetime-local` value, e.g. `2024-11-24T08:00`, with or without
/// a seconds component.
pub fn parse_departure(input: &str) -> Option<PrimitiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let minutes = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    let seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(trimmed, minutes)
        .or_else(|_| PrimitiveDateTime::parse(trimmed, seconds))
        .ok()
}

/// Table display form, `24.11.2024 08:00`.
pub fn format_departure(value: PrimitiveDateTime) -> String {
    format!(
        "{:02}.{:02}.{} {:02}:{:02}",
        value.day(),
        value.month() as u8,
        value.year(),
        value.hour(),
        value.minute()
    )
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn status_round_trips_through_wire_values() {
        for status in Status::ALL {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::parse("lost"), None);
    }

    #[test]
    fn city_set_is_closed() {
        assert_eq!(City::ALL.len(), 10);
        assert_eq!(City::parse("Saint Petersburg"), Some(City::SaintPetersburg));
        assert_eq!(City::parse("Atlantis"), None);
    }

    #[test]
    fn departure_parses_datetime_local_values() {
        assert_eq!(
            parse_departure("2024-11-24T08:00"),
            Some(datetime!(2024-11-24 08:00))
        );
        assert_eq!(
            parse_departure("2024-11-26T10:30:15"),
            Some(datetime!(2024-11-26 10:30:15))
        );
        assert_eq!(parse_departure(""), None);
        assert_eq!(parse_departure("   "), None);
        assert_eq!(parse_departure("tomorrow-ish"), None);
    }

    #[test]
    fn departure_formats_for_the_table() {
        assert_eq!(
            format_departure(datetime!(2024-11-24 08:00)),
            "24.11.2024 08:00"
        );
    }
}
