//! Conversion between wire payloads and the domain model.

use crate::domain::{
    Coordinate, DayNumber, InvalidCoordinate, InvalidDayNumber, Itinerary, ItineraryDay,
};

use super::types::{DayPayload, LocationPayload};

/// Why a payload entry was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayloadErrorKind {
    #[error(transparent)]
    DayNumber(#[from] InvalidDayNumber),

    #[error("start_location: {0}")]
    Start(InvalidCoordinate),

    #[error("end_location: {0}")]
    End(InvalidCoordinate),
}

/// A rejected itinerary payload, naming the offending entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("itinerary entry {index}: {kind}")]
pub struct PayloadError {
    pub index: usize,
    pub kind: PayloadErrorKind,
}

impl TryFrom<LocationPayload> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(location: LocationPayload) -> Result<Self, Self::Error> {
        Coordinate::new(location.latitude, location.longitude)
    }
}

impl From<Coordinate> for LocationPayload {
    fn from(coordinate: Coordinate) -> Self {
        Self {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
        }
    }
}

impl TryFrom<DayPayload> for ItineraryDay {
    type Error = PayloadErrorKind;

    fn try_from(payload: DayPayload) -> Result<Self, Self::Error> {
        let day = DayNumber::new(payload.day)?;
        let start = payload
            .start_location
            .map(Coordinate::try_from)
            .transpose()
            .map_err(PayloadErrorKind::Start)?;
        let end = payload
            .end_location
            .map(Coordinate::try_from)
            .transpose()
            .map_err(PayloadErrorKind::End)?;

        Ok(ItineraryDay {
            day,
            description: payload.description,
            start,
            end,
        })
    }
}

impl From<&ItineraryDay> for DayPayload {
    fn from(day: &ItineraryDay) -> Self {
        Self {
            day: day.day.get(),
            description: day.description.clone(),
            start_location: day.start.map(LocationPayload::from),
            end_location: day.end.map(LocationPayload::from),
        }
    }
}

impl TryFrom<Vec<DayPayload>> for Itinerary {
    type Error = PayloadError;

    fn try_from(payload: Vec<DayPayload>) -> Result<Self, Self::Error> {
        payload
            .into_iter()
            .enumerate()
            .map(|(index, day)| {
                ItineraryDay::try_from(day).map_err(|kind| PayloadError { index, kind })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Itinerary::new)
    }
}

impl From<&Itinerary> for Vec<DayPayload> {
    fn from(itinerary: &Itinerary) -> Self {
        itinerary.iter().map(DayPayload::from).collect()
    }
}
