use thiserror::Error;
use time::{macros::datetime, PrimitiveDateTime};

use super::entities::{CargoRecord, City, DraftCargo, Status};
use super::view::{page_view, PageView, StatusFilter};

/// Record ids look like `CARGO007`: prefix plus zero-padded sequence number.
const ID_PREFIX: &str = "CARGO";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("fill in all fields")]
    MissingFields,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot mark as delivered: the departure date has not arrived yet")]
    DepartureNotReached,
}

/// The whole board state: registered shipments, the in-progress draft, and the
/// view controls (filter + page). Event handlers are the only mutation points.
#[derive(Clone, Debug)]
pub struct CargoStore {
    pub records: Vec<CargoRecord>,
    pub draft: DraftCargo,
    pub filter: StatusFilter,
    /// 1-based; never clamped, pages past the end just render empty.
    pub page: usize,
    /// Inline form error, cleared by the next successful submit.
    pub form_error: Option<ValidationError>,
    /// Monotonic id counter. Decoupled from `records` so ids stay unique even
    /// if the list shape ever changes.
    next_seq: u32,
}

impl Default for CargoStore {
    fn default() -> Self {
        Self::with_records(Vec::new())
    }
}

impl CargoStore {
    /// Builds a store over existing records, seeding the id counter from the
    /// highest sequence number already present.
    pub fn with_records(records: Vec<CargoRecord>) -> Self {
        let next_seq = records
            .iter()
            .filter_map(|record| parse_sequence(&record.id))
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            records,
            draft: DraftCargo::default(),
            filter: StatusFilter::All,
            page: 1,
            form_error: None,
            next_seq,
        }
    }

    /// Commits the draft as a new pending shipment.
    ///
    /// Rejects the submit without touching the record list when any field is
    /// empty or unset; the error stays on the store for inline display until
    /// the next successful submit clears it.
    pub fn submit_draft(&mut self) -> Result<String, ValidationError> {
        let name = self.draft.name.trim().to_string();
        let (Some(origin), Some(destination), Some(departure)) = (
            self.draft.origin,
            self.draft.destination,
            self.draft.parsed_departure(),
        ) else {
            return Err(self.reject_draft());
        };
        if name.is_empty() {
            return Err(self.reject_draft());
        }

        let id = self.next_id();
        self.records.push(CargoRecord {
            id: id.clone(),
            name,
            status: Status::Pending,
            origin,
            destination,
            departure,
        });
        self.draft.clear();
        self.form_error = None;
        Ok(id)
    }

    /// Moves a shipment to `status`.
    ///
    /// `delivered` is only reachable once the departure date has passed; a
    /// premature attempt changes nothing. Every other transition is allowed,
    /// including moving a delivered shipment back. Unknown ids are ignored.
    pub fn set_status(
        &mut self,
        id: &str,
        status: Status,
        now: PrimitiveDateTime,
    ) -> Result<(), TransitionError> {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            return Ok(());
        };
        if status == Status::Delivered && record.departure > now {
            return Err(TransitionError::DepartureNotReached);
        }
        record.status = status;
        Ok(())
    }

    /// Changing the filter always snaps back to the first page.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Derives the page the table should show right now. Pure recomputation
    /// over the raw state, nothing cached.
    pub fn current_page(&self) -> PageView {
        page_view(&self.records, self.filter, self.page)
    }

    fn next_id(&mut self) -> String {
        let id = format!("{ID_PREFIX}{:03}", self.next_seq);
        self.next_seq += 1;
        id
    }

    fn reject_draft(&mut self) -> ValidationError {
        self.form_error = Some(ValidationError::MissingFields);
        ValidationError::MissingFields
    }
}

fn parse_sequence(id: &str) -> Option<u32> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}

/// The two shipments the board boots with.
pub fn seed_records() -> Vec<CargoRecord> {
    vec![
        CargoRecord {
            id: "CARGO001".to_string(),
            name: "Construction materials".to_string(),
            status: Status::InTransit,
            origin: City::Moscow,
            destination: City::Kazan,
            departure: datetime!(2024-11-24 08:00),
        },
        CargoRecord {
            id: "CARGO002".to_string(),
            name: "Fragile goods".to_string(),
            status: Status::Pending,
            origin: City::SaintPetersburg,
            destination: City::Yekaterinburg,
            departure: datetime!(2024-11-26 10:30),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> DraftCargo {
        DraftCargo {
            name: "Machine parts".to_string(),
            origin: Some(City::Samara),
            destination: Some(City::Omsk),
            departure: "2024-12-01T09:15".to_string(),
        }
    }

    fn seeded_store() -> CargoStore {
        CargoStore::with_records(seed_records())
    }

    #[test]
    fn ids_continue_from_the_seeded_records() {
        let mut store = seeded_store();
        store.draft = filled_draft();
        assert_eq!(store.submit_draft(), Ok("CARGO003".to_string()));

        store.draft = filled_draft();
        assert_eq!(store.submit_draft(), Ok("CARGO004".to_string()));
    }

    #[test]
    fn first_id_on_an_empty_board_is_cargo001() {
        let mut store = CargoStore::default();
        store.draft = filled_draft();
        assert_eq!(store.submit_draft(), Ok("CARGO001".to_string()));
    }

    #[test]
    fn id_counter_survives_list_changes() {
        let mut store = seeded_store();
        store.draft = filled_draft();
        store.submit_draft().unwrap();

        // The counter is authoritative even if the list shrinks.
        store.records.pop();
        store.draft = filled_draft();
        assert_eq!(store.submit_draft(), Ok("CARGO004".to_string()));
    }

    #[test]
    fn submit_rejects_any_missing_field() {
        let missing = [
            DraftCargo {
                name: String::new(),
                ..filled_draft()
            },
            DraftCargo {
                name: "   ".to_string(),
                ..filled_draft()
            },
            DraftCargo {
                origin: None,
                ..filled_draft()
            },
            DraftCargo {
                destination: None,
                ..filled_draft()
            },
            DraftCargo {
                departure: String::new(),
                ..filled_draft()
            },
            DraftCargo {
                departure: "not a datetime".to_string(),
                ..filled_draft()
            },
        ];

        for draft in missing {
            let mut store = seeded_store();
            store.draft = draft.clone();
            assert_eq!(store.submit_draft(), Err(ValidationError::MissingFields));
            assert_eq!(store.records.len(), 2, "rejected submit must not mutate");
            assert!(!store
                .form_error
                .map(|err| err.to_string())
                .unwrap_or_default()
                .is_empty());
            // The draft survives so the user can fix it.
            assert_eq!(store.draft, draft);
        }
    }

    #[test]
    fn successful_submit_clears_draft_and_error() {
        let mut store = seeded_store();
        store.draft.name = "Machine parts".to_string();
        assert!(store.submit_draft().is_err());
        assert!(store.form_error.is_some());

        store.draft = filled_draft();
        let id = store.submit_draft().expect("valid draft commits");
        assert_eq!(store.draft, DraftCargo::default());
        assert_eq!(store.form_error, None);

        let record = store.records.last().expect("record appended");
        assert_eq!(record.id, id);
        assert_eq!(record.status, Status::Pending);
        assert_eq!(record.name, "Machine parts");
        assert_eq!(record.departure, datetime!(2024-12-01 09:15));
    }

    #[test]
    fn delivered_is_blocked_while_departure_is_in_the_future() {
        let mut store = seeded_store();
        let before_departure = datetime!(2024-11-25 12:00);

        let result = store.set_status("CARGO002", Status::Delivered, before_departure);
        assert_eq!(result, Err(TransitionError::DepartureNotReached));
        assert_eq!(store.records[1].status, Status::Pending);
    }

    #[test]
    fn delivered_is_allowed_once_departure_has_passed() {
        let mut store = seeded_store();
        let after_departure = datetime!(2024-11-27 12:00);

        assert_eq!(
            store.set_status("CARGO002", Status::Delivered, after_departure),
            Ok(())
        );
        assert_eq!(store.records[1].status, Status::Delivered);
    }

    #[test]
    fn departure_exactly_at_now_counts_as_reached() {
        let mut store = seeded_store();
        assert_eq!(
            store.set_status("CARGO002", Status::Delivered, datetime!(2024-11-26 10:30)),
            Ok(())
        );
        assert_eq!(store.records[1].status, Status::Delivered);
    }

    #[test]
    fn non_delivered_transitions_are_unrestricted() {
        let mut store = seeded_store();
        let now = datetime!(2024-11-27 12:00);

        // Forward past in_transit straight to delivered, then back again.
        store.set_status("CARGO002", Status::Delivered, now).unwrap();
        store.set_status("CARGO002", Status::Pending, now).unwrap();
        assert_eq!(store.records[1].status, Status::Pending);

        store.set_status("CARGO001", Status::Pending, now).unwrap();
        assert_eq!(store.records[0].status, Status::Pending);
    }

    #[test]
    fn unknown_ids_are_a_silent_no_op() {
        let mut store = seeded_store();
        let snapshot = store.records.clone();

        assert_eq!(
            store.set_status("CARGO999", Status::Delivered, datetime!(2024-11-27 12:00)),
            Ok(())
        );
        assert_eq!(store.records, snapshot);
    }

    #[test]
    fn changing_the_filter_resets_the_page() {
        let mut store = seeded_store();
        store.set_page(3);
        assert_eq!(store.page, 3);

        store.set_filter(StatusFilter::Only(Status::Pending));
        assert_eq!(store.page, 1);
        assert_eq!(store.filter, StatusFilter::Only(Status::Pending));
    }

    #[test]
    fn end_to_end_board_scenario() {
        let mut store = seeded_store();

        store.draft = filled_draft();
        assert_eq!(store.submit_draft(), Ok("CARGO003".to_string()));
        assert_eq!(store.records[2].status, Status::Pending);

        // CARGO002 departed 2024-11-26 10:30: deliverable the day after.
        let now = datetime!(2024-11-27 09:00);
        assert_eq!(store.set_status("CARGO002", Status::Delivered, now), Ok(()));
        assert_eq!(store.records[1].status, Status::Delivered);

        // CARGO001 departs in the future relative to this clock.
        let early = datetime!(2024-11-23 09:00);
        assert_eq!(
            store.set_status("CARGO001", Status::Delivered, early),
            Err(TransitionError::DepartureNotReached)
        );
        assert_eq!(store.records[0].status, Status::InTransit);
    }
}
