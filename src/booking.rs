//! Booking draft, the confirmation summary built from it, and the
//! open/closed state of the confirmation modal.

use crate::catalog::ServiceCatalog;
use crate::i18n::Messages;

/// Form values at the moment of submission. Never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub address: String,
    pub service: String,
    pub time: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Phone,
    Date,
    Address,
    Service,
    Time,
}

impl BookingDraft {
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Phone => &mut self.phone,
            DraftField::Date => &mut self.date,
            DraftField::Address => &mut self.address,
            DraftField::Service => &mut self.service,
            DraftField::Time => &mut self.time,
        };
        *slot = value;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
    pub emphasized: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingSummary {
    pub lines: Vec<SummaryLine>,
}

impl BookingSummary {
    /// Name, phone, service, price, date, time, address, in that order.
    /// Missing values render as empty strings.
    pub fn compose(draft: &BookingDraft, catalog: &ServiceCatalog, messages: &Messages) -> Self {
        let line = |label, value: String| SummaryLine {
            label,
            value,
            emphasized: false,
        };
        let service_label = messages.service_label(&draft.service).unwrap_or_default();
        let time_label = messages.time_label(&draft.time).unwrap_or_default();

        Self {
            lines: vec![
                line(messages.label_name, draft.name.clone()),
                line(messages.label_phone, draft.phone.clone()),
                line(messages.label_service, service_label.to_string()),
                SummaryLine {
                    label: messages.label_price,
                    value: catalog.price_with_unit(&draft.service, messages.currency),
                    emphasized: true,
                },
                line(messages.label_date, draft.date.clone()),
                line(messages.label_time, time_label.to_string()),
                line(messages.label_address, draft.address.clone()),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Button,
    Backdrop,
    Escape,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(BookingSummary),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn open(summary: BookingSummary) -> Self {
        ModalState::Open(summary)
    }

    /// Returns the closed state, or `None` when there is nothing to close.
    /// Every trigger closes to the same state.
    pub fn close(&self, _trigger: CloseTrigger) -> Option<Self> {
        match self {
            ModalState::Open(_) => Some(ModalState::Closed),
            ModalState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PRICE_PLACEHOLDER;
    use crate::i18n::{ARABIC, ENGLISH};

    fn value_of<'a>(summary: &'a BookingSummary, label: &str) -> Option<&'a str> {
        summary
            .lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }

    fn apartment_draft() -> BookingDraft {
        BookingDraft {
            name: "Sara".to_string(),
            phone: "0912345678".to_string(),
            date: "2026-11-02".to_string(),
            address: "123 Main St".to_string(),
            service: "apartment".to_string(),
            time: "10:00".to_string(),
        }
    }

    #[test]
    fn set_updates_only_the_named_field() {
        let mut draft = apartment_draft();
        draft.set(DraftField::Service, "carpet".to_string());
        draft.set(DraftField::Time, "14:00".to_string());
        assert_eq!(draft.service, "carpet");
        assert_eq!(draft.time, "14:00");
        assert_eq!(draft.name, "Sara");
    }

    #[test]
    fn summary_has_all_seven_fields_in_order() {
        let summary = BookingSummary::compose(&apartment_draft(), &ServiceCatalog::standard(), &ENGLISH);
        let labels: Vec<&str> = summary.lines.iter().map(|l| l.label).collect();
        assert_eq!(
            labels,
            ["Name:", "Phone:", "Service:", "Price:", "Date:", "Time:", "Address:"]
        );
        let values: Vec<&str> = summary.lines.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(
            values,
            [
                "Sara",
                "0912345678",
                "Apartment cleaning",
                "90 LYD",
                "2026-11-02",
                "10:00 AM",
                "123 Main St"
            ]
        );
        assert!(summary.lines[3].emphasized);
    }

    #[test]
    fn arabic_summary_uses_local_currency() {
        let summary = BookingSummary::compose(&apartment_draft(), &ServiceCatalog::standard(), &ARABIC);
        assert_eq!(value_of(&summary, ARABIC.label_price), Some("90 د.ل"));
        assert_eq!(value_of(&summary, ARABIC.label_address), Some("123 Main St"));
    }

    #[test]
    fn empty_draft_renders_blanks_and_placeholder_price() {
        let summary = BookingSummary::compose(&BookingDraft::default(), &ServiceCatalog::standard(), &ENGLISH);
        assert_eq!(summary.lines.len(), 7);
        assert_eq!(value_of(&summary, "Name:"), Some(""));
        assert_eq!(value_of(&summary, "Service:"), Some(""));
        assert_eq!(value_of(&summary, "Time:"), Some(""));
        assert_eq!(value_of(&summary, "Price:"), Some(PRICE_PLACEHOLDER));
    }

    #[test]
    fn every_close_trigger_converges() {
        let summary = BookingSummary::compose(&apartment_draft(), &ServiceCatalog::standard(), &ENGLISH);
        let open = ModalState::open(summary);
        assert!(open.is_open());
        for trigger in [CloseTrigger::Button, CloseTrigger::Backdrop, CloseTrigger::Escape] {
            assert_eq!(open.close(trigger), Some(ModalState::Closed));
        }
    }

    #[test]
    fn closing_a_closed_modal_is_a_no_op() {
        assert_eq!(ModalState::Closed.close(CloseTrigger::Escape), None);
    }
}
