use super::model;
use super::pricing_rows::PricingRows;
use crate::shared::sequence::SEQUENCE;
use crate::shared::session;
use chrono::NaiveDate;
use contracts::domain::facility::Facility;
use contracts::domain::reference::{Contact, Operator, PaymentMethod, Service};
use leptos::prelude::*;
use std::rc::Rc;

/// Section of the edit form currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSection {
    Location,
    Capacities,
    Pricing,
    Services,
    Contacts,
}

impl EditSection {
    pub const ALL: [EditSection; 5] = [
        EditSection::Location,
        EditSection::Capacities,
        EditSection::Pricing,
        EditSection::Services,
        EditSection::Contacts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditSection::Location => "Location",
            EditSection::Capacities => "Capacities",
            EditSection::Pricing => "Pricing",
            EditSection::Services => "Services",
            EditSection::Contacts => "Contacts",
        }
    }
}

/// ViewModel for the facility edit form
#[derive(Clone)]
pub struct FacilityEditViewModel {
    pub facility: RwSignal<Facility>,
    pub pricing: RwSignal<PricingRows>,
    pub status_until: RwSignal<Option<NaiveDate>>,
    pub services: RwSignal<Vec<Service>>,
    pub payment_methods: RwSignal<Vec<PaymentMethod>>,
    pub contacts: RwSignal<Vec<Contact>>,
    pub operators: RwSignal<Vec<Operator>>,
    pub section: RwSignal<EditSection>,
    pub loaded: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl FacilityEditViewModel {
    pub fn new() -> Self {
        Self {
            facility: RwSignal::new(Facility::new()),
            pricing: RwSignal::new(PricingRows::default()),
            status_until: RwSignal::new(None),
            services: RwSignal::new(Vec::new()),
            payment_methods: RwSignal::new(Vec::new()),
            contacts: RwSignal::new(Vec::new()),
            operators: RwSignal::new(Vec::new()),
            section: RwSignal::new(EditSection::Location),
            loaded: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.facility.get().id.is_some()
    }

    /// Fetch the facility and all reference lists, then initialise the form.
    ///
    /// The form renders only after every fetch has completed; the first
    /// failure lands in the error signal and nothing is initialised.
    pub fn load(&self, id: Option<i64>) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = async {
                let facility = match id {
                    Some(id) => model::fetch_by_id(id).await?,
                    None => Facility::new(),
                };
                let services = model::fetch_services().await?;
                let payment_methods = model::fetch_payment_methods().await?;
                let contacts = model::fetch_contacts().await?;
                let operators = model::fetch_operators().await?;
                Ok::<_, String>((facility, services, payment_methods, contacts, operators))
            }
            .await;

            match loaded {
                Ok((mut facility, services, payment_methods, contacts, operators)) => {
                    if facility.operator_id.is_none() {
                        facility.operator_id = session::get().and_then(|login| login.operator_id);
                    }
                    vm.section.set(if facility.id.is_some() {
                        EditSection::Capacities
                    } else {
                        EditSection::Location
                    });
                    vm.status_until.set(facility.status_until);
                    // persisted rows have no local ids yet; tag them now
                    let rows =
                        PricingRows::from_pricing(std::mem::take(&mut facility.pricing), &SEQUENCE);
                    vm.pricing.set(rows);
                    vm.facility.set(facility);
                    vm.services.set(services);
                    vm.payment_methods.set(payment_methods);
                    vm.contacts.set(contacts);
                    vm.operators.set(operators);
                    vm.loaded.set(true);
                }
                Err(e) => vm.error.set(Some(format!("Load failed: {}", e))),
            }
        });
    }

    // ------------------------------------------------------------------
    // Pricing commands
    // ------------------------------------------------------------------

    pub fn add_pricing_row(&self) {
        self.pricing.update(|rows| rows.add_row(&SEQUENCE));
    }

    pub fn remove_pricing_rows(&self) {
        self.pricing.update(|rows| rows.remove_selected());
    }

    pub fn clone_pricing_rows(&self) {
        self.pricing.update(|rows| rows.clone_selected(&SEQUENCE));
    }

    pub fn select_all_pricing_rows(&self) {
        self.pricing.update(|rows| rows.select_all());
    }

    pub fn unselect_all_pricing_rows(&self) {
        self.pricing.update(|rows| rows.unselect_all());
    }

    pub fn has_pricing_rows(&self) -> bool {
        self.pricing.with(|rows| rows.has_rows())
    }

    // ------------------------------------------------------------------
    // Save
    // ------------------------------------------------------------------

    /// Validate and save, then hand the server-assigned id to `on_saved`.
    ///
    /// The signal read clones the draft, so edits made while the request is
    /// in flight cannot reach the payload.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(i64)>) {
        let mut payload = self.facility.get();
        payload.status_until = self.status_until.get();
        payload.pricing = self.pricing.with(|rows| rows.clone()).into_pricing();

        if let Err(e) = payload.validate() {
            self.error.set(Some(e));
            return;
        }

        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save(&payload).await {
                Ok(id) => (on_saved)(id),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}

impl Default for FacilityEditViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a comma separated alias string into the alias list
pub fn parse_aliases(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases_splits_and_trims() {
        assert_eq!(
            parse_aliases("CG, Keskuspysäköinti"),
            vec!["CG".to_string(), "Keskuspysäköinti".to_string()]
        );
        assert_eq!(parse_aliases("  a ,b,  c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn parse_aliases_of_blank_input_is_empty() {
        assert!(parse_aliases("").is_empty());
        assert!(parse_aliases(" , ,").is_empty());
    }

    #[test]
    fn aliases_round_trip_through_the_rendered_text() {
        let aliases = parse_aliases("CG, Keskuspysäköinti");
        assert_eq!(aliases.join(", "), "CG, Keskuspysäköinti");
    }
}
