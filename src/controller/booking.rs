//! Booking modal controller.

use super::App;
use super::page::Page;
use crate::state::booking::{
    BookingField, FormValues, ModalState, check_required, matching_option, validate, whatsapp_link,
};
use crate::util::debounce::Scheduler;
use crate::util::storage::PreferenceStore;

impl<P: Page, S: PreferenceStore, T: Scheduler> App<P, S, T> {
    /// Open the modal, pre-selecting `car_type` when an option's visible
    /// text matches it exactly.
    pub fn open_booking(&mut self, car_type: Option<&str>) {
        if !self.page.has_booking_modal() {
            log::debug!("booking modal not present");
            return;
        }
        if let Some(car_type) = car_type.filter(|c| !c.is_empty()) {
            let options = self.page.car_type_options();
            match matching_option(&options, car_type) {
                Some(index) => self.page.select_car_type(index),
                None => log::debug!("no car-type option matches {car_type:?}"),
            }
        }
        self.page.hide_confirmation();
        self.page.set_modal_active(true);
        self.page.set_page_scroll_locked(true);
        self.ui.modal = ModalState::Open;
    }

    pub fn close_booking(&mut self) {
        if !self.page.has_booking_modal() {
            return;
        }
        self.page.set_modal_active(false);
        self.page.set_page_scroll_locked(false);
        self.ui.modal = ModalState::Closed;
    }

    /// Validate the form and hand the booking off to WhatsApp.
    ///
    /// Every required field has its error mark set or cleared. On success
    /// the deep link is opened in a new browsing context, the modal closes
    /// and the form resets; the link is returned. On failure nothing else
    /// happens and the blank fields are returned.
    pub fn submit_booking(&mut self, values: &FormValues) -> Result<String, Vec<BookingField>> {
        for (field, filled) in check_required(values) {
            let message = (!filled).then_some(self.config.strings.required_field.as_str());
            self.page.set_field_error(field, message);
        }

        let request = validate(values)?;
        let message = request.message(&self.config.strings);
        let link = whatsapp_link(&self.config.whatsapp, &message);

        log::info!("booking hand-off for {:?}", request.car_type);
        self.page.open_in_new_context(&link);
        self.close_booking();
        self.page.reset_booking_form();
        Ok(link)
    }
}
