use super::*;

fn form(name: &str, phone: &str, car: &str, notes: &str) -> FormValues {
    FormValues::new()
        .with(BookingField::Name, name)
        .with(BookingField::Phone, phone)
        .with(BookingField::CarType, car)
        .with(BookingField::Notes, notes)
}

// =============================================================
// Field ids
// =============================================================

#[test]
fn field_ids_match_form_controls() {
    assert_eq!(BookingField::Name.id(), "name");
    assert_eq!(BookingField::CarType.id(), "car-type");
    assert_eq!(BookingField::CarType.error_slot_id(), "car-type-error");
    assert_eq!(BookingField::Phone.error_slot_id(), "phone-error");
}

#[test]
fn modal_starts_closed() {
    assert_eq!(ModalState::default(), ModalState::Closed);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn blank_name_is_the_only_failure() {
    let err = validate(&form("", "08123", "Avanza", "")).unwrap_err();
    assert_eq!(err, vec![BookingField::Name]);
}

#[test]
fn whitespace_counts_as_blank() {
    let err = validate(&form("   ", "\t", "Avanza", "")).unwrap_err();
    assert_eq!(err, vec![BookingField::Name, BookingField::Phone]);
}

#[test]
fn missing_keys_fail_every_required_field() {
    let err = validate(&FormValues::new()).unwrap_err();
    assert_eq!(err, BookingField::REQUIRED.to_vec());
}

#[test]
fn notes_are_optional_and_trimmed() {
    let req = validate(&form(" Budi ", "08123456789", "Avanza", "  ")).unwrap();
    assert_eq!(req.name, "Budi");
    assert_eq!(req.notes, None);

    let req = validate(&form("Budi", "08123456789", "Avanza", " antar ke bandara ")).unwrap();
    assert_eq!(req.notes.as_deref(), Some("antar ke bandara"));
}

#[test]
fn check_required_reports_every_field_in_order() {
    let checks = check_required(&form("Budi", "", "Avanza", ""));
    assert_eq!(
        checks,
        vec![(BookingField::Name, true), (BookingField::Phone, false), (BookingField::CarType, true)]
    );
}

// =============================================================
// Message and link
// =============================================================

#[test]
fn message_without_notes_omits_notes_block() {
    let req = validate(&form("Budi", "08123456789", "Avanza", "")).unwrap();
    let msg = req.message(&Strings::default());
    assert_eq!(
        msg,
        "*PEMESANAN RENTAL MOBIL*\n\n*Informasi Pemesan:*\nNama: Budi\nNo. HP: 08123456789\n\n\
         *Mobil yang Diminati:*\nAvanza\n\nTerima kasih telah menghubungi CV. Enam Satu Rentalindo."
    );
    assert!(!msg.contains("Catatan"));
}

#[test]
fn message_with_notes_places_block_before_closing_line() {
    let req = validate(&form("Budi", "08123456789", "Innova Reborn", "Jemput jam 7")).unwrap();
    let msg = req.message(&Strings::default());
    assert!(msg.contains("*Mobil yang Diminati:*\nInnova Reborn\n\n*Catatan:*\nJemput jam 7\n\nTerima kasih"));
}

#[test]
fn link_percent_encodes_message() {
    let link = whatsapp_link(&WhatsAppConfig::default(), "*Halo*\nNama: Budi & co");
    assert_eq!(link, "https://wa.me/6282311113616?text=%2AHalo%2A%0ANama%3A%20Budi%20%26%20co");
}

#[test]
fn link_tolerates_trailing_slash_in_base_url() {
    let cfg = WhatsAppConfig { base_url: "https://wa.me/".into(), recipient: "62811".into() };
    assert!(whatsapp_link(&cfg, "x").starts_with("https://wa.me/62811?text="));
}

// =============================================================
// Option matching
// =============================================================

#[test]
fn matching_option_uses_exact_visible_text() {
    let options = vec!["-- Pilih Mobil --".to_owned(), "Avanza".to_owned(), "Avanza Veloz".to_owned()];
    assert_eq!(matching_option(&options, "Avanza"), Some(1));
    assert_eq!(matching_option(&options, "Avanza Veloz"), Some(2));
    assert_eq!(matching_option(&options, "avanza"), None);
    assert_eq!(matching_option(&options, ""), None);
}
