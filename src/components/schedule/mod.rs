//! Prayer-times modal overlay.

mod prayer_modal;

pub use prayer_modal::PrayerModal;
