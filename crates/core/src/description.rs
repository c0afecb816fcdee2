//! Fixed-template descriptions for generated events.
//!
//! The text is stored verbatim in `olay.aciklama`, so it stays in the
//! dataset's language.

/// Build the description for an event of the given incident type.
///
/// `good` mirrors the nullable `olaylar.good` column: service-type events
/// read as "detected and being serviced", dispatch-type events as "units
/// dispatched to the scene", and an unset flag falls back to a plain report.
pub fn describe(name: &str, good: Option<bool>) -> String {
    match good {
        Some(true) => format!("{name} - Bölgede tespit edildi ve hizmet veriliyor"),
        Some(false) => format!("{name} - Olay yerine ekipler sevk edildi"),
        None => format!("{name} bildirimi"),
    }
}
