//! The stock wedding-day program applied by `runsheet template`.

use crate::models::NewEvent;

/// Default day-of program: ceremony through the overnight party block
/// (Party & Tanz ends past midnight) and the open-ended
/// Mitternachtssnack marker.
pub fn default_day_program() -> Vec<NewEvent> {
    vec![
        NewEvent::new("Ankunft der Gäste", "13:30").end("14:00").location("Kirche"),
        NewEvent::new("Trauung", "14:00").end("14:45").location("Kirche"),
        NewEvent::new("Sektempfang & Gratulation", "15:00").end("16:30"),
        NewEvent::new("Fotoshooting Brautpaar", "16:30").end("17:30"),
        NewEvent::new("Abendessen", "18:30").end("20:30").location("Festsaal"),
        NewEvent::new("Reden & Programmpunkte", "20:30").end("21:15"),
        NewEvent::new("Party & Tanz", "21:15").end("02:00").location("Festsaal"),
        NewEvent::new("Mitternachtssnack", "00:00"),
    ]
}
