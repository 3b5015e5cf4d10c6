//! Generación de números LR (Lorry Receipt)
//!
//! El LR es el identificador único de cara al cliente de cada booking.
//! Para bookings individuales se deriva del timestamp; en un batch cada
//! parcela toma el prefijo del batch más un índice con padding.

use chrono::Utc;

/// Generar un número LR individual a partir del epoch en milisegundos
pub fn generate_lr_number() -> String {
    format!("LR{}", Utc::now().timestamp_millis())
}

/// Derivar el LR de una parcela dentro de un batch.
/// El índice es 0-based y se publica 1-based con padding a dos dígitos,
/// así un batch de 3 bajo "LR123" produce LR123-01, LR123-02, LR123-03.
pub fn batch_lr_number(prefix: &str, index: usize) -> String {
    format!("{}-{:02}", prefix, index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_lr_number_format() {
        let lr = generate_lr_number();
        assert!(lr.starts_with("LR"));
        // epoch millis actual: 13 dígitos
        assert!(lr.len() >= 13);
        assert!(lr[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_batch_lr_number_padding() {
        assert_eq!(batch_lr_number("LR123", 0), "LR123-01");
        assert_eq!(batch_lr_number("LR123", 1), "LR123-02");
        assert_eq!(batch_lr_number("LR123", 8), "LR123-09");
        assert_eq!(batch_lr_number("LR123", 9), "LR123-10");
    }

    #[test]
    fn test_batch_lr_number_beyond_two_digits() {
        // con más de 99 parcelas el índice crece sin truncarse
        assert_eq!(batch_lr_number("LR9", 99), "LR9-100");
    }

    #[test]
    fn test_batch_sequence_is_unique() {
        let lrs: Vec<String> = (0..25).map(|i| batch_lr_number("LR555", i)).collect();
        let mut deduped = lrs.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(lrs.len(), deduped.len());
    }
}
