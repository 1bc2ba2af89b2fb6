/// Formatea un delta de balance con signo explícito: "+$50.00" / "-$20.00"
pub fn format_signed_usd(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+${:.2}", delta)
    } else {
        format!("-${:.2}", delta.abs())
    }
}

pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_positivo_lleva_signo_mas() {
        assert_eq!(format_signed_usd(50.0), "+$50.00");
        assert_eq!(format_signed_usd(0.5), "+$0.50");
    }

    #[test]
    fn delta_negativo_conserva_el_monto_absoluto() {
        assert_eq!(format_signed_usd(-20.0), "-$20.00");
        assert_eq!(format_signed_usd(-0.02), "-$0.02");
    }

    #[test]
    fn formato_usd_plano() {
        assert_eq!(format_usd(1234.5), "$1234.50");
    }
}
